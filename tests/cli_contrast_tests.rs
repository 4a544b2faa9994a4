//! End-to-end tests for `palettegen contrast` and `palettegen audit`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Contrast Command Tests
// ============================================================================

#[test]
fn test_contrast_black_on_white() {
    let output = run(&["contrast", "#000000", "#ffffff", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert!((value["ratio"].as_f64().unwrap() - 21.0).abs() < 1e-9);
    assert_eq!(value["aa"], true);
    assert_eq!(value["aaa"], true);
    assert_eq!(value["large"], true);
    assert_eq!(value["grade"], "aaa");
    assert!(value.get("suggestion").is_none());
}

#[test]
fn test_contrast_below_target_suggests_and_fails() {
    let output = run(&["contrast", "#cccccc", "#ffffff", "--json"]);
    assert_exit(&output, 1);

    let value = stdout_json(&output);
    assert_eq!(value["grade"], "fail");
    assert_eq!(value["suggestion"], "#737373");
    assert_eq!(value["target_ratio"], 4.5);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("below target"), "stderr: {stderr}");
}

#[test]
fn test_contrast_indigo_on_white_is_large_text_only() {
    let output = run(&["contrast", "#6366f1", "#ffffff", "--json"]);
    assert_exit(&output, 1);

    let value = stdout_json(&output);
    let ratio = value["ratio"].as_f64().unwrap();
    assert!((ratio - 4.47).abs() < 0.01, "ratio was {ratio}");
    assert_eq!(value["aa"], false);
    assert_eq!(value["large"], true);
    assert_eq!(value["grade"], "large_only");
    assert_eq!(value["suggestion"], "#5b5df1");
}

#[test]
fn test_contrast_custom_target() {
    // Passes AA but not the requested 7:1
    let output = run(&["contrast", "#6366f1", "#000000", "--target", "7", "--json"]);
    assert_exit(&output, 1);

    let value = stdout_json(&output);
    assert_eq!(value["aa"], true);
    assert_eq!(value["suggestion"], "#8a8bf5");

    let output = run(&["contrast", "#6366f1", "#000000", "--target", "4.5"]);
    assert_exit(&output, 0);
}

#[test]
fn test_contrast_target_from_config() {
    let config_dir = temp_config_dir("[contrast]\ntarget_ratio = 3.0\n");
    let output = run_in(&["contrast", "#6366f1", "#ffffff"], config_dir.path());
    assert_exit(&output, 0);
}

#[test]
fn test_contrast_target_out_of_range() {
    let output = run(&["contrast", "#000000", "#ffffff", "--target", "25"]);
    assert_exit(&output, 1);
}

#[test]
fn test_contrast_human_readable() {
    let output = run(&["contrast", "#cccccc", "#ffffff"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ratio:   1.61:1"), "stdout: {stdout}");
    assert!(stdout.contains("Failed"));
    assert!(stdout.contains("Suggest: #737373"));
}

// ============================================================================
// Audit Command Tests
// ============================================================================

#[test]
fn test_audit_default_backgrounds() {
    let output = run(&["audit", "#6366f1", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(value["passed"], 1);
    assert_eq!(value["failed"], 2);

    assert_eq!(checks[0]["background"]["name"], "White Background");
    assert_eq!(checks[0]["role"], "Base");
    assert_eq!(checks[0]["report"]["foreground"], "#6366f1");
    assert_eq!(checks[0]["report"]["suggestion"], "#5b5df1");

    assert_eq!(checks[1]["background"]["color"], "#000000");
    assert_eq!(checks[1]["report"]["aa"], true);
    assert!(checks[1]["report"].get("suggestion").is_none());

    let gray_ratio = checks[2]["report"]["ratio"].as_f64().unwrap();
    assert!((gray_ratio - 4.06).abs() < 0.01);
}

#[test]
fn test_audit_strict_fails_on_any_miss() {
    let output = run(&["audit", "#6366f1", "--strict"]);
    assert_exit(&output, 1);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Summary: 1 passed, 2 failed"));

    let output = run(&["audit", "#000000", "--strict"]);
    assert_exit(&output, 1);

    let output = run(&["audit", "#6366f1", "--strict", "--target", "3"]);
    assert_exit(&output, 0);
}

#[test]
fn test_audit_uses_primary_for_general_schemes() {
    let output = run(&["audit", "#6366f1", "-s", "tetradic", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert_eq!(value["checks"][0]["role"], "Primary");
    assert_eq!(value["palette"]["scheme"], "tetradic");
}

#[test]
fn test_audit_custom_backgrounds() {
    let config_dir = temp_config_dir(
        r##"
[contrast]
backgrounds = [
    { name = "Ink", color = "#111111", use_case = "Dark panels" },
]
"##,
    );

    let output = run_in(&["audit", "#ffffff", "--strict"], config_dir.path());
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ink"));
    assert!(stdout.contains("Dark panels"));
    assert!(stdout.contains("Summary: 1 passed, 0 failed"));
}
