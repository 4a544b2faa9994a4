//! End-to-end tests for `palettegen palette` and `palettegen convert`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Palette Command Tests
// ============================================================================

#[test]
fn test_palette_default_scheme_is_monochromatic() {
    let output = run(&["palette", "#6366f1", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert_eq!(value["scheme"], "monochromatic");
    assert_eq!(value["base"], "#6366f1");

    let colors = value["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0]["role"], "Lightest");
    assert_eq!(colors[2]["role"], "Base");
    assert_eq!(colors[2]["color"], "#6366f1");
    assert_eq!(colors[4]["role"], "Darkest");
}

#[test]
fn test_palette_complementary_json() {
    let output = run(&["palette", "#6366f1", "--scheme", "complementary", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    let hexes: Vec<&str> = value["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["color"].as_str().unwrap())
        .collect();
    assert_eq!(
        hexes,
        ["#6366f1", "#f2ef64", "#3639d3", "#d3d036", "#c8c8ea"]
    );
    assert_eq!(value["colors"][0]["role"], "Primary");
}

#[test]
fn test_palette_every_scheme_keeps_base() {
    let schemes = [
        "monochromatic",
        "complementary",
        "analogous",
        "triadic",
        "tetradic",
    ];
    for scheme in schemes {
        let output = run(&["palette", "6366F1", "-s", scheme, "--json"]);
        assert_exit(&output, 0);

        let value = stdout_json(&output);
        let colors = value["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 5, "{scheme} should have five colors");
        assert!(
            colors.iter().any(|c| c["color"] == "#6366f1"),
            "{scheme} should contain the base color"
        );
    }
}

#[test]
fn test_palette_human_readable() {
    let output = run(&["palette", "#ff0000", "--scheme", "analogous"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scheme: analogous"));
    assert!(stdout.contains("#ff0080"));
    assert!(stdout.contains("#ff8000"));
    assert!(stdout.contains("Primary"));
}

#[test]
fn test_palette_uses_configured_defaults() {
    let config_dir = temp_config_dir("[palette]\nbase = \"#ff0000\"\nscheme = \"triadic\"\n");

    let output = run_in(&["palette", "--json"], config_dir.path());
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert_eq!(value["scheme"], "triadic");
    assert_eq!(value["base"], "#ff0000");
    assert_eq!(value["colors"][1]["color"], "#00ff00");
}

#[test]
fn test_palette_invalid_hex_exits_validation() {
    let output = run(&["palette", "#12345"]);
    assert_exit(&output, 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid hex color"), "stderr: {stderr}");
}

#[test]
fn test_palette_unknown_scheme_rejected() {
    let output = run(&["palette", "#6366f1", "--scheme", "pastel"]);
    assert!(!output.status.success());
}

// ============================================================================
// Convert Command Tests
// ============================================================================

#[test]
fn test_convert_json() {
    let output = run(&["convert", "#6366F1", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert_eq!(value["hex"], "#6366f1");
    assert_eq!(value["rgb"], serde_json::json!([99, 102, 241]));
    assert_eq!(value["hsl"]["h"], 239);
    assert_eq!(value["hsl"]["s"], 84);
    assert_eq!(value["hsl"]["l"], 67);

    let luminance = value["luminance"].as_f64().unwrap();
    assert!((luminance - 0.1851).abs() < 1e-3);
}

#[test]
fn test_convert_human_readable() {
    let output = run(&["convert", "ff0000"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#ff0000"));
    assert!(stdout.contains("rgb(255, 0, 0)"));
    assert!(stdout.contains("hsl(0, 100%, 50%)"));
}

#[test]
fn test_convert_invalid_color() {
    let output = run(&["convert", "not-a-color"]);
    assert_exit(&output, 1);
}
