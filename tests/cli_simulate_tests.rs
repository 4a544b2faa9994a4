//! End-to-end tests for `palettegen simulate`.

mod fixtures;
use fixtures::*;

#[test]
fn test_simulate_all_visions() {
    let output = run(&["simulate", "#6366f1", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    let gallery = value.as_array().unwrap();
    assert_eq!(gallery.len(), 4);

    let visions: Vec<&str> = gallery
        .iter()
        .map(|s| s["vision"].as_str().unwrap())
        .collect();
    assert_eq!(
        visions,
        ["normal", "protanopia", "deuteranopia", "tritanopia"]
    );

    assert_eq!(gallery[0]["title"], "Normal Vision");
    assert_eq!(gallery[0]["colors"][2], "#6366f1");
    for simulation in gallery {
        assert_eq!(simulation["colors"].as_array().unwrap().len(), 5);
    }
}

#[test]
fn test_simulate_single_vision() {
    let output = run(&["simulate", "#ff0000", "--vision", "protanopia", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    let gallery = value.as_array().unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0]["vision"], "protanopia");
    assert_eq!(gallery[0]["description"], "Red-blind (1% of males)");
    // The monochromatic base slot holds pure red, here under protanopia
    assert_eq!(gallery[0]["colors"][2], "#918e00");
}

#[test]
fn test_simulate_unknown_vision_falls_back_to_normal() {
    let output = run(&["simulate", "#ff0000", "--vision", "sepia", "--json"]);
    assert_exit(&output, 0);

    let value = stdout_json(&output);
    assert_eq!(value[0]["vision"], "normal");
    assert_eq!(value[0]["colors"][2], "#ff0000");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sepia"), "stderr: {stderr}");
}

#[test]
fn test_simulate_human_readable() {
    let output = run(&["simulate", "#6366f1", "--vision", "tritanopia"]);
    assert_exit(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tritanopia - Blue-blind (rare)"));
    assert!(stdout.contains("Base"));
}
