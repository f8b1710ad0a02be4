use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_transit-palette"))
        .args(args)
        .output()?)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_unknown_flag_is_reported_on_stderr() -> Result<()> {
    let output = run(&["-bogus", "-list"])?;
    let stderr = String::from_utf8(output.stderr)?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stderr.contains("Unknown argument: -bogus"), "stderr: {}", stderr);
    assert!(stdout.contains("Spectral"));
    assert!(stdout.contains("山手線"));
    Ok(())
}

#[test]
fn test_missing_flag_value_fails() -> Result<()> {
    let output = run(&["-scheme"])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(!output.status.success());
    assert!(stderr.contains("-scheme requires a scheme name"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_max_must_be_positive() -> Result<()> {
    let output = run(&["-max", "0"])?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!output.status.success());
    assert!(stderr.contains("-max must be a positive number"), "stderr: {}", stderr);

    let output = run(&["-max", "soon"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let dir = scratch_dir("transit_palette_cli_override");
    let config_file = dir.join("config.json");
    fs::write(&config_file, r#"{"scheme": "Spectral", "samples": 8, "fallback_rail_color": [1, 2, 3]}"#)?;

    let output = run(&[
        "-config", config_file.to_str().unwrap(),
        "-scheme", "RdYlGn",
        "-max", "90",
        "-samples", "3",
        "-rail", "山手線",
        "-rail", "都電荒川線",
    ])?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["scheme"], "RdYlGn");
    assert_eq!(doc["max_minutes"], 90.0);
    assert_eq!(doc["stops"][1], "#a50026");
    assert_eq!(doc["stops"][20], 90.0);
    assert_eq!(doc["ramp"].as_array().unwrap().len(), 3);

    let rails = doc["rails"].as_array().unwrap();
    assert_eq!(rails.len(), 2);
    assert_eq!(rails[0]["rgb"], serde_json::json!([154, 205, 50]));
    assert_eq!(rails[1]["rgb"], serde_json::json!([1, 2, 3]));
    assert_eq!(rails[1]["known"], false);

    // Clean up
    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_corrupt_default_config_is_reported() -> Result<()> {
    let dir = scratch_dir("transit_palette_cli_corrupt");
    let app_dir = dir.join("transit-palette");
    fs::create_dir_all(&app_dir)?;
    fs::write(app_dir.join("config.json"), "{ not json")?;

    let output = Command::new(env!("CARGO_BIN_EXE_transit-palette"))
        .env("XDG_CONFIG_HOME", &dir)
        .output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert!(stderr.contains("using default settings"), "stderr: {}", stderr);
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["scheme"], "Spectral");

    // Clean up
    fs::remove_dir_all(&dir)?;
    Ok(())
}
