//! End-to-end runs of the `qdwb` binary.

use std::io::Write;
use std::process::{Command, Output};

fn qdwb(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qdwb"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn qdwb")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "qdwb failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn solar_fao56_example_8() {
    let out = qdwb(&["solar", "--latitude", "-20", "--doy", "246"]);
    let json = stdout_json(&out);
    assert_eq!(json["day_of_year"], 246);
    let ra = json["extraterrestrial_radiation"].as_f64().unwrap();
    assert!((ra - 32.2).abs() < 0.05, "Ra = {ra}");
}

#[test]
fn hargreaves_with_config_latitude() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[site]\nname = \"Tehran\"\nlatitude = 35.69\n\n[output]\npretty = false").unwrap();
    let path = file.path().to_str().unwrap();

    let out = qdwb(&[
        "--config", path, "hargreaves", "--tmin", "22", "--tmax", "37", "--tmean", "29.5",
        "--date", "2023-06-21",
    ]);
    let json = stdout_json(&out);
    assert_eq!(json["method"], "hargreaves-samani");
    assert_eq!(json["site"], "Tehran");
    assert_eq!(json["day_of_year"], 172);
    let eto = json["eto"].as_f64().unwrap();
    assert!((eto - 7.165).abs() < 1e-3, "ETo = {eto}");
}

#[test]
fn hargreaves_rejects_inverted_temperatures() {
    let out = qdwb(&[
        "hargreaves", "--tmin", "30", "--tmax", "10", "--latitude", "0", "--doy", "100",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("tmin"), "stderr: {stderr}");
}

#[test]
fn hargreaves_requires_latitude() {
    let out = qdwb(&["hargreaves", "--tmin", "10", "--tmax", "20", "--doy", "100"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no latitude"));
}

#[test]
fn penman_monteith_reference_value() {
    let out = qdwb(&[
        "penman-monteith", "--delta", "0.5", "--rn", "15", "--soil-heat-flux", "1", "--gamma",
        "0.06", "--tmean", "20", "--u2", "2", "--es", "2.4", "--ea", "1.2",
    ]);
    let json = stdout_json(&out);
    assert_eq!(json["method"], "fao56-penman-monteith");
    let eto = json["eto"].as_f64().unwrap();
    assert!((eto - 5.48988).abs() < 1e-4, "ETo = {eto}");
}
