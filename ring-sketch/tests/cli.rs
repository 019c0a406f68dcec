use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ring-sketch"))
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ring-sketch-{}-{name}", std::process::id()))
}

#[test]
fn missing_arguments_print_usage() {
    let out = bin().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn list_shows_every_choice() {
    let out = bin().arg("--list").output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    for needle in ["Marquise", "seven_stone", "platinum", "VVS1", "CGL"] {
        assert!(text.contains(needle), "missing {needle}");
    }
}

#[test]
fn quote_and_png_for_a_selection() {
    let sel = scratch("sel.json");
    let png = scratch("out.png");
    fs::write(
        &sel,
        r#"{"shape": "Round", "carat": 1.0, "metal": "Yellow Gold", "setting": "Halo"}"#,
    )
    .unwrap();
    let out = bin().arg(&sel).arg(&png).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let quote: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(quote["diamond_cost"], 4000.0);
    assert_eq!(quote["setting_cost"], 1400.0);
    assert_eq!(quote["total_cost"], 5400.0);
    assert_eq!(quote["currency"], "USD");
    assert_eq!(&fs::read(&png).unwrap()[1..4], b"PNG");

    let _ = fs::remove_file(sel);
    let _ = fs::remove_file(png);
}

#[test]
fn invalid_selection_exits_with_error() {
    let sel = scratch("bad.json");
    let svg = scratch("bad.svg");
    fs::write(&sel, r#"{"shape": "Round", "carat": 7.5}"#).unwrap();
    let out = bin().arg(&sel).arg(&svg).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("7.5"));
    assert!(!svg.exists());
    let _ = fs::remove_file(sel);
}

#[test]
fn malformed_selection_reports_like_other_errors() {
    let sel = scratch("malformed.json");
    let png = scratch("malformed.png");
    fs::write(&sel, r#"{"shape": "Round", "carat": "#).unwrap();
    let out = bin().arg(&sel).arg(&png).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.starts_with("error: invalid selection JSON"), "{err}");
    assert!(!png.exists());
    let _ = fs::remove_file(sel);
}

#[test]
fn unsupported_output_extension_is_rejected() {
    let sel = scratch("ext.json");
    let bmp = scratch("out.bmp");
    fs::write(&sel, r#"{"shape": "Round"}"#).unwrap();
    let out = bin().arg(&sel).arg(&bmp).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
    assert!(out.stdout.is_empty());
    assert!(!bmp.exists());
    let _ = fs::remove_file(sel);
}

#[test]
fn negative_price_table_is_an_error() {
    let sel = scratch("tables-sel.json");
    let tables = scratch("tables.json");
    let png = scratch("tables.png");
    fs::write(&sel, r#"{"shape": "Round"}"#).unwrap();
    fs::write(&tables, r#"{"base_per_carat": -1.0}"#).unwrap();
    let out = bin().arg(&sel).arg(&png).arg(&tables).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: price table entry"));
    assert!(!png.exists());
    let _ = fs::remove_file(sel);
    let _ = fs::remove_file(tables);
}
