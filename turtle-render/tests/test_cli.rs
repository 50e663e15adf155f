// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use rstest::rstest;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, NamedTempFile};

const Y_SHAPE: &str = r##"[
    {"turn": 90}, {"forward": 1}, {"turn": -30},
    "push", {"forward": 1}, "pop",
    {"turn": 60}, {"color": "#ff0000"}, {"forward": 1},
    {"arc": {"radius": 0.25, "degrees": 90}}
]"##;

fn instruction_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn png_size(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    (reader.info().width, reader.info().height)
}

#[rstest]
#[case(100)]
#[case(257)]
fn test_render_png(#[case] height: u32) -> Result<(), Box<dyn std::error::Error>> {
    let input = instruction_file(Y_SHAPE);
    let dir = tempdir()?;
    let output = dir.path().join("y.png");

    Command::cargo_bin("turtle-render")?
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .arg("--height")
        .arg(height.to_string())
        .arg("--background")
        .arg("#abc")
        .assert()
        .success();

    let (width, h) = png_size(&output);
    assert_eq!(h, height);
    assert!(width > 0 && width < height);
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    Command::cargo_bin("turtle-render")?
        .arg("-i")
        .arg(dir.path().join("nope.json"))
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
    Ok(())
}

#[test]
fn test_stack_underflow_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let input = instruction_file(r#"[{"forward": 1}, "pop"]"#);
    let dir = tempdir()?;
    let output = dir.path().join("out.png");
    Command::cargo_bin("turtle-render")?
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("instruction 2/2").and(predicate::str::contains("empty stack")));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_bad_background_color() -> Result<(), Box<dyn std::error::Error>> {
    let input = instruction_file(Y_SHAPE);
    let dir = tempdir()?;
    Command::cargo_bin("turtle-render")?
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .arg("--background")
        .arg("not-a-color")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse color"));
    Ok(())
}

#[test]
fn test_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let input = instruction_file(r#"{"forward": 1}"#);
    let dir = tempdir()?;
    Command::cargo_bin("turtle-render")?
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse instruction file"));
    Ok(())
}
