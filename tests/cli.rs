use std::path::{PathBuf};
use std::process::{Command, Output};

use image::{GrayImage};

fn fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("img2texture-cli-{}-{}.png", std::process::id(), name));
    GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap().save(&path).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_img2texture")).args(args).output().unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn grayscale() {
    let path = fixture("grayscale");
    let output = run(&["-n", "tex", "--mode", "L", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tex =\n[[0,128],\n[200,255]];\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn binary_by_default() {
    let path = fixture("binary");
    let output = run(&["--name", "tex", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tex =\n[[0,1],\n[1,1]];\n");
    let explicit = run(&["--name", "tex", "--mode", "1", path.to_str().unwrap()]);
    assert_eq!(explicit.stdout, output.stdout);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn inverted() {
    let path = fixture("inverted");
    let output = run(&["-n", "tex", "--mode", "L", "--invert", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tex =\n[[255,127],\n[55,0]];\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn default_name() {
    let path = fixture("default_name");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("texture =\n[["));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn logs_stay_off_stdout() {
    let path = fixture("verbose");
    let output = run(&["-vvv", "--mode", "L", "--dither", "-n", "tex", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "tex =\n[[0,128],\n[200,255]];\n");
    assert!(!output.stderr.is_empty());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn bad_mode() {
    let path = fixture("bad_mode");
    let output = run(&["--mode", "2", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--mode"));
    assert!(!stderr.contains("cannot load image"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("img2texture-cli-no-such-file.png");
    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot load image"));
}

#[test]
fn missing_argument() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
