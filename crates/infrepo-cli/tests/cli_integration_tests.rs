//! Integration tests for the `infrepo` binary.
//!
//! A small shell script plays the part of aapt, so these only run on Unix.

#![cfg(unix)]
#![allow(non_snake_case)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;
use tempfile::TempDir;

// Writing a script while another test forks can make exec fail with ETXTBSY
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

const FAKE_AAPT: &str = r#"#!/bin/sh
case "$(basename "$3")" in
  alpha.apk)
    echo "package: name='com.example.alpha' versionCode='5' versionName='1.5'"
    echo "sdkVersion:'21'"
    echo "application-label:'Alpha'"
    echo "application-icon-160:'res/icon.png'"
    echo "meta-data: name='app_desc' value='One, two'"
    ;;
  *)
    echo "garbage" >&2
    exit 1
    ;;
esac
"#;

fn infrepo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_infrepo"))
}

fn write_script(dir: &Path) -> PathBuf {
    let path = dir.join("aapt");
    fs::write(&path, FAKE_AAPT).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn write_package(dir: &Path, name: &str, icon: Option<&[u8]>) {
    let file = fs::File::create(dir.join(name)).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("AndroidManifest.xml", options).unwrap();
    zip.write_all(b"<manifest/>").unwrap();
    if let Some(icon) = icon {
        zip.start_file("res/icon.png", options).unwrap();
        zip.write_all(icon).unwrap();
    }
    zip.finish().unwrap();
}

fn generate(tool: &Path, dir: &Path) -> Output {
    infrepo()
        .arg("generate")
        .arg("--dump-tool")
        .arg(tool)
        .arg("--dir")
        .arg(dir)
        .arg("--log-level")
        .arg("warn")
        .output()
        .unwrap()
}

#[test]
fn generate___script_tool___writes_manifest_and_bundle() {
    let _guard = SPAWN_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let tool = write_script(temp_dir.path());
    let work_dir = temp_dir.path().join("update");
    fs::create_dir(&work_dir).unwrap();
    write_package(&work_dir, "alpha.apk", Some(b"icon"));
    write_package(&work_dir, "beta.apk", None);

    let output = generate(&tool, &work_dir);

    assert!(output.status.success(), "{output:?}");
    let manifest = fs::read_to_string(work_dir.join("product.inf")).unwrap();
    let lines: Vec<&str> = manifest.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with(
        "Android,plugin,com.example.alpha,Alpha,1.5,5,alpha.apk,alpha.png,One. two,"
    ));
    assert!(lines[2].starts_with("Android,plugin,,beta,,,beta.apk,,No description for beta,"));
    assert!(work_dir.join("alpha.png").is_file());
    assert!(work_dir.join("product.infz").is_file());
}

#[test]
fn generate___missing_tool___fails_with_path() {
    let _guard = SPAWN_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    let output = generate(&temp_dir.path().join("no-aapt"), temp_dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-aapt"), "{stderr}");
    assert!(!temp_dir.path().join("product.inf").exists());
}

#[test]
fn generate___missing_dir___fails_with_path() {
    let _guard = SPAWN_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let tool = write_script(temp_dir.path());

    let output = generate(&tool, &temp_dir.path().join("no-update-dir"));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-update-dir"));
}

#[test]
fn list___generated_bundle___shows_entries() {
    let _guard = SPAWN_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let tool = write_script(temp_dir.path());
    write_package(temp_dir.path(), "alpha.apk", Some(b"icon"));
    assert!(generate(&tool, temp_dir.path()).status.success());

    let output = infrepo()
        .arg("list")
        .arg(temp_dir.path().join("product.infz"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("product.inf"));
    assert!(stdout.contains("alpha.png"));
    assert!(stdout.contains("com.example.alpha 1.5"));
}
