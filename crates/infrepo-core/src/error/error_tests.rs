#![allow(non_snake_case)]

use super::*;

#[test]
fn RepoError___dump_tool_not_found___names_path() {
    let err = RepoError::DumpToolNotFound(PathBuf::from("/opt/build-tools/aapt"));

    assert_eq!(err.to_string(), "dump tool not found: /opt/build-tools/aapt");
}

#[test]
fn RepoError___work_dir_not_found___names_path() {
    let err = RepoError::WorkDirNotFound(PathBuf::from("/srv/update"));

    assert_eq!(err.to_string(), "working directory not found: /srv/update");
}

#[test]
fn RepoError___config___displays_message() {
    let err = RepoError::Config("icon_density must be greater than zero".to_string());

    assert_eq!(
        err.to_string(),
        "configuration error: icon_density must be greater than zero"
    );
}

#[test]
fn RepoError___from_io_error___converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: RepoError = io_err.into();

    assert!(matches!(err, RepoError::Io(_)));
    assert!(err.to_string().contains("access denied"));
}

#[test]
fn RepoError___from_toml_error___becomes_config_error() {
    let toml_err = toml::from_str::<toml::Table>("work_dir = ").unwrap_err();
    let err: RepoError = toml_err.into();

    assert!(matches!(err, RepoError::Config(_)));
}
