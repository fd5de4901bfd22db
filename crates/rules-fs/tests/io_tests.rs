use rules_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file_and_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("output").join(".clinerules"));

    io::write_atomic(&path, b"### BEGIN SYSTEM\nrules").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "### BEGIN SYSTEM\nrules");
}

#[test]
fn test_write_text_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(".clinerules");
    fs::write(&file_path, "a much longer original body").unwrap();

    io::write_text(&NormalizedPath::new(&file_path), "short").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
}

#[test]
fn test_write_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("rules.md"));

    io::write_text(&path, "content").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["rules.md".to_string()]);
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/clinerules_core.md");
    let result = io::read_text(&path);
    assert!(matches!(result, Err(rules_fs::Error::Io { .. })));
}

#[test]
fn test_read_text_invalid_utf8_is_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("bad.md");
    fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

    let result = io::read_text(&NormalizedPath::new(&file_path));
    assert!(result.is_err());
}

#[test]
fn test_ensure_dir_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path().join("output"));

    io::ensure_dir(&dir).unwrap();
    io::ensure_dir(&dir).unwrap();

    assert!(dir.is_dir());
}
