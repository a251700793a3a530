use super::find_sources;
use crate::language::Languages;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_directories_are_walked_for_known_extensions() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/inner")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join("main.go"), "package main\n").unwrap();
    fs::write(root.join("README.md"), "# readme\n").unwrap();
    fs::write(root.join("pkg/inner/lib.rs"), "fn f() {}\n").unwrap();
    fs::write(root.join("pkg/a.c"), "int x;\n").unwrap();
    fs::write(root.join(".git/hook.c"), "int y;\n").unwrap();

    let sources = find_sources(&[root.to_path_buf()], &Languages::builtin()).unwrap();
    let relative: Vec<_> = sources
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(relative, vec!["main.go", "pkg/a.c", "pkg/inner/lib.rs"]);
}

#[test]
fn test_explicit_files_are_kept() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "hello\n").unwrap();
    let sources = find_sources(&[notes.clone()], &Languages::builtin()).unwrap();
    assert_eq!(sources, vec![notes]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.go");
    assert!(find_sources(&[missing], &Languages::builtin()).is_err());
}
