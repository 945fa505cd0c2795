/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use udverify::file_utils::FileManager;
use crate::common;

fn suffixes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Test that dir_exists rejects missing paths and plain files
#[test]
fn test_dir_exists_withMissingOrFile_shouldReturnFalse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "a.dat", "")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    assert!(!FileManager::dir_exists(temp_dir.path().join("missing")));
    Ok(())
}

/// Test that only allow-listed suffixes are discovered, recursively
#[test]
fn test_find_files_with_suffixes_shouldMatchFileNameSuffixes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "a.dat", "")?;
    common::create_test_file(root, "nested/deeper/b-posn-name", "")?;
    common::create_test_file(root, "nested/c.mo.pos.chnk", "")?;
    common::create_test_file(root, "nested/ignored.conllu", "")?;
    common::create_test_file(root, "notes.DAT", "")?;

    let found = FileManager::find_files_with_suffixes(root, &suffixes(&[".dat", "-posn-name", ".mo.pos.chnk"]))?;
    let mut relative: Vec<String> = found
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    relative.sort();

    assert_eq!(relative, vec!["a.dat", "nested/c.mo.pos.chnk", "nested/deeper/b-posn-name"]);
    Ok(())
}

/// Test that directories named like candidates are not returned
#[test]
fn test_find_files_with_suffixes_shouldSkipDirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    fs::create_dir_all(temp_dir.path().join("folder.dat"))?;

    let found = FileManager::find_files_with_suffixes(temp_dir.path(), &suffixes(&[".dat"]))?;

    assert!(found.is_empty());
    Ok(())
}

/// Test that relocation keeps the relative directory structure
#[test]
fn test_move_preserving_structure_shouldRecreateRelativePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("input");
    let verified = temp_dir.path().join("verified");
    let file = common::create_test_file(&input, "corpus/part1/story.dat", "content")?;

    let destination = FileManager::move_preserving_structure(&file, &input, &verified)?;

    assert_eq!(destination, verified.join("corpus/part1/story.dat"));
    assert!(!file.exists());
    assert_eq!(fs::read_to_string(&destination)?, "content");
    Ok(())
}

/// Test that an existing destination leaves the source untouched
#[test]
fn test_move_preserving_structure_withExistingDestination_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = temp_dir.path().join("input");
    let verified = temp_dir.path().join("verified");
    let file = common::create_test_file(&input, "story.dat", "new")?;
    common::create_test_file(&verified, "story.dat", "old")?;

    assert!(FileManager::move_preserving_structure(&file, &input, &verified).is_err());
    assert!(file.exists());
    assert_eq!(fs::read_to_string(verified.join("story.dat"))?, "old");
    Ok(())
}

/// Test that files outside the input root are rejected
#[test]
fn test_relocated_path_withFileOutsideRoot_shouldFail() {
    let result = FileManager::relocated_path(Path::new("/elsewhere/a.dat"), Path::new("/input"), Path::new("/verified"));
    assert!(result.is_err());
}

/// Test that log entries are appended with a timestamp
#[test]
fn test_append_to_log_file_shouldAppendLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let log_path = temp_dir.path().join("logs/issues.log");

    FileManager::append_to_log_file(&log_path, "first")?;
    FileManager::append_to_log_file(&log_path, "second")?;

    let content = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('[') && lines[0].ends_with("] first"));
    assert!(lines[1].ends_with("] second"));
    Ok(())
}

/// Test that a dangling symlink does not stop discovery of its neighbours
#[cfg(unix)]
#[test]
fn test_find_files_with_suffixes_withDanglingSymlink_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "good.dat", "")?;
    std::os::unix::fs::symlink(root.join("missing-target"), root.join("zz-broken-link.dat"))?;

    let found = FileManager::find_files_with_suffixes(root, &suffixes(&[".dat"]))?;

    assert_eq!(found, vec![root.join("good.dat")]);
    Ok(())
}

/// Test that a symlink to a regular file is discovered but linked directories are not walked
#[cfg(unix)]
#[test]
fn test_find_files_with_suffixes_withSymlinks_shouldKeepFileLinksOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().join("input");
    let outside = temp_dir.path().join("outside");
    let target = common::create_test_file(&outside, "elsewhere.dat", "")?;
    fs::create_dir_all(&root)?;
    std::os::unix::fs::symlink(&target, root.join("linked.dat"))?;
    std::os::unix::fs::symlink(&outside, root.join("linked-dir"))?;

    let found = FileManager::find_files_with_suffixes(&root, &suffixes(&[".dat"]))?;

    assert_eq!(found, vec![root.join("linked.dat")]);
    Ok(())
}
