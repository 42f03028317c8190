use anyhow::Result;
use cookbook_etl::core::merge::{collect_line_counts, count_lines, write_merged, MERGED_FILE_NAME};
use cookbook_etl::core::FileLineCount;
use cookbook_etl::{merge_files, EtlError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_merge_orders_by_line_count() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("a.txt"), "one\ntwo\nthree\n")?;
    fs::write(temp_dir.path().join("b.txt"), "single\n")?;

    let output = merge_files(temp_dir.path())?;

    assert_eq!(output, temp_dir.path().join(MERGED_FILE_NAME));
    assert_eq!(
        fs::read_to_string(&output)?,
        "b.txt\n1\nsingle\na.txt\n3\none\ntwo\nthree\n"
    );
    Ok(())
}

#[test]
fn test_merge_empty_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = merge_files(temp_dir.path())?;

    assert!(output.is_file());
    assert!(fs::read(&output)?.is_empty());
    Ok(())
}

#[test]
fn test_rerun_does_not_include_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("1.txt"), "a\nb\n")?;

    let first = fs::read(merge_files(temp_dir.path())?)?;
    let second = fs::read(merge_files(temp_dir.path())?)?;

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(second)?, "1.txt\n2\na\nb\n");
    Ok(())
}

#[test]
fn test_subdirectories_are_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir(temp_dir.path().join("nested"))?;
    fs::write(temp_dir.path().join("nested").join("inner.txt"), "hidden\n")?;
    fs::write(temp_dir.path().join("top.txt"), "visible\n")?;

    let merged = fs::read_to_string(merge_files(temp_dir.path())?)?;

    assert_eq!(merged, "top.txt\n1\nvisible\n");
    Ok(())
}

#[test]
fn test_content_is_copied_verbatim() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let raw: &[u8] = b"line one\r\nline two\r\nno newline at end";
    fs::write(temp_dir.path().join("crlf.txt"), raw)?;

    let merged = fs::read(merge_files(temp_dir.path())?)?;

    let mut expected = b"crlf.txt\n3\n".to_vec();
    expected.extend_from_slice(raw);
    assert_eq!(merged, expected);
    Ok(())
}

#[test]
fn test_equal_line_counts_keep_name_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("c.txt"), "c1\nc2\n")?;
    fs::write(temp_dir.path().join("a.txt"), "a1\na2\n")?;
    fs::write(temp_dir.path().join("b.txt"), "b1\n")?;

    let merged = fs::read_to_string(merge_files(temp_dir.path())?)?;

    assert_eq!(
        merged,
        "b.txt\n1\nb1\na.txt\n2\na1\na2\nc.txt\n2\nc1\nc2\n"
    );
    Ok(())
}

#[test]
fn test_output_line_total_covers_headers_and_content() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let inputs = [
        ("1.txt", "x\ny\nz\n"),
        ("2.txt", "only\n"),
        ("3.txt", ""),
        ("4.txt", "p\nq\n"),
    ];
    for (name, content) in inputs {
        fs::write(temp_dir.path().join(name), content)?;
    }

    let entries = collect_line_counts(temp_dir.path())?;
    let reported: usize = entries.iter().map(|e| e.line_count).sum();

    let merged = fs::read(merge_files(temp_dir.path())?)?;
    assert!(count_lines(&merged) >= reported + 2 * entries.len());

    let text = String::from_utf8(merged)?;
    for (name, content) in inputs {
        assert_eq!(text.matches(&format!("{}\n", name)).count(), 1);
        if !content.is_empty() {
            assert!(text.contains(content));
        }
    }
    Ok(())
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let err = merge_files(&missing).unwrap_err();
    assert!(matches!(err, EtlError::DirectoryNotFound { path } if path == missing));
}

#[test]
fn test_file_path_is_not_a_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "text")?;

    let err = merge_files(&file).unwrap_err();
    assert!(matches!(err, EtlError::DirectoryNotFound { .. }));
    Ok(())
}

#[test]
fn test_input_vanishing_before_write_pass_is_read_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let gone = temp_dir.path().join("gone.txt");
    let entries = [FileLineCount {
        file_name: "gone.txt".to_string(),
        path: gone.clone(),
        line_count: 1,
    }];

    let err = write_merged(temp_dir.path(), &entries).unwrap_err();
    assert!(matches!(err, EtlError::FileReadError { path, .. } if path == gone));
    Ok(())
}

#[test]
fn test_unwritable_output_is_write_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("a.txt"), "a\n")?;
    // 輸出位置被資料夾佔用
    fs::create_dir(temp_dir.path().join(MERGED_FILE_NAME))?;

    let err = merge_files(temp_dir.path()).unwrap_err();
    let output = temp_dir.path().join(MERGED_FILE_NAME);
    assert!(matches!(err, EtlError::FileWriteError { path, .. } if path == output));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::os::unix::fs::symlink(
        temp_dir.path().join("missing.txt"),
        temp_dir.path().join("dangling.txt"),
    )?;
    fs::write(temp_dir.path().join("real.txt"), "r\n")?;

    let merged = fs::read_to_string(merge_files(temp_dir.path())?)?;
    assert_eq!(merged, "real.txt\n1\nr\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_read_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let looped = temp_dir.path().join("loop.txt");
    std::os::unix::fs::symlink(&looped, &looped)?;

    let err = merge_files(temp_dir.path()).unwrap_err();
    assert!(matches!(err, EtlError::FileReadError { path, .. } if path == looped));
    Ok(())
}
