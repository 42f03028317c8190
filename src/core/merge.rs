use crate::domain::model::FileLineCount;
use crate::utils::error::{EtlError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MERGED_FILE_NAME: &str = "merged.txt";

/// Merges every regular file in `folder` into `folder/merged.txt`, shortest file first.
pub fn merge_files<P: AsRef<Path>>(folder: P) -> Result<PathBuf> {
    let folder = folder.as_ref();
    let entries = sort_by_line_count(collect_line_counts(folder)?);
    let output = write_merged(folder, &entries)?;

    tracing::info!(
        "Merged {} file(s) into {}",
        entries.len(),
        output.display()
    );
    Ok(output)
}

/// Counts lines the way a text reader with universal newlines would:
/// `\n`, `\r\n` and a lone `\r` each end a line, and trailing text without
/// a terminator is a line of its own.
pub fn count_lines(content: &[u8]) -> usize {
    let mut lines = 0;
    let mut open_line = false;
    let mut bytes = content.iter().peekable();

    while let Some(&byte) = bytes.next() {
        match byte {
            b'\n' => {
                lines += 1;
                open_line = false;
            }
            b'\r' => {
                lines += 1;
                open_line = false;
                bytes.next_if_eq(&&b'\n');
            }
            _ => open_line = true,
        }
    }

    if open_line {
        lines += 1;
    }
    lines
}

/// Line counts for the regular files of `folder`, ordered by file name.
/// The merge output itself is never part of the result.
pub fn collect_line_counts(folder: &Path) -> Result<Vec<FileLineCount>> {
    if !folder.is_dir() {
        return Err(EtlError::DirectoryNotFound {
            path: folder.to_path_buf(),
        });
    }

    let read_dir_error = |source| EtlError::FileReadError {
        path: folder.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name();
        if file_name == MERGED_FILE_NAME {
            tracing::debug!("Skipping previous merge output {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        // 跟隨符號連結；失效的連結視為非一般檔案，其他錯誤照常回報
        let is_file = match fs::metadata(&path) {
            Ok(metadata) => metadata.is_file(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(EtlError::FileReadError {
                    path: path.clone(),
                    source,
                })
            }
        };
        if !is_file {
            tracing::debug!("Skipping non-regular entry {}", path.display());
            continue;
        }
        candidates.push((file_name, path));
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::with_capacity(candidates.len());
    for (file_name, path) in candidates {
        let content = read_input(&path)?;
        let line_count = count_lines(&content);
        tracing::debug!("{}: {} line(s)", path.display(), line_count);

        entries.push(FileLineCount {
            file_name: file_name.to_string_lossy().into_owned(),
            path,
            line_count,
        });
    }

    Ok(entries)
}

/// Stable ascending sort: files with equal line counts keep their relative order.
pub fn sort_by_line_count(mut entries: Vec<FileLineCount>) -> Vec<FileLineCount> {
    entries.sort_by_key(|entry| entry.line_count);
    entries
}

/// Writes `merged.txt` into `folder`: for each entry its name, its line
/// count, then its raw content. Returns the output path.
pub fn write_merged(folder: &Path, entries: &[FileLineCount]) -> Result<PathBuf> {
    let output_path = folder.join(MERGED_FILE_NAME);
    let write_error = |source| EtlError::FileWriteError {
        path: output_path.clone(),
        source,
    };

    let file = File::create(&output_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        let content = read_input(&entry.path)?;
        writeln!(writer, "{}\n{}", entry.file_name, entry.line_count).map_err(write_error)?;
        writer.write_all(&content).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    Ok(output_path)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| EtlError::FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(b""), 0);
        assert_eq!(count_lines(b"one"), 1);
        assert_eq!(count_lines(b"one\n"), 1);
        assert_eq!(count_lines(b"one\ntwo"), 2);
        assert_eq!(count_lines(b"one\ntwo\n"), 2);
        assert_eq!(count_lines(b"\n\n\n"), 3);
    }

    #[test]
    fn test_count_lines_mixed_line_endings() {
        assert_eq!(count_lines(b"one\r\ntwo\r\n"), 2);
        assert_eq!(count_lines(b"one\rtwo\r"), 2);
        assert_eq!(count_lines(b"one\r\n\rthree"), 3);
    }

    #[test]
    fn test_sort_is_stable() {
        let entry = |name: &str, line_count| FileLineCount {
            file_name: name.to_string(),
            path: PathBuf::from(name),
            line_count,
        };
        let sorted = sort_by_line_count(vec![
            entry("a.txt", 3),
            entry("b.txt", 1),
            entry("c.txt", 3),
            entry("d.txt", 1),
        ]);

        let names: Vec<&str> = sorted.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "d.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_missing_directory() {
        let err = collect_line_counts(Path::new("/definitely/not/a/folder")).unwrap_err();
        assert!(matches!(err, EtlError::DirectoryNotFound { .. }));
    }
}
