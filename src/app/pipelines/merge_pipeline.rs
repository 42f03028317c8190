use crate::core::merge::{collect_line_counts, sort_by_line_count, write_merged};
use crate::core::{FileLineCount, Pipeline};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Folder -> per-file line counts -> sorted -> `merged.txt`.
pub struct MergePipeline {
    folder: PathBuf,
}

impl MergePipeline {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl Pipeline for MergePipeline {
    type Extracted = Vec<FileLineCount>;
    type Transformed = Vec<FileLineCount>;

    fn name(&self) -> &str {
        "merge"
    }

    fn extract(&self) -> Result<Vec<FileLineCount>> {
        let entries = collect_line_counts(&self.folder)?;
        tracing::info!(
            "Found {} file(s) in {}",
            entries.len(),
            self.folder.display()
        );
        Ok(entries)
    }

    fn transform(&self, entries: Vec<FileLineCount>) -> Result<Vec<FileLineCount>> {
        Ok(sort_by_line_count(entries))
    }

    fn load(&self, entries: Vec<FileLineCount>) -> Result<String> {
        let output = write_merged(&self.folder, &entries)?;
        Ok(output.display().to_string())
    }
}
