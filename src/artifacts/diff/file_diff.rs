use crate::artifacts::diff::binary::is_binary;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::lcs::{DiffAlgorithm, LcsDiff};
use derive_new::new;
use std::path::{Path, PathBuf};

pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Diff record of one modified path
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileDiff {
    path: PathBuf,
    is_binary: bool,
    diff_text: String,
}

impl FileDiff {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_binary(&self) -> bool {
        self.is_binary
    }

    pub fn diff_text(&self) -> &str {
        &self.diff_text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileComparison {
    Unchanged,
    Modified(FileDiff),
}

/// Compares the two versions of a path present in both trees
#[derive(Debug, Clone, Copy, new)]
pub struct FileComparator {
    context: usize,
}

impl FileComparator {
    pub fn compare(&self, path: &Path, left: &[u8], right: &[u8]) -> FileComparison {
        if left == right {
            return FileComparison::Unchanged;
        }

        let file_diff = if is_binary(left) || is_binary(right) {
            let name = path.display();
            FileDiff::new(
                path.to_path_buf(),
                true,
                format!("Binary files a/{name} and b/{name} differ"),
            )
        } else {
            FileDiff::new(
                path.to_path_buf(),
                false,
                self.unified_diff(path, left, right),
            )
        };

        FileComparison::Modified(file_diff)
    }

    /// Render a git-style unified diff body for two text buffers
    ///
    /// Lines are compared as raw bytes and decoded lossily only for output,
    /// so buffers differing in invalid UTF-8 still show their changed lines.
    /// Every line, headers included, ends with `\n`.
    pub fn unified_diff(&self, path: &Path, left: &[u8], right: &[u8]) -> String {
        let a = split_lines(left);
        let b = split_lines(right);

        let hunks = LcsDiff::new(&a, &b).hunks(self.context);

        let name = path.display();
        let mut text = format!("diff a/{name} b/{name}\n--- a/{name}\n+++ b/{name}\n");

        if hunks.is_empty() {
            // only the final line terminator differs
            if left.ends_with(b"\n") != right.ends_with(b"\n") {
                text.push_str(NO_NEWLINE_MARKER);
                text.push('\n');
            }
            return text;
        }

        for hunk in &hunks {
            write_hunk(&mut text, hunk);
        }

        text
    }
}

fn write_hunk(text: &mut String, hunk: &Hunk<&[u8]>) {
    text.push_str(&hunk.header());
    text.push('\n');
    for edit in hunk.edits() {
        text.push(edit.marker());
        text.push_str(&String::from_utf8_lossy(edit.value()));
        text.push('\n');
    }
}

/// Split on `\n`, dropping the empty element left by a final terminator
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut lines = content.split(|&byte| byte == b'\n').collect::<Vec<_>>();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}
