use crate::artifacts::diff::file_diff::FileDiff;
use crate::artifacts::diff::tree_diff::{ChangeFilter, ChangeType, ComparisonResult};
use colored::Colorize;
use derive_new::new;

pub const IDENTICAL_MESSAGE: &str = "Packages are identical.\n";

/// Header lines (`diff`, `---`, `+++`) opening every text diff body
const FILE_HEADER_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Unified,
    Summary,
}

/// Render a comparison result as plain text, listing every change
pub fn render(result: &ComparisonResult, mode: RenderMode) -> String {
    Formatter::new(mode, ChangeFilter::all(), false).render(result)
}

/// Text rendering of a [`ComparisonResult`]
///
/// The filter only hides listed changes; the closing count line always
/// reports every change.
#[derive(Debug, Clone, Copy, new)]
pub struct Formatter {
    mode: RenderMode,
    filter: ChangeFilter,
    styled: bool,
}

impl Formatter {
    pub fn render(&self, result: &ComparisonResult) -> String {
        if result.is_identical() {
            return IDENTICAL_MESSAGE.to_string();
        }

        match self.mode {
            RenderMode::Unified => self.render_unified(result),
            RenderMode::Summary => self.render_summary(result),
        }
    }

    fn render_unified(&self, result: &ComparisonResult) -> String {
        let mut out = String::new();

        if ChangeType::Modified.matches_filter(self.filter) {
            for file_diff in result.file_diffs() {
                out.push_str(&self.style_file_diff(file_diff));
                out.push('\n');
            }
        }

        for (change, side) in [(ChangeType::Deleted, 'a'), (ChangeType::Added, 'b')] {
            if !change.matches_filter(self.filter) {
                continue;
            }
            for path in result.paths(change) {
                out.push_str(&format!("Only in {side}: {}\n", path.display()));
            }
        }

        out.push('\n');
        out.push_str(&summary_line(result));
        out.push('\n');

        out
    }

    fn render_summary(&self, result: &ComparisonResult) -> String {
        let mut out = String::new();

        for change in [ChangeType::Modified, ChangeType::Added, ChangeType::Deleted] {
            if !change.matches_filter(self.filter) {
                continue;
            }
            for path in result.paths(change) {
                let status = self.style_status(change);
                out.push_str(&format!("{status} {}\n", path.display()));
            }
        }

        out.push_str(&summary_line(result));
        out.push('\n');

        out
    }

    fn style_status(&self, change: ChangeType) -> String {
        let status = change.status_char().to_string();
        if !self.styled {
            return status;
        }

        match change {
            ChangeType::Added => status.green().to_string(),
            ChangeType::Deleted => status.red().to_string(),
            ChangeType::Modified => status.yellow().to_string(),
        }
    }

    fn style_file_diff(&self, file_diff: &FileDiff) -> String {
        if !self.styled {
            return file_diff.diff_text().to_string();
        }
        if file_diff.is_binary() {
            return file_diff.diff_text().bold().to_string();
        }

        let mut out = String::new();
        for (index, line) in file_diff.diff_text().lines().enumerate() {
            let styled = if index < FILE_HEADER_LINES {
                line.bold()
            } else if line.starts_with("@@") {
                line.cyan()
            } else if line.starts_with('+') {
                line.green()
            } else if line.starts_with('-') {
                line.red()
            } else {
                line.normal()
            };
            out.push_str(&styled.to_string());
            out.push('\n');
        }

        out
    }
}

/// Non-zero counts, e.g. `1 modified, 2 added, 3 unchanged`
pub fn summary_line(result: &ComparisonResult) -> String {
    [
        (result.modified().len(), "modified"),
        (result.only_in_right().len(), "added"),
        (result.only_in_left().len(), "removed"),
        (result.unchanged().len(), "unchanged"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}"))
    .collect::<Vec<_>>()
    .join(", ")
}
