use crate::artifacts::diff::edit::Edit;

/// A contiguous, context-padded slice of an edit script
///
/// Start lines are 1-based, as printed in `@@ -a,b +c,d @@` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    a_size: usize,
    b_start: usize,
    b_size: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group the changes of `script` into hunks with `context` lines around them
    ///
    /// Two changes at most `2 * context` operations apart share a hunk, so
    /// their padding never overlaps across hunks. A script without changes
    /// yields no hunks.
    pub fn build(script: &[Edit<T>], context: usize) -> Vec<Self> {
        let changes = script
            .iter()
            .enumerate()
            .filter(|(_, edit)| edit.is_change())
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        let Some((&first, rest)) = changes.split_first() else {
            return Vec::new();
        };

        let mut hunks = Vec::new();
        let (mut group_start, mut group_end) = (first, first);

        for &change in rest {
            if change - group_end > 2 * context {
                hunks.push(Self::from_group(script, group_start, group_end, context));
                group_start = change;
            }
            group_end = change;
        }
        hunks.push(Self::from_group(script, group_start, group_end, context));

        hunks
    }

    fn from_group(script: &[Edit<T>], first: usize, last: usize, context: usize) -> Self {
        let start = first.saturating_sub(context);
        let end = (last + context).min(script.len() - 1);

        let (a_offset, b_offset) = Self::line_counts(&script[..start]);
        let edits = script[start..=end].to_vec();
        let (a_size, b_size) = Self::line_counts(&edits);

        Hunk {
            a_start: a_offset + 1,
            a_size,
            b_start: b_offset + 1,
            b_size,
            edits,
        }
    }

    /// Lines consumed on each side by a run of edits
    fn line_counts(edits: &[Edit<T>]) -> (usize, usize) {
        edits.iter().fold((0, 0), |(a, b), edit| match edit {
            Edit::Keep { .. } => (a + 1, b + 1),
            Edit::Delete { .. } => (a + 1, b),
            Edit::Insert { .. } => (a, b + 1),
        })
    }
}

impl<T> Hunk<T> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn a_size(&self) -> usize {
        self.a_size
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn b_size(&self) -> usize {
        self.b_size
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_size, self.b_start, self.b_size
        )
    }
}
