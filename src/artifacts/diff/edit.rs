use std::fmt::Display;

/// One step of an edit script turning sequence `a` into sequence `b`
///
/// Indices are 0-based positions in the respective input sequence. An insert
/// has no position in `a` and a delete has none in `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Keep { value: T, a_index: usize, b_index: usize },
    Insert { value: T, b_index: usize },
    Delete { value: T, a_index: usize },
}

pub type EditScript<T> = Vec<Edit<T>>;

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Keep { value, .. } | Edit::Insert { value, .. } | Edit::Delete { value, .. } => {
                value
            }
        }
    }

    pub fn a_index(&self) -> Option<usize> {
        match self {
            Edit::Keep { a_index, .. } | Edit::Delete { a_index, .. } => Some(*a_index),
            Edit::Insert { .. } => None,
        }
    }

    pub fn b_index(&self) -> Option<usize> {
        match self {
            Edit::Keep { b_index, .. } | Edit::Insert { b_index, .. } => Some(*b_index),
            Edit::Delete { .. } => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Keep { .. })
    }

    /// Unified diff line marker
    pub fn marker(&self) -> char {
        match self {
            Edit::Keep { .. } => ' ',
            Edit::Insert { .. } => '+',
            Edit::Delete { .. } => '-',
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker(), self.value())
    }
}
