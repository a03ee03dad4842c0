use crate::artifacts::diff::edit::{Edit, EditScript};
use crate::artifacts::diff::hunk::Hunk;
use derive_new::new;

pub trait DiffAlgorithm<'d, T> {
    type Table;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> EditScript<T>;

    fn diff(&self) -> EditScript<T> {
        let table = self.compute_table();
        self.backtrack(&table)
    }

    fn hunks(&self, context: usize) -> Vec<Hunk<T>>
    where
        T: Clone,
    {
        Hunk::build(&self.diff(), context)
    }
}

/// Row-major `(n + 1) x (m + 1)` table of LCS lengths
///
/// Cell `(i, j)` holds the length of the longest common subsequence of the
/// first `i` items of `a` and the first `j` items of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    columns: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn new(rows: usize, columns: usize) -> Self {
        LcsTable {
            columns,
            cells: vec![0; rows * columns],
        }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.columns + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.columns + j] = value;
    }
}

/// Quadratic LCS differ
///
/// Time and memory are O(n·m), which suits snippet-sized text files.
/// Backtracking prefers an insert over a delete whenever both keep the script
/// minimal, so equal inputs always produce the same script.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for LcsDiff<'d, T> {
    type Table = LcsTable;

    fn compute_table(&self) -> Self::Table {
        let (n, m) = (self.a.len(), self.b.len());
        let mut table = LcsTable::new(n + 1, m + 1);

        for i in 1..=n {
            for j in 1..=m {
                let value = if self.a[i - 1] == self.b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.set(i, j, value);
            }
        }

        table
    }

    fn backtrack(&self, table: &Self::Table) -> EditScript<T> {
        let (mut i, mut j) = (self.a.len(), self.b.len());
        let mut script = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && self.a[i - 1] == self.b[j - 1] {
                script.push(Edit::Keep {
                    value: self.a[i - 1].clone(),
                    a_index: i - 1,
                    b_index: j - 1,
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                script.push(Edit::Insert {
                    value: self.b[j - 1].clone(),
                    b_index: j - 1,
                });
                j -= 1;
            } else {
                script.push(Edit::Delete {
                    value: self.a[i - 1].clone(),
                    a_index: i - 1,
                });
                i -= 1;
            }
        }

        script.reverse();
        script
    }
}
