//! Enumeration of the lines that can win a game.

use crate::Dimension;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which part of the grid a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// Row `i`, left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `j`, top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// N board indices checked together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_new::new)]
pub struct Line {
    kind: LineKind,
    indices: Vec<usize>,
}

impl Line {
    /// Part of the grid this line covers.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices in line order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consumes the line, keeping its indices.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

/// All 2N + 2 lines of an N×N board, in evaluation order.
///
/// Rows, then columns, then the two main diagonals. Broken or wrap-around
/// diagonals are not lines.
#[instrument]
pub fn lines(dimension: Dimension) -> Vec<Line> {
    let n = dimension.size();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for i in 0..n {
        lines.push(Line::new(LineKind::Row(i), (i * n..(i + 1) * n).collect()));
    }

    for j in 0..n {
        lines.push(Line::new(
            LineKind::Column(j),
            (0..n).map(|k| j + k * n).collect(),
        ));
    }

    lines.push(Line::new(
        LineKind::MainDiagonal,
        (0..n).map(|k| k * (n + 1)).collect(),
    ));
    lines.push(Line::new(
        LineKind::AntiDiagonal,
        (0..n).map(|k| (k + 1) * (n - 1)).collect(),
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_lines() {
        let all: Vec<Vec<usize>> = lines(Dimension::CLASSIC)
            .into_iter()
            .map(Line::into_indices)
            .collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_line_count_per_dimension() {
        for dimension in Dimension::all() {
            let n = dimension.size();
            let lines = lines(dimension);
            assert_eq!(lines.len(), 2 * n + 2);
            assert!(lines.iter().all(|l| l.indices().len() == n));
        }
    }

    #[test]
    fn test_four_by_four_diagonals() {
        let four = lines(Dimension::new(4).unwrap());
        assert_eq!(four[8].kind(), LineKind::MainDiagonal);
        assert_eq!(four[8].indices(), &[0, 5, 10, 15]);
        assert_eq!(four[9].kind(), LineKind::AntiDiagonal);
        assert_eq!(four[9].indices(), &[3, 6, 9, 12]);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(LineKind::Row(2).to_string(), "row 2");
        assert_eq!(LineKind::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
