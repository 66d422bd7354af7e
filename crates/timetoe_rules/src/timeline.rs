//! Move list shown next to the board.

use serde::{Deserialize, Serialize};

/// Direction the move list is listed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Order {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl Order {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// One snapshot in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// Snapshot index (0 is the starting board).
    pub move_index: usize,
    /// Whether this is the snapshot being viewed.
    pub is_current: bool,
}

impl MoveEntry {
    /// `"game start"` for move 0, `"move #n"` otherwise.
    pub fn label(&self) -> String {
        if self.move_index == 0 {
            "game start".to_string()
        } else {
            format!("move #{}", self.move_index)
        }
    }

    /// Text of the entry as shown in the list.
    pub fn caption(&self) -> String {
        if self.is_current {
            format!("You are here at {}", self.label())
        } else {
            format!("Go to {}", self.label())
        }
    }
}

/// Builds the move list for `len` snapshots with `current` viewed.
pub fn entries(len: usize, current: usize, order: Order) -> Vec<MoveEntry> {
    let ascending = (0..len).map(|i| MoveEntry::new(i, i == current));
    match order {
        Order::Ascending => ascending.collect(),
        Order::Descending => ascending.rev().collect(),
    }
}
