//! Row layout for card grids.

use crate::models::{TravelEntry, TravelKind};

/// One card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub text: String,
    pub href: String,
}

impl Card {
    fn from_entry(kind: TravelKind, entry: &TravelEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.place.clone(),
            text: entry.description.clone(),
            href: kind.entry_path(&entry.id),
        }
    }
}

/// A row of cards. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub index: usize,
    pub cards: Vec<Card>,
}

impl CardRow {
    /// Element id of the row, e.g. `cardRow1`.
    pub fn element_id(&self) -> String {
        format!("cardRow{}", self.index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardGrid {
    pub rows: Vec<CardRow>,
}

impl CardGrid {
    pub fn card_count(&self) -> usize {
        self.rows.iter().map(|r| r.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lay entries out in rows of `per_row` cards, preserving order.
///
/// A new row starts whenever the running column count is a multiple of
/// `per_row`. A `per_row` of zero is treated as one.
pub fn build_grid(kind: TravelKind, entries: &[TravelEntry], per_row: usize) -> CardGrid {
    let per_row = per_row.max(1);
    let mut rows: Vec<CardRow> = Vec::with_capacity(entries.len().div_ceil(per_row));

    for (col, entry) in entries.iter().enumerate() {
        if col % per_row == 0 {
            rows.push(CardRow {
                index: rows.len() + 1,
                cards: Vec::with_capacity(per_row),
            });
        }
        if let Some(row) = rows.last_mut() {
            row.cards.push(Card::from_entry(kind, entry));
        }
    }

    CardGrid { rows }
}
