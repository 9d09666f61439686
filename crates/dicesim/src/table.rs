// ABOUTME: In-memory result tables in wide and narrow layouts.
// ABOUTME: Rows are fixed-arity records with named-column lookup.

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Shape in which game results are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One row per trial, one column per die.
    #[default]
    Wide,
    /// One row per (trial, die) pair.
    Narrow,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "wide" => Ok(Layout::Wide),
            "n" | "narrow" => Ok(Layout::Narrow),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Wide => write!(f, "W"),
            Layout::Narrow => write!(f, "N"),
        }
    }
}

/// One trial in wide layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WideRow<F> {
    /// Trial number, starting at 1.
    pub trial: usize,
    /// Face rolled by each die, in die order.
    pub faces: Vec<F>,
}

/// Results with one row per trial and one column per die.
///
/// Columns are named after the die number: `"1"`, `"2"`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WideTable<F> {
    columns: Vec<String>,
    rows: Vec<WideRow<F>>,
}

impl<F: Clone> WideTable<F> {
    /// Build a wide table from per-die columns of equal length.
    pub(crate) fn from_columns(columns: &[Vec<F>], trials: usize) -> Self {
        let rows = (0..trials)
            .map(|t| WideRow {
                trial: t + 1,
                faces: columns.iter().map(|col| col[t].clone()).collect(),
            })
            .collect();
        Self {
            columns: (1..=columns.len()).map(|d| d.to_string()).collect(),
            rows,
        }
    }

    pub fn rows(&self) -> &[WideRow<F>] {
        &self.rows
    }

    /// Number of trials.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of dice (columns).
    pub fn die_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Position of the named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All faces in the named column, in trial order.
    pub fn column(&self, name: &str) -> Option<Vec<&F>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row.faces[index]).collect())
    }

    /// Face at the given trial number (1-based) and column name.
    pub fn get(&self, trial: usize, name: &str) -> Option<&F> {
        let index = self.column_index(name)?;
        let row = self.rows.get(trial.checked_sub(1)?)?;
        row.faces.get(index)
    }

    /// Reshape into narrow layout. Values are unchanged.
    pub fn to_narrow(&self) -> NarrowTable<F> {
        let rows = self
            .rows
            .iter()
            .flat_map(|row| {
                row.faces.iter().enumerate().map(move |(d, face)| NarrowRow {
                    trial: row.trial,
                    die: d + 1,
                    face: face.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

/// One (trial, die) observation in narrow layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowRow<F> {
    pub trial: usize,
    pub die: usize,
    pub face: F,
}

/// Results with one row per (trial, die) pair, ordered by trial then die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowTable<F> {
    rows: Vec<NarrowRow<F>>,
}

impl<F> NarrowTable<F> {
    /// Column names of every narrow row.
    pub const COLUMNS: [&'static str; 3] = ["trial", "die", "face"];

    pub fn rows(&self) -> &[NarrowRow<F>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Game results in the layout that was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Table<F> {
    Wide(WideTable<F>),
    Narrow(NarrowTable<F>),
}

impl<F> Table<F> {
    pub fn layout(&self) -> Layout {
        match self {
            Table::Wide(_) => Layout::Wide,
            Table::Narrow(_) => Layout::Narrow,
        }
    }

    /// Number of rows in this layout.
    pub fn len(&self) -> usize {
        match self {
            Table::Wide(t) => t.rows.len(),
            Table::Narrow(t) => t.rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
