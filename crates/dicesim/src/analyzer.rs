// ABOUTME: Statistics over the results of a played game.
// ABOUTME: Face counts per trial, jackpots, and combination/permutation frequencies.

use crate::die::Face;
use crate::error::Result;
use crate::game::Game;
use crate::table::{NarrowTable, WideTable};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// How many times a face came up in one trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCount<F> {
    pub trial: usize,
    pub face: F,
    pub count: usize,
}

/// How many trials produced a given set (or sequence) of faces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboCount<F> {
    pub faces: Vec<F>,
    pub count: usize,
}

/// Analysis of a game's results.
///
/// The results are copied when the analyzer is created, so playing the game
/// again does not change what the analyzer sees.
#[derive(Debug, Clone)]
pub struct Analyzer<F> {
    wide: WideTable<F>,
    narrow: NarrowTable<F>,
}

impl<F: Face> Analyzer<F> {
    /// Snapshot the results of a game that has been played.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicesim::{Analyzer, Die, Game};
    ///
    /// let die = Die::new(["H", "T"]).unwrap();
    /// let mut game = Game::new(vec![die.clone(), die]).unwrap();
    /// game.play(100).unwrap();
    ///
    /// let analyzer = Analyzer::new(&game).unwrap();
    /// let total: usize = analyzer.combo().iter().map(|c| c.count).sum();
    /// assert_eq!(total, 100);
    /// assert!(analyzer.jackpot() <= 100);
    /// ```
    pub fn new(game: &Game<F>) -> Result<Self> {
        let wide = game.wide()?.clone();
        let narrow = wide.to_narrow();
        log::debug!(
            "analyzing {} trials of {} dice",
            wide.len(),
            wide.die_count()
        );
        Ok(Self { wide, narrow })
    }

    pub fn wide(&self) -> &WideTable<F> {
        &self.wide
    }

    pub fn narrow(&self) -> &NarrowTable<F> {
        &self.narrow
    }

    pub fn trial_count(&self) -> usize {
        self.wide.len()
    }

    pub fn die_count(&self) -> usize {
        self.wide.die_count()
    }

    /// Count of each face within each trial, ordered by trial then face.
    ///
    /// Faces that did not come up in a trial get no row.
    pub fn face_counts_per_trial(&self) -> Vec<FaceCount<F>> {
        let mut counts: BTreeMap<(usize, &F), usize> = BTreeMap::new();
        for row in self.narrow.rows() {
            *counts.entry((row.trial, &row.face)).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|((trial, face), count)| FaceCount {
                trial,
                face: face.clone(),
                count,
            })
            .collect()
    }

    /// Number of trials in which every die showed the same face.
    pub fn jackpot(&self) -> usize {
        self.jackpot_trials().len()
    }

    /// Trial numbers of the jackpots, in order.
    pub fn jackpot_trials(&self) -> Vec<usize> {
        self.wide
            .rows()
            .iter()
            .filter(|row| row.faces.windows(2).all(|pair| pair[0] == pair[1]))
            .map(|row| row.trial)
            .collect()
    }

    /// Frequency of each distinct combination of faces, ignoring which die
    /// rolled which face.
    ///
    /// Faces within a combination are sorted ascending. Rows are ordered by
    /// count (most frequent first), ties broken by the faces.
    pub fn combo(&self) -> Vec<ComboCount<F>> {
        frequency_table(self.wide.rows().iter().map(|row| {
            let mut faces = row.faces.clone();
            faces.sort();
            faces
        }))
    }

    /// Frequency of each distinct ordered sequence of faces, die by die.
    ///
    /// Ordered the same way as [`Analyzer::combo`].
    pub fn permutation(&self) -> Vec<ComboCount<F>> {
        frequency_table(self.wide.rows().iter().map(|row| row.faces.clone()))
    }
}

fn frequency_table<F: Face>(keys: impl Iterator<Item = Vec<F>>) -> Vec<ComboCount<F>> {
    let mut counts: HashMap<Vec<F>, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut table: Vec<ComboCount<F>> = counts
        .into_iter()
        .map(|(faces, count)| ComboCount { faces, count })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.faces.cmp(&b.faces)));
    table
}
