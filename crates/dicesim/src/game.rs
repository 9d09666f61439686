// ABOUTME: A game rolls a fixed set of dice over many trials.
// ABOUTME: Stores the latest results and shows them in wide or narrow layout.

use crate::die::{Die, Face, FastRng, Rng};
use crate::error::{Error, Result};
use crate::table::{Layout, NarrowTable, Table, WideTable};

/// A set of dice rolled together, trial after trial.
///
/// The dice are expected to share the same faces; this is not checked.
/// Each die keeps its own weights.
#[derive(Debug, Clone)]
pub struct Game<F> {
    dice: Vec<Die<F>>,
    results: Option<WideTable<F>>,
}

impl<F: Face> Game<F> {
    /// Create a game from one or more dice.
    pub fn new(dice: Vec<Die<F>>) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::InvalidArgument(
                "a game needs at least one die".to_string(),
            ));
        }
        Ok(Self {
            dice,
            results: None,
        })
    }

    pub fn dice(&self) -> &[Die<F>] {
        &self.dice
    }

    /// Mutable access to a die, e.g. to change its weights between plays.
    ///
    /// `index` is zero-based. Results already recorded are not affected.
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die<F>> {
        self.dice.get_mut(index)
    }

    /// Number of trials in the latest play, if any.
    pub fn trial_count(&self) -> Option<usize> {
        self.results.as_ref().map(WideTable::len)
    }

    /// Roll every die `trials` times with the default RNG.
    pub fn play(&mut self, trials: usize) -> Result<()> {
        self.play_with_rng(trials, &mut FastRng::new())
    }

    /// Roll every die `trials` times with a custom RNG.
    ///
    /// Dice are rolled one after another, each taking its whole batch from
    /// `rng` before the next die starts. Previous results are replaced only
    /// if every die rolls successfully.
    pub fn play_with_rng(&mut self, trials: usize, rng: &mut impl Rng) -> Result<()> {
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with_rng(trials, rng))
            .collect::<Result<Vec<_>>>()?;
        self.record(&columns, trials);
        Ok(())
    }

    /// Play with a seeded RNG for reproducibility.
    ///
    /// Each die gets its own generator, seeded from `seed` and its position,
    /// so columns are independent of each other and of the die count.
    pub fn play_seeded(&mut self, trials: usize, seed: u64) -> Result<()> {
        let mut seeds = fastrand::Rng::with_seed(seed);
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll_with_rng(trials, &mut FastRng::with_seed(seeds.u64(..))))
            .collect::<Result<Vec<_>>>()?;
        self.record(&columns, trials);
        Ok(())
    }

    /// Results of the latest play in the requested layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicesim::{Die, Game, Layout};
    ///
    /// let die = Die::new(1..=6).unwrap();
    /// let mut game = Game::new(vec![die.clone(), die]).unwrap();
    /// game.play(5).unwrap();
    ///
    /// assert_eq!(game.show(Layout::Wide).unwrap().len(), 5);
    /// assert_eq!(game.show("N".parse().unwrap()).unwrap().len(), 10);
    /// ```
    pub fn show(&self, layout: Layout) -> Result<Table<F>> {
        Ok(match layout {
            Layout::Wide => Table::Wide(self.wide()?.clone()),
            Layout::Narrow => Table::Narrow(self.narrow()?),
        })
    }

    /// Results of the latest play, one row per trial.
    pub fn wide(&self) -> Result<&WideTable<F>> {
        self.results.as_ref().ok_or(Error::NoResults)
    }

    /// Results of the latest play, one row per (trial, die) pair.
    pub fn narrow(&self) -> Result<NarrowTable<F>> {
        Ok(self.wide()?.to_narrow())
    }

    fn record(&mut self, columns: &[Vec<F>], trials: usize) {
        log::debug!("played {} trials with {} dice", trials, columns.len());
        self.results = Some(WideTable::from_columns(columns, trials));
    }
}
