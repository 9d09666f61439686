// ABOUTME: Core library for simulating weighted dice and analyzing the outcomes.
// ABOUTME: Dice feed games, games feed analyzers; randomness goes through an Rng trait.

//! # Dicesim
//!
//! Roll weighted dice many times and study what comes up.
//!
//! ## Quick Start
//!
//! ```
//! use dicesim::{Analyzer, Die, Game, Layout};
//!
//! // A loaded die: six comes up five times as often as any other face
//! let mut loaded = Die::new(1..=6).unwrap();
//! loaded.set_weight(&6, 5.0).unwrap();
//! let fair = Die::new(1..=6).unwrap();
//!
//! let mut game = Game::new(vec![fair, loaded]).unwrap();
//! game.play(1000).unwrap();
//! assert_eq!(game.show(Layout::Narrow).unwrap().len(), 2000);
//!
//! let analyzer = Analyzer::new(&game).unwrap();
//! println!("Jackpots: {}", analyzer.jackpot());
//! for combo in analyzer.combo().iter().take(3) {
//!     println!("{:?}: {}", combo.faces, combo.count);
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`Die`]: distinct faces with adjustable weights; rolls with replacement.
//! - [`Game`]: rolls a list of dice together for N trials and keeps the results.
//! - [`Analyzer`]: face counts per trial, jackpots, combinations, permutations.
//!
//! Every random operation comes in three flavors: default RNG (`play`),
//! custom [`Rng`] (`play_with_rng`), and seeded (`play_seeded`).

pub mod analyzer;
pub mod die;
pub mod error;
pub mod game;
pub mod table;

pub use analyzer::{Analyzer, ComboCount, FaceCount};
pub use die::{Die, Face, FaceWeight, FastRng, IntoWeight, Rng};
pub use error::{Error, Result};
pub use game::Game;
pub use table::{Layout, NarrowRow, NarrowTable, Table, WideRow, WideTable};

/// Play a game with the given dice and analyze it in one step.
///
/// # Examples
///
/// ```
/// let coin = dicesim::Die::new(["H", "T"]).unwrap();
/// let analyzer = dicesim::play(vec![coin.clone(), coin], 20).unwrap();
/// assert_eq!(analyzer.trial_count(), 20);
/// ```
pub fn play<F: Face>(dice: Vec<Die<F>>, trials: usize) -> Result<Analyzer<F>> {
    let mut game = Game::new(dice)?;
    game.play(trials)?;
    Analyzer::new(&game)
}

/// Play and analyze with a seeded RNG for reproducibility.
pub fn play_seeded<F: Face>(dice: Vec<Die<F>>, trials: usize, seed: u64) -> Result<Analyzer<F>> {
    let mut game = Game::new(dice)?;
    game.play_seeded(trials, seed)?;
    Analyzer::new(&game)
}
