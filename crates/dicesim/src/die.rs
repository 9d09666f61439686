// ABOUTME: Weighted dice with a fixed face set and mutable per-face weights.
// ABOUTME: Also defines the uniform RNG abstraction every draw goes through.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Bounds every face value must satisfy.
///
/// Faces are deduplicated and kept in ascending order, hashed when grouping
/// results, and rendered with `Debug` in error messages.
pub trait Face: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Face for T {}

/// Trait for uniform random number generation, allowing for testing with fixed values.
pub trait Rng {
    /// Generate a random number in the range [0, 1).
    fn uniform(&mut self) -> f64;
}

/// Default RNG using fastrand.
pub struct FastRng(fastrand::Rng);

impl FastRng {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng for FastRng {
    fn uniform(&mut self) -> f64 {
        self.0.f64()
    }
}

/// Conversion into a die weight.
///
/// Implemented for the numeric primitives and for text, so weights read from
/// user input can be passed straight to [`Die::set_weight`].
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

fn checked_weight(weight: f64, raw: impl fmt::Display) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(raw.to_string()))
    }
}

impl IntoWeight for f64 {
    fn into_weight(self) -> Result<f64> {
        checked_weight(self, self)
    }
}

impl IntoWeight for f32 {
    fn into_weight(self) -> Result<f64> {
        checked_weight(f64::from(self), self)
    }
}

impl IntoWeight for u32 {
    fn into_weight(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl IntoWeight for i32 {
    fn into_weight(self) -> Result<f64> {
        checked_weight(f64::from(self), self)
    }
}

impl IntoWeight for u64 {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for i64 {
    fn into_weight(self) -> Result<f64> {
        checked_weight(self as f64, self)
    }
}

impl IntoWeight for usize {
    fn into_weight(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        let parsed: f64 = self
            .trim()
            .parse()
            .map_err(|_| Error::InvalidWeight(self.to_string()))?;
        checked_weight(parsed, self)
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

/// One face of a die together with its current weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceWeight<F> {
    pub face: F,
    pub weight: f64,
}

/// A die with a fixed set of distinct faces, each carrying a non-negative weight.
///
/// The probability of drawing a face is its weight divided by the sum of all
/// weights at the time of the draw. Weights do not need to sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Die<F> {
    /// Distinct faces in ascending order.
    faces: Vec<F>,
    /// `weights[i]` is the weight of `faces[i]`.
    weights: Vec<f64>,
}

impl<F: Face> Die<F> {
    /// Create a die from a list of faces. Duplicates are collapsed and every
    /// face starts with a weight of 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicesim::Die;
    ///
    /// let die = Die::new([3, 1, 2, 3]).unwrap();
    /// assert_eq!(die.faces(), &[1, 2, 3]);
    /// assert_eq!(die.weight(&1), Some(1.0));
    /// ```
    pub fn new(faces: impl IntoIterator<Item = F>) -> Result<Self> {
        let faces: Vec<F> = faces
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if faces.is_empty() {
            return Err(Error::InvalidFaceSet);
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// The distinct faces of this die, in ascending order.
    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    /// Number of distinct faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Current weight of `face`, or `None` if the die has no such face.
    pub fn weight(&self, face: &F) -> Option<f64> {
        self.index_of(face).map(|i| self.weights[i])
    }

    /// Change the weight of a single face. Other faces are untouched and no
    /// normalization takes place.
    ///
    /// On error the die is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicesim::Die;
    ///
    /// let mut die = Die::new(["H", "T"]).unwrap();
    /// die.set_weight(&"H", 3).unwrap();
    /// die.set_weight(&"T", "0.5").unwrap();
    /// assert_eq!(die.weight(&"H"), Some(3.0));
    /// assert_eq!(die.weight(&"T"), Some(0.5));
    /// assert!(die.set_weight(&"X", 1.0).is_err());
    /// ```
    pub fn set_weight(&mut self, face: &F, weight: impl IntoWeight) -> Result<()> {
        let index = self
            .index_of(face)
            .ok_or_else(|| Error::UnknownFace(format!("{:?}", face)))?;
        self.weights[index] = weight.into_weight()?;
        Ok(())
    }

    /// Current faces and weights in ascending face order.
    pub fn show(&self) -> Vec<FaceWeight<F>> {
        self.faces
            .iter()
            .zip(&self.weights)
            .map(|(face, &weight)| FaceWeight {
                face: face.clone(),
                weight,
            })
            .collect()
    }

    /// Draw probability of each face under the current weights.
    pub fn probabilities(&self) -> Result<Vec<(F, f64)>> {
        let total = self.total_weight()?;
        Ok(self
            .faces
            .iter()
            .zip(&self.weights)
            .map(|(face, &weight)| (face.clone(), weight / total))
            .collect())
    }

    /// Roll the die `count` times with the default RNG.
    pub fn roll(&self, count: usize) -> Result<Vec<F>> {
        self.roll_with_rng(count, &mut FastRng::new())
    }

    /// Roll the die `count` times with a custom RNG.
    ///
    /// Rolls are independent and with replacement. A roll of zero dice
    /// returns an empty list without consulting the weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use dicesim::{Die, FastRng};
    ///
    /// let mut die = Die::new(1..=6).unwrap();
    /// for face in 2..=6 {
    ///     die.set_weight(&face, 0).unwrap();
    /// }
    /// let mut rng = FastRng::with_seed(7);
    /// assert_eq!(die.roll_with_rng(5, &mut rng).unwrap(), vec![1; 5]);
    /// ```
    pub fn roll_with_rng(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<F>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let total = self.total_weight()?;
        log::trace!("rolling {} faces {} times", self.faces.len(), count);

        Ok((0..count)
            .map(|_| self.faces[self.pick(rng.uniform() * total)].clone())
            .collect())
    }

    /// Roll with a seeded RNG for reproducibility.
    pub fn roll_seeded(&self, count: usize, seed: u64) -> Result<Vec<F>> {
        self.roll_with_rng(count, &mut FastRng::with_seed(seed))
    }

    fn index_of(&self, face: &F) -> Option<usize> {
        self.faces.binary_search(face).ok()
    }

    fn total_weight(&self) -> Result<f64> {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return Err(Error::DegenerateWeights);
        }
        if !total.is_finite() {
            return Err(Error::InvalidWeight(format!("sum of weights is {}", total)));
        }
        Ok(total)
    }

    /// Index of the face whose cumulative weight interval contains `target`.
    ///
    /// `target` must lie in `[0, total)`. Zero-weight faces own an empty
    /// interval and are never selected.
    fn pick(&self, target: f64) -> usize {
        let mut cumulative = 0.0;
        for (i, &weight) in self.weights.iter().enumerate() {
            cumulative += weight;
            if target < cumulative {
                return i;
            }
        }
        // Floating point rounding can leave `target` just past the last
        // boundary; fall back to the last face that can actually be drawn.
        self.weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
    }
}
