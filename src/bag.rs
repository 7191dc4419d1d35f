//! Unordered grab-bag with uniform random draws.

use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::errors::BagError;

/// Growable multiset supporting insertion, uniform-random removal, and
/// occurrence counting.
///
/// A draw swaps the chosen slot with the last one before shrinking, so no
/// free-slot tracking is needed and element order carries no meaning.
/// Cloning yields an independent bag; mutating one never affects the other.
#[derive(Debug, Clone)]
pub struct RandomBag<T> {
    items: Vec<T>,
}

impl<T> Default for RandomBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RandomBag<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an item. Amortized O(1); the backing store grows geometrically.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns a uniformly random item using the thread RNG.
    pub fn draw(&mut self) -> Result<T, BagError> {
        self.draw_with(&mut rand::thread_rng())
    }

    /// Removes and returns a uniformly random item. Tests that need
    /// determinism can pass a seeded RNG.
    pub fn draw_with<R: Rng>(&mut self, rng: &mut R) -> Result<T, BagError> {
        if self.items.is_empty() {
            return Err(BagError::Empty);
        }
        let index = rng.gen_range(0..self.items.len());
        Ok(self.items.swap_remove(index))
    }
}

impl<T: PartialEq> RandomBag<T> {
    /// Number of items equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        self.items.iter().filter(|i| *i == item).count()
    }
}

impl<T> FromIterator<T> for RandomBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RandomBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().format(", "))
    }
}
