/*
 * Copyright (C) the Skippy SVG contributors
 *
 * This file is part of Skippy SVG.
 *
 * Skippy SVG is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Skippy SVG is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Skippy SVG. If not, see <https://www.gnu.org/licenses/>.
 */

//! Tower height selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the height of each newly inserted tower.
pub trait LevelGenerator {
    /// Returns a level in `1..=max`.
    fn next_level(&mut self, max: usize) -> usize;
}

/// Promotes a tower one level per successful coin flip.
#[derive(Clone, Debug)]
pub struct Geometric<R> {
    rng: R,
}

impl<R: Rng> Geometric<R> {
    /// Chance that a tower grows past each level.
    pub const PROMOTION: f64 = 0.5;

    pub fn new(rng: R) -> Self {
        Self {
            rng,
        }
    }
}

impl Geometric<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for Geometric<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> LevelGenerator for Geometric<R> {
    fn next_level(&mut self, max: usize) -> usize {
        let mut level = 1;
        while level < max && self.rng.gen_bool(Self::PROMOTION) {
            level += 1;
        }
        level
    }
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for &mut G {
    fn next_level(&mut self, max: usize) -> usize {
        (**self).next_level(max)
    }
}
