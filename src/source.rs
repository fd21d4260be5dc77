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

//! Builds demonstration lists from a sequence of words.

use crate::list::{Geometric, SkipList};
use rand::rngs::StdRng;
use tracing::debug;

pub const SAMPLE_TEXT: &str =
    "the red and the black cat played with the gray and the brown koalas";

pub type SampleList = SkipList<String, String, Geometric<StdRng>>;

/// Inserts each word keyed by its zero-padded position (`0000`, `0001`,
/// ...), so the list keeps the words in their original order.
///
/// Tower heights come from an RNG seeded with `seed`; the same arguments
/// always produce the same list.
pub fn sample_list<I, S>(words: I, seed: u64, max_level: usize) -> SampleList
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let levels = Geometric::seeded(seed);
    let mut list = SkipList::with_generator(levels, max_level);
    for (index, word) in words.into_iter().enumerate() {
        list.insert(format!("{index:04}"), word.into());
    }
    debug!(len = list.len(), level = list.level(), seed, "built sample list");
    list
}

pub fn sample_words() -> impl Iterator<Item = &'static str> {
    SAMPLE_TEXT.split_whitespace()
}
