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

//! A probabilistic skip list that can snapshot its towers.

use core::cmp::Ordering;

mod dump;
mod insert;
mod iter;
mod level;

pub use dump::{DumpNode, NodeKind, HEAD, TAIL};
pub use iter::{Iter, Towers};
pub use level::{Geometric, LevelGenerator};

use rand::rngs::StdRng;

pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Index into the node arena. `None` stands for the head.
type Link = Option<usize>;

struct Node<K, V> {
    key: K,
    value: V,
    /// One forward link per level; the length is the tower height.
    next: Vec<Link>,
}

/// An ordered map whose nodes carry towers of random height.
///
/// Nodes live in an arena and link to each other by index, so the list
/// never needs `unsafe`. Nodes are never removed.
pub struct SkipList<K, V, G = Geometric<StdRng>> {
    nodes: Vec<Node<K, V>>,
    /// Forward links of the head sentinel; grows with the tallest tower.
    head: Vec<Link>,
    max_level: usize,
    levels: G,
}

impl<K: Ord, V> SkipList<K, V> {
    pub fn new() -> Self {
        Self::with_generator(Geometric::default(), DEFAULT_MAX_LEVEL)
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    /// Creates a list whose towers are at most `max_level` tall (at least
    /// 1) and whose heights are drawn from `levels`.
    pub fn with_generator(levels: G, max_level: usize) -> Self {
        Self {
            nodes: Vec::new(),
            head: Vec::new(),
            max_level: max_level.max(1),
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the tallest tower, or 0 if the list is empty.
    pub fn level(&self) -> usize {
        self.head.len()
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        if self.is_empty() {
            return None;
        }
        let pred = self.find_predecessors(key).pop().flatten();
        let node = &self.nodes[self.next(pred, 0)?];
        (node.key == *key).then_some(&node.value)
    }

    fn next(&self, link: Link, level: usize) -> Link {
        match link {
            None => self.head[level],
            Some(i) => self.nodes[i].next[level],
        }
    }

    fn set_next(&mut self, link: Link, level: usize, next: Link) {
        match link {
            None => self.head[level] = next,
            Some(i) => self.nodes[i].next[level] = next,
        }
    }

    /// Returns, for every level from the top down, the last node whose
    /// key is less than `key`.
    fn find_predecessors(&self, key: &K) -> Vec<Link> {
        let mut preds = Vec::with_capacity(self.level());
        let mut pred = None;
        for level in (0..self.level()).rev() {
            while let Some(i) = self.next(pred, level) {
                match self.nodes[i].key.cmp(key) {
                    Ordering::Less => pred = Some(i),
                    Ordering::Equal | Ordering::Greater => break,
                }
            }
            preds.push(pred);
        }
        preds
    }
}
