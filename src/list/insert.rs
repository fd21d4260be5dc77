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

use super::{LevelGenerator, Node, SkipList};
use core::mem;
use tracing::trace;

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    /// Inserts `value` under `key`.
    ///
    /// If `key` is already present, its value is replaced and the old one
    /// returned; the existing tower keeps its height.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut preds = self.find_predecessors(&key);
        // Bottom-up from here on, so `preds[level]` is that level's
        // predecessor.
        preds.reverse();

        if let Some(i) = preds.first().and_then(|&p| self.next(p, 0)) {
            if self.nodes[i].key == key {
                return Some(mem::replace(&mut self.nodes[i].value, value));
            }
        }

        let height =
            self.levels.next_level(self.max_level).clamp(1, self.max_level);
        if height > self.level() {
            self.head.resize(height, None);
            preds.resize(height, None);
        }

        let index = self.nodes.len();
        let next = (0..height).map(|level| self.next(preds[level], level));
        let next = next.collect();
        self.nodes.push(Node {
            key,
            value,
            next,
        });
        for (level, &pred) in preds.iter().enumerate().take(height) {
            self.set_next(pred, level, Some(index));
        }
        trace!(index, height, "inserted tower");
        None
    }
}
