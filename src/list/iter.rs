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

//! Skip list iterators.

use super::{LevelGenerator, Link, Node, SkipList};
use core::iter::FusedIterator;

/// An iterator over the entries of a [`SkipList`] in key order.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    link: Link,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.link?];
        self.link = node.next[0];
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over each value in key order, paired with the height of
/// its tower.
pub struct Towers<'a, K, V> {
    nodes: &'a [Node<K, V>],
    link: Link,
}

impl<'a, K, V> Iterator for Towers<'a, K, V> {
    type Item = (&'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.link?];
        self.link = node.next[0];
        Some((&node.value, node.next.len()))
    }
}

impl<K, V> FusedIterator for Towers<'_, K, V> {}

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            link: self.first(),
        }
    }

    pub fn towers(&self) -> Towers<'_, K, V> {
        Towers {
            nodes: &self.nodes,
            link: self.first(),
        }
    }

    fn first(&self) -> Link {
        self.head.first().copied().flatten()
    }
}

impl<'a, K, V, G> IntoIterator for &'a SkipList<K, V, G>
where
    K: Ord,
    G: LevelGenerator,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
