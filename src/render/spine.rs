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

use crate::list::DumpNode;
use core::iter;

/// Offsets of the nodes linked at `level`, in order.
///
/// The head (offset 0) always comes first and the tail (the last offset)
/// always comes last; in between are the data nodes whose tower reaches
/// `level`. For a validated dump the result is strictly increasing.
/// A dump of fewer than two nodes has no head-to-tail span and yields an
/// empty spine.
pub fn level_spine(nodes: &[DumpNode], level: usize) -> Vec<usize> {
    let tail = match nodes.len() {
        0 | 1 => return Vec::new(),
        len => len - 1,
    };
    let data = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_data() && node.level >= level)
        .map(|(offset, _)| offset);
    iter::once(0).chain(data).chain(iter::once(tail)).collect()
}
