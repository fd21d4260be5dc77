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

//! Grid placement of node columns and tower rows.

use crate::error::{Error, Result};
use crate::list::{DumpNode, NodeKind};
use crate::options::Geometry;

/// Tallest tower a dump may contain.
pub const MAX_DRAWN_LEVEL: usize = 64;

/// The tallest tower among data nodes. Sentinels are ignored.
pub fn max_level(nodes: &[DumpNode]) -> Option<usize> {
    nodes.iter().filter(|n| n.is_data()).map(|n| n.level).max()
}

/// Checks that `nodes` is a well-formed dump: a head, at least one data
/// node with a level in `1..=MAX_DRAWN_LEVEL`, then a tail.
pub fn validate(nodes: &[DumpNode]) -> Result<()> {
    let last = nodes.len().checked_sub(1).ok_or(Error::EmptyDump)?;
    if nodes[0].kind() != Some(NodeKind::Head) {
        return Err(Error::MissingHead);
    }
    if last == 0 || nodes[last].kind() != Some(NodeKind::Tail) {
        return Err(Error::MissingTail);
    }
    for (offset, node) in nodes.iter().enumerate().take(last).skip(1) {
        let name = || node.name.clone().unwrap_or_default();
        match node.kind() {
            Some(NodeKind::Data) if node.level == 0 => {
                return Err(Error::ZeroLevel {
                    offset,
                });
            }
            Some(NodeKind::Data) if node.level > MAX_DRAWN_LEVEL => {
                return Err(Error::LevelTooHigh {
                    offset,
                    level: node.level,
                    max: MAX_DRAWN_LEVEL,
                });
            }
            Some(NodeKind::Data) => {}
            Some(NodeKind::Head | NodeKind::Tail) => {
                return Err(Error::MisplacedSentinel {
                    offset,
                    name: name(),
                });
            }
            None => {
                return Err(Error::UnknownNode {
                    offset,
                    name: name(),
                });
            }
        }
    }
    if last == 1 {
        return Err(Error::NoDataNodes);
    }
    Ok(())
}

/// The `viewBox` of the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps node offsets and levels of one validated dump to coordinates.
///
/// Columns advance rightward by [`Geometry::spacing`]. The spine sits at
/// `y = 0`; tower boxes grow upward, so level `l` is drawn at
/// `y = -l * box_size`.
#[derive(Clone, Debug)]
pub struct Layout<'a> {
    geometry: &'a Geometry,
    node_count: usize,
    max_level: usize,
}

impl<'a> Layout<'a> {
    pub fn new(nodes: &[DumpNode], geometry: &'a Geometry) -> Result<Self> {
        geometry.validate()?;
        validate(nodes)?;
        let max_level = max_level(nodes).ok_or(Error::NoDataNodes)?;
        Ok(Self {
            geometry,
            node_count: nodes.len(),
            max_level,
        })
    }

    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Left edge of the column at `offset`.
    pub fn column_x(&self, offset: usize) -> f64 {
        offset as f64 * self.geometry.spacing
    }

    /// Horizontal center of the column at `offset`.
    pub fn center_x(&self, offset: usize) -> f64 {
        self.column_x(offset) + self.geometry.center_offset()
    }

    /// Top edge of the tower box at `level`.
    pub fn tower_y(&self, level: usize) -> f64 {
        -(level as f64) * self.geometry.box_size
    }

    /// Vertical center of the tower box at `level`.
    pub fn center_y(&self, level: usize) -> f64 {
        self.tower_y(level) + self.geometry.center_offset()
    }

    pub fn view_box(&self) -> ViewBox {
        let g = self.geometry;
        ViewBox {
            x: -g.spacing,
            y: -(self.max_level as f64 + 1.0) * g.box_size,
            width: g.spacing * (self.node_count as f64 + 5.0),
            height: (self.max_level as f64 + 2.0) * g.box_size,
        }
    }

    /// Value of the root element's `height` attribute. Taller than the
    /// view box to leave room for the labels under the spine.
    pub fn document_height(&self) -> f64 {
        self.view_box().height + self.geometry.bottom_margin
    }
}
