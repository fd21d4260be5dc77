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

//! SVG diagrams of node dumps.
//!
//! [`render`] validates a dump, lays it out on a fixed grid, emits the
//! primitives for every node and then every level's arrows, and returns
//! them as a [`Document`].

use crate::error::Result;
use crate::list::DumpNode;
use crate::options::RenderOptions;
use core::fmt::{self, Display, Formatter};
use tracing::debug;

mod emit;
mod layout;
mod shape;
mod spine;

pub use emit::{emit_links, emit_nodes};
pub use layout::{max_level, validate, Layout, ViewBox, MAX_DRAWN_LEVEL};
pub use shape::{Circle, Escaped, Line, Rect, Shape, Text};
pub use shape::{ARROW_MARKER_ID, MIDDLE};
pub use spine::level_spine;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A complete SVG document, written out through [`Display`].
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub view_box: ViewBox,
    pub height: f64,
    /// Primitives in drawing order; later shapes are drawn on top.
    pub shapes: Vec<Shape>,
}

impl Document {
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Rect(rect) => Some(rect),
            _ => None,
        })
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ViewBox {
            x,
            y,
            width,
            height,
        } = self.view_box;
        writeln!(
            f,
            "<svg xmlns=\"{SVG_NAMESPACE}\" viewBox=\"{x} {y} {width} \
             {height}\" height=\"{}\">",
            self.height,
        )?;
        writeln!(f, "<defs>")?;
        writeln!(
            f,
            "  <marker id=\"{ARROW_MARKER_ID}\" viewBox=\"-30 -8 30 16\" \
             markerWidth=\"30\" markerHeight=\"8\">",
        )?;
        writeln!(
            f,
            "    <path d=\"M -30 0 L -30 8 L 0 0 L -30 -8 Z\" \
             fill=\"black\"/>",
        )?;
        writeln!(f, "  </marker>")?;
        writeln!(f, "</defs>")?;
        for shape in &self.shapes {
            writeln!(f, "{shape}")?;
        }
        writeln!(f, "</svg>")
    }
}

/// Renders `nodes` as a diagram of towers and per-level links.
///
/// The dump is validated first, so an error means nothing was emitted.
pub fn render(
    nodes: &[DumpNode],
    options: &RenderOptions,
) -> Result<Document> {
    let layout = Layout::new(nodes, &options.geometry)?;
    let view_box = layout.view_box();
    debug!(
        nodes = layout.node_count(),
        max_level = layout.max_level(),
        ?view_box,
        "computed layout"
    );

    let mut shapes = Vec::new();
    emit_nodes(&layout, &options.style, nodes, &mut shapes);
    emit_links(&layout, &options.style, nodes, &mut shapes);
    Ok(Document {
        view_box,
        height: layout.document_height(),
        shapes,
    })
}
