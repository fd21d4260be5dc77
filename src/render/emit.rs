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

//! Turns a validated dump into primitives.

use super::layout::Layout;
use super::shape::{Circle, Line, Rect, Shape, Text};
use super::shape::{ARROW_MARKER_ID, MIDDLE};
use super::spine::level_spine;
use crate::list::{DumpNode, NodeKind};
use crate::options::Style;
use tracing::debug;

struct Emitter<'a, 'b> {
    layout: &'a Layout<'a>,
    style: &'a Style,
    shapes: &'b mut Vec<Shape>,
}

impl Emitter<'_, '_> {
    fn rect(&mut self, offset: usize, y: f64, fill: &str) {
        let size = self.layout.geometry().box_size;
        self.shapes.push(Shape::Rect(Rect {
            x: self.layout.column_x(offset),
            y,
            width: size,
            height: size,
            stroke: self.style.stroke.clone(),
            stroke_width: self.style.stroke_width,
            fill: fill.to_owned(),
        }));
    }

    /// An empty tower box at `level` with a pointer dot in its center.
    fn pointer(&mut self, offset: usize, level: usize) {
        self.rect(offset, self.layout.tower_y(level), "none");
        self.shapes.push(Shape::Circle(Circle {
            cx: self.layout.center_x(offset),
            cy: self.layout.center_y(level),
            r: self.layout.geometry().circle_radius,
            fill: self.style.pointer_fill.clone(),
        }));
    }

    /// Text centered in the column at `offset`.
    fn centered(
        &self,
        offset: usize,
        y: f64,
        fill: &str,
        text: &str,
    ) -> Text {
        Text {
            x: self.layout.center_x(offset),
            y,
            dy: None,
            baseline: MIDDLE.to_owned(),
            anchor: MIDDLE.to_owned(),
            fill: fill.to_owned(),
            font_size: self.style.font_size.clone(),
            content: text.to_owned(),
        }
    }

    /// A label on the row beneath the spine.
    fn label(&mut self, offset: usize, fill: &str, text: &str) {
        let y = self.layout.geometry().label_y;
        let label = self.centered(offset, y, fill, text);
        self.shapes.push(Shape::Text(label));
    }

    fn head(&mut self, offset: usize) {
        for level in 1..=self.layout.max_level() {
            self.pointer(offset, level);
        }
        let style = self.style;
        self.label(offset, &style.sentinel_label_fill, "[head]");
    }

    fn tail(&mut self, offset: usize) {
        let style = self.style;
        for level in 1..=self.layout.max_level() {
            self.rect(offset, self.layout.tower_y(level), &style.nil_fill);
            let y = self.layout.center_y(level);
            let mut nil = self.centered(offset, y, &style.text_fill, "NIL");
            nil.font_size = style.nil_font_size.clone();
            self.shapes.push(Shape::Text(nil));
        }
        self.label(offset, &style.sentinel_label_fill, "[tail]");
    }

    fn data(&mut self, offset: usize, node: &DumpNode) {
        let style = self.style;
        let geometry = self.layout.geometry();
        self.rect(offset, 0.0, &style.highlight);
        let y = geometry.center_offset();
        let mut numeral =
            self.centered(offset, y, &style.text_fill, &offset.to_string());
        numeral.dy = Some(geometry.text_shift);
        self.shapes.push(Shape::Text(numeral));
        let value = node.value.as_deref().unwrap_or_default();
        self.label(offset, &style.text_fill, value);
        for level in 1..=node.level {
            self.pointer(offset, level);
        }
    }
}

/// Appends the boxes, dots, and labels of every node, in dump order.
pub fn emit_nodes(
    layout: &Layout<'_>,
    style: &Style,
    nodes: &[DumpNode],
    shapes: &mut Vec<Shape>,
) {
    let mut emitter = Emitter {
        layout,
        style,
        shapes,
    };
    for (offset, node) in nodes.iter().enumerate() {
        match node.kind() {
            Some(NodeKind::Head) => emitter.head(offset),
            Some(NodeKind::Tail) => emitter.tail(offset),
            Some(NodeKind::Data) => emitter.data(offset, node),
            // Rejected by `validate`.
            None => {}
        }
    }
}

/// Appends one arrow per consecutive pair of each level's spine, lowest
/// level first.
///
/// Arrows run at the vertical center of the level, from the right edge of
/// the source box to the left edge of the target box.
pub fn emit_links(
    layout: &Layout<'_>,
    style: &Style,
    nodes: &[DumpNode],
    shapes: &mut Vec<Shape>,
) {
    let box_size = layout.geometry().box_size;
    for level in 1..=layout.max_level() {
        let spine = level_spine(nodes, level);
        let y = layout.center_y(level);
        shapes.extend(spine.windows(2).map(|pair| {
            Shape::Line(Line {
                x1: layout.column_x(pair[0]) + box_size,
                y1: y,
                x2: layout.column_x(pair[1]),
                y2: y,
                stroke: style.stroke.clone(),
                stroke_width: style.stroke_width,
                marker: ARROW_MARKER_ID.to_owned(),
            })
        }));
        debug!(level, arrows = spine.len() - 1, "linked level");
    }
}
