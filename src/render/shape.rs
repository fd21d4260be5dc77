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

//! SVG drawing primitives.
//!
//! Each primitive formats itself as one self-closing (or text) element via
//! [`Display`].

use core::fmt::{self, Display, Formatter};

pub const ARROW_MARKER_ID: &str = "arrowend";
pub const MIDDLE: &str = "middle";

#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

/// Text anchored at `(x, y)`, optionally nudged down by `dy`.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub dy: Option<f64>,
    /// `dominant-baseline`; [`MIDDLE`] centers vertically.
    pub baseline: String,
    /// `text-anchor`; [`MIDDLE`] centers horizontally.
    pub anchor: String,
    pub fill: String,
    pub font_size: String,
    pub content: String,
}

/// A line ending in an arrowhead marker, usually [`ARROW_MARKER_ID`].
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    /// Id of the `<marker>` drawn at the end of the line.
    pub marker: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
    Text(Text),
    Line(Line),
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"/>",
            self.x,
            self.y,
            self.width,
            self.height,
            Escaped(&self.stroke),
            self.stroke_width,
            Escaped(&self.fill),
        )
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.cx,
            self.cy,
            self.r,
            Escaped(&self.fill),
        )
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<text x=\"{}\" y=\"{}\"", self.x, self.y)?;
        if let Some(dy) = self.dy.filter(|dy| *dy != 0.0) {
            write!(f, " dy=\"{dy}\"")?;
        }
        write!(
            f,
            " dominant-baseline=\"{}\" text-anchor=\"{}\" fill=\"{}\" \
             font-size=\"{}\">{}</text>",
            Escaped(&self.baseline),
            Escaped(&self.anchor),
            Escaped(&self.fill),
            Escaped(&self.font_size),
            Escaped(&self.content),
        )
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" \
             stroke-width=\"{}\" marker-end=\"url(#{})\"/>",
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            Escaped(&self.stroke),
            self.stroke_width,
            Escaped(&self.marker),
        )
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect(rect) => rect.fmt(f),
            Self::Circle(circle) => circle.fmt(f),
            Self::Text(text) => text.fmt(f),
            Self::Line(line) => line.fmt(f),
        }
    }
}

/// Writes a string with XML special characters replaced by entities.
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}
