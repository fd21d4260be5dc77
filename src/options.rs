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

//! Tunable geometry and colors for rendered diagrams.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options for [`render`](crate::render::render).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub geometry: Geometry,
    pub style: Style,
}

/// Distances, in user units, used to place every primitive.
///
/// Field           | Default | Meaning
/// --------------- | ------- | ---------------------------------------
/// `box_size`      | 100     | edge of one tower box
/// `spacing`       | 200     | distance between adjacent node columns
/// `circle_radius` | 10      | radius of the pointer dot inside a box
/// `text_shift`    | 3       | `dy` nudge for offset numerals
/// `label_y`       | 150     | row for labels under the spine
/// `bottom_margin` | 100     | extra document height for labels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub box_size: f64,
    pub spacing: f64,
    pub circle_radius: f64,
    pub text_shift: f64,
    pub label_y: f64,
    pub bottom_margin: f64,
}

impl Geometry {
    /// Derives every distance from the edge of one box. Spacing is twice
    /// the box size so arrows have room between columns.
    pub fn with_box_size(box_size: f64) -> Self {
        Self {
            box_size,
            spacing: box_size * 2.0,
            circle_radius: box_size / 10.0,
            text_shift: 3.0,
            label_y: box_size * 1.5,
            bottom_margin: box_size,
        }
    }

    /// Checks that every distance is finite, the box size is positive,
    /// and columns are far enough apart to leave room for arrows.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(Error::InvalidGeometry {
                reason: reason.to_owned(),
            })
        };
        let distances = [
            self.box_size,
            self.spacing,
            self.circle_radius,
            self.text_shift,
            self.label_y,
            self.bottom_margin,
        ];
        if !distances.iter().all(|d| d.is_finite()) {
            return invalid("every distance must be finite");
        }
        if self.box_size <= 0.0 {
            return invalid("box size must be positive");
        }
        if self.spacing <= self.box_size {
            return invalid("spacing must exceed box size");
        }
        if self.circle_radius < 0.0 || self.bottom_margin < 0.0 {
            return invalid("radius and margin must not be negative");
        }
        Ok(())
    }

    pub fn center_offset(&self) -> f64 {
        self.box_size / 2.0
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::with_box_size(100.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    /// Fill of a data node's base box.
    pub highlight: String,
    /// Fill of the tail's boxes.
    pub nil_fill: String,
    pub pointer_fill: String,
    pub sentinel_label_fill: String,
    pub text_fill: String,
    pub font_size: String,
    pub nil_font_size: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "black".to_owned(),
            stroke_width: 2.0,
            highlight: "yellow".to_owned(),
            nil_fill: "#E8E8E8".to_owned(),
            pointer_fill: "black".to_owned(),
            sentinel_label_fill: "gray".to_owned(),
            text_fill: "black".to_owned(),
            font_size: "400%".to_owned(),
            nil_font_size: "300%".to_owned(),
        }
    }
}
