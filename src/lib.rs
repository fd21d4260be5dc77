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

//! Draws the towers and forward links of a skip list as an SVG diagram.
//!
//! A [`SkipList`] is snapshotted with [`SkipList::dump`] into a list of
//! [`DumpNode`]s (head, data nodes, tail), and [`render()`] turns that dump
//! into a [`Document`]:
//!
//! ```
//! use skippy_svg::{render, RenderOptions, SkipList};
//!
//! let mut list = SkipList::new();
//! for (i, word) in ["alpha", "beta", "gamma"].into_iter().enumerate() {
//!     list.insert(i, word);
//! }
//! let svg = render(&list.dump(), &RenderOptions::default())?.to_string();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<_, skippy_svg::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod list;
pub mod options;
pub mod render;
pub mod source;
#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use list::{DumpNode, Geometric, LevelGenerator, NodeKind, SkipList};
pub use options::{Geometry, RenderOptions, Style};
pub use render::{level_spine, render, Document};
