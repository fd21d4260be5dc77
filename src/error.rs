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

//! Errors raised while validating a node dump.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// A node dump that cannot be laid out.
///
/// Every variant is a violated precondition on the dump; rendering stops
/// before any primitive is emitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node dump is empty")]
    EmptyDump,

    #[error("node dump does not start with a head sentinel")]
    MissingHead,

    #[error("node dump does not end with a tail sentinel")]
    MissingTail,

    #[error("sentinel `{name}` found at interior offset {offset}")]
    MisplacedSentinel { offset: usize, name: String },

    #[error("node at offset {offset} has unknown name `{name}`")]
    UnknownNode { offset: usize, name: String },

    #[error("data node at offset {offset} has level 0")]
    ZeroLevel { offset: usize },

    #[error("node dump holds only sentinels; there is no level to draw")]
    NoDataNodes,

    #[error(
        "data node at offset {offset} has level {level}; \
         at most {max} levels can be drawn"
    )]
    LevelTooHigh { offset: usize, level: usize, max: usize },

    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}
