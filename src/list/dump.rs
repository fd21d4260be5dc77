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

//! Flat snapshots of a skip list's towers.

use super::{LevelGenerator, SkipList};
use core::fmt::Display;
use serde::{Deserialize, Serialize};

pub const HEAD: &str = "head";
pub const TAIL: &str = "tail";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Head,
    Tail,
    Data,
}

/// One entry of a node dump.
///
/// A dump lists the head sentinel, then every data node in list order,
/// then the tail sentinel. `level` is the tower height; data nodes carry
/// their stringified value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub level: usize,
}

impl DumpNode {
    pub fn head(level: usize) -> Self {
        Self {
            name: Some(HEAD.to_owned()),
            value: None,
            level,
        }
    }

    pub fn tail() -> Self {
        Self {
            name: Some(TAIL.to_owned()),
            value: None,
            level: 0,
        }
    }

    pub fn data(value: impl Into<String>, level: usize) -> Self {
        Self {
            name: None,
            value: Some(value.into()),
            level,
        }
    }

    /// Classifies the node by name. An absent or empty name marks a data
    /// node; `None` is returned for any name other than `head` or `tail`.
    pub fn kind(&self) -> Option<NodeKind> {
        match self.name.as_deref() {
            None | Some("") => Some(NodeKind::Data),
            Some(HEAD) => Some(NodeKind::Head),
            Some(TAIL) => Some(NodeKind::Tail),
            Some(_) => None,
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind() == Some(NodeKind::Data)
    }
}

impl<K, V, G> SkipList<K, V, G>
where
    K: Ord,
    V: Display,
    G: LevelGenerator,
{
    /// Snapshots the list as head, data nodes in key order, then tail.
    pub fn dump(&self) -> Vec<DumpNode> {
        let mut nodes = Vec::with_capacity(self.len() + 2);
        nodes.push(DumpNode::head(self.level()));
        nodes.extend(
            self.towers().map(|(value, level)| {
                DumpNode::data(value.to_string(), level)
            }),
        );
        nodes.push(DumpNode::tail());
        nodes
    }
}
