/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Vertices of a weighted graph.

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The color a vertex gets if none is given explicitly.
pub const NO_COLOR: char = ' ';

/// A labeled, colored vertex.
///
/// The label identifies the vertex within a graph: two vertices with
/// the same label are the same vertex.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Vertex {
    label: String,
    color: char,
}

impl Vertex {
    /// Create a new vertex with the given label and color.
    pub fn new<S: Into<String>>(label: S, color: char) -> Self {
        Vertex {
            label: label.into(),
            color,
        }
    }

    /// Create a new vertex without a color.
    pub fn uncolored<S: Into<String>>(label: S) -> Self {
        Vertex::new(label, NO_COLOR)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }

    pub fn color(&self) -> char {
        self.color
    }

    pub fn set_color(&mut self, color: char) {
        self.color = color;
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.label)
    }
}

impl<'a> From<&'a str> for Vertex {
    fn from(label: &'a str) -> Self {
        Vertex::uncolored(label)
    }
}
