/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Writing of the HiG graph format.
//!
//! A HiG file starts with a `/Graph` header carrying the graph attributes and
//! a `/Nodes` header carrying the number of nodes and the id of the first
//! node. Links follow in `/Edges` (undirected) and `/Arcs` (directed)
//! sections, one line per source node:
//! ```text
//! /Graph weighted:1 normalize:0
//!
//! /Nodes 3 1
//!
//!
//! /Edges
//! 1> 2:1 3:0.5
//! ```
//! Unweighted graphs omit the `:<weight>` suffix.

use crate::options::GraphOptions;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// The id of the first node. Pajek numbers nodes from one.
pub const START_ID: u64 = 1;

/// A HiG link section marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Edges,
    Arcs,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Edges => "/Edges",
            Marker::Arcs => "/Arcs",
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line-oriented HiG writer.
#[derive(Debug)]
pub struct HigWriter<W: Write> {
    out: W,
    weighted: bool,
    num_links: usize,
}

impl<W: Write> HigWriter<W> {
    pub fn new(out: W, options: &GraphOptions) -> Self {
        Self {
            out,
            weighted: options.weighted,
            num_links: 0,
        }
    }

    /// Writes a comment line.
    pub fn write_comment(&mut self, comment: impl Display) -> io::Result<()> {
        writeln!(self.out, "# {}", comment)
    }

    /// Writes the `/Graph` header followed by a blank line.
    pub fn write_graph_header(&mut self, options: &GraphOptions) -> io::Result<()> {
        write!(
            self.out,
            "/Graph weighted:{} normalize:{}\n\n",
            options.weighted as u8, options.normalize as u8
        )
    }

    /// Writes the `/Nodes` header followed by a blank line.
    pub fn write_nodes_header(&mut self, num_nodes: u64) -> io::Result<()> {
        write!(self.out, "/Nodes {} {}\n\n", num_nodes, START_ID)
    }

    /// Writes a section marker preceded by a blank line.
    pub fn write_marker(&mut self, marker: Marker) -> io::Result<()> {
        write!(self.out, "\n{}\n", marker)
    }

    /// Writes the `(destination, weight)` pairs of a source node on a single
    /// line, as `dst:weight` entries or bare `dst` entries for unweighted
    /// graphs.
    ///
    /// Nothing is written if `links` is empty. Returns the number of links
    /// written.
    pub fn write_links<'a>(
        &mut self,
        src: u64,
        links: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> io::Result<usize> {
        let mut links = links.into_iter().peekable();
        if links.peek().is_none() {
            return Ok(0);
        }
        write!(self.out, "{}>", src)?;
        let mut count = 0;
        for (dst, weight) in links {
            if self.weighted {
                write!(self.out, " {}:{}", dst, weight)?;
            } else {
                write!(self.out, " {}", dst)?;
            }
            count += 1;
        }
        writeln!(self.out)?;
        self.num_links += count;
        Ok(count)
    }

    /// Returns the number of links written so far.
    pub fn num_links(&self) -> usize {
        self.num_links
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
