/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Tokenization of the Pajek network format.
//!
//! A Pajek file is a sequence of sections, each introduced by a header line
//! starting with `*` (e.g., `*Vertices 34`, `*Edges`, `*Arcslist`) and
//! followed by body lines. Lines starting with `%` and blank lines are
//! comments. This module classifies lines and parses section headers and link
//! records; it does not keep any state across lines.

use crate::error::{ConvertError, Result};
use crate::hig::Marker;
use std::fmt::{Display, Formatter};

/// Lines starting with this symbol (after leading whitespace) are comments.
pub const COMMENT_SYMBOL: char = '%';
/// Lines starting with this symbol (after leading whitespace) are section
/// headers.
pub const HEADER_SYMBOL: char = '*';
/// The weight assigned to links with no explicit weight.
pub const DEFAULT_WEIGHT: &str = "1";

/// A section of a Pajek file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// No header has been seen yet.
    None,
    /// Vertex declarations; only the count in the header is used.
    Vertices,
    /// Undirected links, one per line.
    Edges,
    /// Directed links, one per line.
    Arcs,
    /// Undirected links, a source and a list of destinations per line.
    EdgesList,
    /// Directed links, a source and a list of destinations per line.
    ArcsList,
}

impl Section {
    /// Returns the lowercase header name of the section.
    pub fn name(&self) -> &'static str {
        match self {
            Section::None => "<none>",
            Section::Vertices => "vertices",
            Section::Edges => "edges",
            Section::Arcs => "arcs",
            Section::EdgesList => "edgeslist",
            Section::ArcsList => "arcslist",
        }
    }

    /// Returns whether body lines of this section carry a single link that
    /// is aggregated per source node.
    pub fn is_aggregated(&self) -> bool {
        matches!(self, Section::Edges | Section::Arcs)
    }

    /// Returns whether body lines of this section carry a list of
    /// destinations.
    pub fn is_list(&self) -> bool {
        matches!(self, Section::EdgesList | Section::ArcsList)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An entry of the section table: the header name, the section it opens, and
/// the HiG marker written when it opens.
#[derive(Debug, Clone, Copy)]
pub struct SectionEntry {
    pub name: &'static str,
    pub section: Section,
    pub marker: Option<Marker>,
}

/// The supported sections. Any other header name is an error.
pub const SECTIONS: [SectionEntry; 5] = [
    SectionEntry {
        name: "vertices",
        section: Section::Vertices,
        marker: None,
    },
    SectionEntry {
        name: "edges",
        section: Section::Edges,
        marker: Some(Marker::Edges),
    },
    SectionEntry {
        name: "arcs",
        section: Section::Arcs,
        marker: Some(Marker::Arcs),
    },
    SectionEntry {
        name: "edgeslist",
        section: Section::EdgesList,
        marker: Some(Marker::Edges),
    },
    SectionEntry {
        name: "arcslist",
        section: Section::ArcsList,
        marker: Some(Marker::Arcs),
    },
];

/// Looks up a header name, ignoring case.
pub fn lookup_section(name: &str) -> Option<&'static SectionEntry> {
    SECTIONS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// The kind of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A blank or comment line.
    Skip,
    /// A section header; contains the text following the `*`.
    Header(&'a str),
    /// A section body line, without leading whitespace.
    Body(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with(COMMENT_SYMBOL) {
            Line::Skip
        } else if let Some(header) = line.strip_prefix(HEADER_SYMBOL) {
            Line::Header(header)
        } else {
            Line::Body(line)
        }
    }
}

/// A parsed section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    /// The section name, as written.
    pub name: &'a str,
    /// The first argument after the name, if any (the vertex count for
    /// `*vertices`). Further arguments are ignored.
    pub arg: Option<&'a str>,
}

impl<'a> SectionHeader<'a> {
    /// Parses the text following the `*` of a header line.
    pub fn parse(text: &'a str, line: usize) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| ConvertError::format(line, "invalid section name (empty)"))?;
        Ok(Self {
            name,
            arg: tokens.next(),
        })
    }

    pub fn is_vertices(&self) -> bool {
        self.name.eq_ignore_ascii_case(Section::Vertices.name())
    }

    /// Parses the vertex count of a `*vertices` header.
    pub fn vertex_count(&self, line: usize) -> Result<u64> {
        self.arg
            .and_then(|arg| arg.parse::<u64>().ok())
            .ok_or_else(|| ConvertError::format(line, "the number of vertices must be specified"))
    }
}

/// A link to a destination node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// The destination node id, as written in the input.
    pub destination: String,
    /// The weight, as written in the input, or [`DEFAULT_WEIGHT`].
    pub weight: String,
    /// Whether the weight was not taken from the input.
    pub defaulted: bool,
}

impl LinkRecord {
    pub fn new(destination: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            weight: weight.into(),
            defaulted: false,
        }
    }

    /// Creates a link with the default weight.
    pub fn unweighted(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            weight: DEFAULT_WEIGHT.to_owned(),
            defaulted: true,
        }
    }

    /// Returns the `(destination, weight)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.destination, &self.weight)
    }
}

/// A body line split into its source node and the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body<'a> {
    /// The source node id.
    pub source: u64,
    /// The source node id as written, used for textual comparison with
    /// destinations.
    pub source_token: &'a str,
    /// The remaining tokens.
    pub rest: &'a str,
}

impl<'a> Body<'a> {
    pub fn parse(text: &'a str, section: Section, line: usize) -> Result<Self> {
        let text = text.trim();
        let Some((source_token, rest)) = text.split_once(char::is_whitespace) else {
            return Err(ConvertError::format(
                line,
                format!(
                    "at least 2 ids are expected in the items of the {:?} section: {:?}",
                    section.name(),
                    text
                ),
            ));
        };
        let source = source_token.parse::<u64>().map_err(|err| {
            ConvertError::format(
                line,
                format!("invalid source node id {:?}: {}", source_token, err),
            )
        })?;
        Ok(Self {
            source,
            source_token,
            rest: rest.trim_start(),
        })
    }

    /// Parses the rest of an `*edges` or `*arcs` line: a destination and an
    /// optional weight.
    ///
    /// The weight is used only if `weighted` is true.
    pub fn link(&self, weighted: bool, line: usize) -> Result<LinkRecord> {
        let mut tokens = self.rest.split_whitespace();
        let (Some(destination), weight, None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ConvertError::format(
                line,
                format!("invalid format of the link specification: {:?}", self.rest),
            ));
        };
        Ok(match weight {
            Some(weight) if weighted => LinkRecord::new(destination, weight),
            _ => LinkRecord::unweighted(destination),
        })
    }

    /// Parses the rest of an `*edgeslist` or `*arcslist` line: a list of
    /// destinations, all with the default weight.
    pub fn link_list(&self) -> impl Iterator<Item = LinkRecord> + 'a {
        self.rest.split_whitespace().map(LinkRecord::unweighted)
    }
}
