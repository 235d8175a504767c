/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Streaming conversion from Pajek to HiG.
//!
//! [`PajekToHig`] consumes a Pajek stream one line at a time and writes the
//! HiG translation as soon as possible: links of `*edges` and `*arcs`
//! sections are grouped by source node and written at the end of each
//! section, whereas lines of `*edgeslist` and `*arcslist` sections are
//! written immediately. Memory usage is thus bounded by the size of the
//! largest `*edges`/`*arcs` section.
//!
//! ```
//! use pajek_hig::prelude::*;
//!
//! let input = "*Vertices 3\n*Edges\n1 2\n2 3\n1 1\n";
//! let mut output = Vec::new();
//! convert(
//!     input.as_bytes(),
//!     &mut output,
//!     "example.net",
//!     GraphOptions::default(),
//!     dsi_progress_logger::no_logging![],
//! )?;
//! let output = String::from_utf8(output).unwrap();
//! assert!(output.ends_with("\n/Edges\n1> 2:1\n2> 3:1\n\n/Arcs\n1> 1:1\n"));
//! # Ok::<(), pajek_hig::ConvertError>(())
//! ```

use crate::error::{ConvertError, Result};
use crate::hig::{HigWriter, Marker};
use crate::links::{DeferredArcs, LinkSet};
use crate::options::GraphOptions;
use crate::pajek::{lookup_section, Body, Line, LinkRecord, Section, SectionHeader};
use dsi_progress_logger::prelude::*;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// The extension of HiG files.
pub const HIG_EXTENSION: &str = "hig";

/// Returns the HiG file name for a Pajek file name: the extension, if any,
/// is replaced by [`HIG_EXTENSION`].
///
/// A file name made of a dot and an extension only, such as `.net`, is all
/// extension and becomes `.hig`.
pub fn hig_path(pajek_path: impl AsRef<Path>) -> PathBuf {
    let path = pajek_path.as_ref();
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.len() > 1 && name.rfind('.') == Some(0) => {
            path.with_file_name(format!(".{}", HIG_EXTENSION))
        }
        _ => path.with_extension(HIG_EXTENSION),
    }
}

/// Statistics about a completed conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// The number of input lines, comments included.
    pub lines: usize,
    /// The number of vertices declared in the input.
    pub num_nodes: u64,
    /// The number of section headers.
    pub sections: usize,
    /// The number of links written.
    pub links: usize,
    /// The number of self-loops moved from undirected sections to the final
    /// `/Arcs` section.
    pub deferred_loops: usize,
}

/// The state carried from one input line to the next.
#[derive(Debug)]
struct ConverterState {
    /// The section being read.
    section: Section,
    /// Links of the current section not written yet.
    links: LinkSet,
    /// Self-loops of undirected sections, written at the end.
    deferred: DeferredArcs,
    /// The number of the last line pushed.
    line: usize,
}

/// A line-by-line Pajek to HiG converter.
#[derive(Debug)]
pub struct PajekToHig<W: Write> {
    options: GraphOptions,
    writer: HigWriter<W>,
    state: ConverterState,
    stats: ConversionStats,
}

impl<W: Write> PajekToHig<W> {
    /// Creates a converter writing to `out`, and writes the HiG preamble.
    ///
    /// `source` is mentioned in the leading comment of the output.
    pub fn new(out: W, source: impl Display, options: GraphOptions) -> Result<Self> {
        let mut writer = HigWriter::new(out, &options);
        writer.write_comment(format_args!("Converted from {}", source))?;
        writer.write_graph_header(&options)?;
        Ok(Self {
            options,
            writer,
            state: ConverterState {
                section: Section::None,
                links: LinkSet::new(options.resolve_duplicates),
                deferred: DeferredArcs::new(),
                line: 0,
            },
            stats: ConversionStats::default(),
        })
    }

    /// Returns the section being read.
    pub fn section(&self) -> Section {
        self.state.section
    }

    /// Processes the next input line, without line terminator.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.state.line += 1;
        self.stats.lines += 1;
        match Line::classify(line) {
            Line::Skip => Ok(()),
            Line::Header(header) => self.header(header),
            Line::Body(body) => self.body(body),
        }
    }

    fn header(&mut self, text: &str) -> Result<()> {
        let line = self.state.line;
        let header = SectionHeader::parse(text, line)?;
        if self.state.section == Section::None && !header.is_vertices() {
            return Err(ConvertError::format(
                line,
                format!(
                    "invalid section {:?}: the vertices section must be first",
                    header.name
                ),
            ));
        }
        if self.state.section != Section::None && header.is_vertices() {
            return Err(ConvertError::format(line, "duplicate vertices section"));
        }

        self.flush_links()?;

        let entry = lookup_section(header.name).ok_or_else(|| {
            ConvertError::format(line, format!("unexpected section {:?}", header.name))
        })?;
        if entry.section == Section::Vertices {
            let num_nodes = header.vertex_count(line)?;
            self.writer.write_nodes_header(num_nodes)?;
            self.stats.num_nodes = num_nodes;
        }
        if let Some(marker) = entry.marker {
            self.writer.write_marker(marker)?;
        }

        log::debug!(
            "Line {}: section {} -> {}",
            line,
            self.state.section,
            entry.section
        );
        self.state.section = entry.section;
        self.stats.sections += 1;
        Ok(())
    }

    fn body(&mut self, text: &str) -> Result<()> {
        let line = self.state.line;
        let section = self.state.section;
        match section {
            Section::None => Err(ConvertError::format(
                line,
                "a section header is expected before any data",
            )),
            Section::Vertices => {
                // vertex labels and coordinates are not converted
                log::trace!("Line {}: skipping vertex {:?}", line, text);
                Ok(())
            }
            Section::Edges | Section::Arcs => {
                let body = Body::parse(text, section, line)?;
                let link = body.link(self.options.weighted, line)?;
                if section == Section::Edges && link.destination == body.source_token {
                    self.state.deferred.insert(body.source, link);
                } else {
                    self.state.links.push(body.source, link);
                }
                Ok(())
            }
            Section::EdgesList | Section::ArcsList => {
                let body = Body::parse(text, section, line)?;
                let links = body.link_list().collect::<Vec<_>>();
                self.writer
                    .write_links(body.source, links.iter().map(LinkRecord::as_pair))?;
                Ok(())
            }
        }
    }

    /// Writes the pending links of the current section.
    fn flush_links(&mut self) -> Result<()> {
        if self.state.links.is_empty() {
            return Ok(());
        }
        if !self.state.section.is_aggregated() {
            return Err(ConvertError::logic(
                self.state.line,
                format!("unsaved links in the {:?} section", self.state.section.name()),
            ));
        }
        log::debug!(
            "Line {}: writing {} links of {} nodes",
            self.state.line,
            self.state.links.num_links(),
            self.state.links.num_nodes()
        );
        for (src, links) in self.state.links.drain() {
            self.writer.write_links(src, links.iter())?;
        }
        Ok(())
    }

    /// Completes the conversion, writing all pending data.
    ///
    /// Returns the output and the conversion statistics.
    pub fn finish(mut self) -> Result<(W, ConversionStats)> {
        self.flush_links()?;
        if !self.state.deferred.is_empty() {
            log::debug!(
                "Writing {} self-loops of undirected sections as arcs",
                self.state.deferred.len()
            );
            self.stats.deferred_loops = self.state.deferred.len();
            self.writer.write_marker(Marker::Arcs)?;
            for (node, link) in self.state.deferred.drain() {
                self.writer.write_links(node, [link.as_pair()])?;
            }
        }
        self.writer.flush()?;
        self.stats.links = self.writer.num_links();
        Ok((self.writer.into_inner(), self.stats))
    }
}

/// Converts a whole Pajek stream.
///
/// `source` is mentioned in the leading comment of the output; `pl` is
/// updated once per input line.
pub fn convert<W: Write>(
    input: impl BufRead,
    out: W,
    source: impl Display,
    options: GraphOptions,
    pl: &mut impl ProgressLog,
) -> Result<ConversionStats> {
    let mut converter = PajekToHig::new(out, source, options)?;
    pl.item_name("line");
    pl.start("Converting Pajek lines...");
    for line in input.lines() {
        converter.push_line(&line?)?;
        pl.light_update();
    }
    let (_, stats) = converter.finish()?;
    pl.done();
    Ok(stats)
}
