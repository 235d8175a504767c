/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Per-node aggregation of the links of a section.
//!
//! Links of `*edges` and `*arcs` sections come one per line, in any order;
//! HiG wants all the links of a node on a single line. [`LinkSet`] collects
//! the links of the current section by source node, and is drained at every
//! section boundary. Self-loops of undirected sections are kept apart in
//! [`DeferredArcs`] until the end of the input.
//!
//! All associations are [`IndexMap`]s, so the output follows the order of
//! first appearance in the input, and overwriting a key keeps its position.

use crate::pajek::LinkRecord;
use indexmap::IndexMap;
use itertools::Either;

/// The links of a single source node.
///
/// The variant is chosen once per conversion from
/// [`GraphOptions::resolve_duplicates`](crate::options::GraphOptions::resolve_duplicates).
#[derive(Debug, Clone)]
pub enum NodeLinks {
    /// Links in input order, duplicates included.
    Ordered(Vec<LinkRecord>),
    /// Weights by destination in order of first appearance; a repeated
    /// destination replaces the previous weight.
    Deduplicated(IndexMap<String, String>),
}

impl NodeLinks {
    pub fn new(resolve_duplicates: bool) -> Self {
        if resolve_duplicates {
            NodeLinks::Deduplicated(IndexMap::new())
        } else {
            NodeLinks::Ordered(Vec::new())
        }
    }

    /// Adds a link. Returns true if the number of links grew.
    pub fn push(&mut self, link: LinkRecord) -> bool {
        match self {
            NodeLinks::Ordered(links) => {
                links.push(link);
                true
            }
            NodeLinks::Deduplicated(weights) => {
                weights.insert(link.destination, link.weight).is_none()
            }
        }
    }

    /// Iterates over `(destination, weight)` pairs in aggregation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        match self {
            NodeLinks::Ordered(links) => Either::Left(links.iter().map(LinkRecord::as_pair)),
            NodeLinks::Deduplicated(weights) => Either::Right(
                weights
                    .iter()
                    .map(|(dst, weight)| (dst.as_str(), weight.as_str())),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NodeLinks::Ordered(links) => links.len(),
            NodeLinks::Deduplicated(weights) => weights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The pending links of the current section, by source node.
#[derive(Debug, Clone)]
pub struct LinkSet {
    resolve_duplicates: bool,
    nodes: IndexMap<u64, NodeLinks>,
    num_links: usize,
}

impl LinkSet {
    pub fn new(resolve_duplicates: bool) -> Self {
        Self {
            resolve_duplicates,
            nodes: IndexMap::new(),
            num_links: 0,
        }
    }

    /// Adds a link from `src`.
    pub fn push(&mut self, src: u64, link: LinkRecord) {
        let resolve_duplicates = self.resolve_duplicates;
        if self
            .nodes
            .entry(src)
            .or_insert_with(|| NodeLinks::new(resolve_duplicates))
            .push(link)
        {
            self.num_links += 1;
        }
    }

    /// Returns the number of source nodes with pending links.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of pending links.
    pub fn num_links(&self) -> usize {
        self.num_links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the pending links, leaving the set empty.
    pub fn drain(&mut self) -> indexmap::map::Drain<'_, u64, NodeLinks> {
        debug_assert!(self.nodes.values().all(|links| !links.is_empty()));
        self.num_links = 0;
        self.nodes.drain(..)
    }
}

/// Self-loops found in undirected sections, at most one per node.
///
/// They are written as arcs after all other sections.
#[derive(Debug, Clone, Default)]
pub struct DeferredArcs {
    loops: IndexMap<u64, LinkRecord>,
}

impl DeferredArcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the self-loop of `node`, replacing any previous one.
    pub fn insert(&mut self, node: u64, link: LinkRecord) {
        self.loops.insert(node, link);
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Iterates over the self-loops, leaving the set empty.
    pub fn drain(&mut self) -> indexmap::map::Drain<'_, u64, LinkRecord> {
        self.loops.drain(..)
    }
}
