/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Options of a conversion.
///
/// They are fixed before the first line is read and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Whether link weights are written. When false, destinations are
    /// written bare and weight tokens in the input are ignored.
    pub weighted: bool,
    /// Whether the consumer of the output should normalize link weights.
    /// This only sets the corresponding flag in the `/Graph` header.
    pub normalize: bool,
    /// Whether repeated links between the same pair of nodes within a section
    /// are coalesced, keeping the last weight.
    pub resolve_duplicates: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            weighted: true,
            normalize: false,
            resolve_duplicates: false,
        }
    }
}

impl GraphOptions {
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn resolve_duplicates(mut self, resolve_duplicates: bool) -> Self {
        self.resolve_duplicates = resolve_duplicates;
        self
    }
}
