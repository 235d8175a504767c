/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

fn main() {
    // collect version, git, and toolchain information for --version
    built::write_built_file().expect("Failed to acquire build-time information");
}
