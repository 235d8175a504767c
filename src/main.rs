/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use anyhow::Result;
use pajek_hig::cli::cli_main;
use pajek_hig::cli::init_envlogger;

pub fn main() -> Result<()> {
    // Initialize the logger
    init_envlogger()?;
    // Call the main function of the CLI with cli args
    cli_main(std::env::args_os())
}
