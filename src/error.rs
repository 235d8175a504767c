/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised while converting a Pajek stream.
///
/// All errors are fatal: the conversion stops at the first one, and whatever
/// was already written to the output stays there.
pub enum ConvertError {
    /// The input is not syntactically valid Pajek.
    #[error("Invalid Pajek format at line {line}: {msg}")]
    Format { line: usize, msg: String },
    /// The section state machine reached a state that valid input cannot
    /// produce.
    #[error("Logical error at line {line}: {msg}")]
    Logic { line: usize, msg: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub(crate) fn format(line: usize, msg: impl Into<String>) -> Self {
        ConvertError::Format {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn logic(line: usize, msg: impl Into<String>) -> Self {
        ConvertError::Logic {
            line,
            msg: msg.into(),
        }
    }

    /// Returns the 1-based input line at which the error was detected, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::Format { line, .. } | ConvertError::Logic { line, .. } => Some(*line),
            ConvertError::Io(_) => None,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
