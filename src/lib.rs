/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
// for now we don't need any new feature but we might remove this in the future
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod error;
pub mod hig;
pub mod links;
pub mod options;
pub mod pajek;

pub use error::ConvertError;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::error::ConvertError;
    pub use crate::hig::*;
    pub use crate::links::*;
    pub use crate::options::*;
    pub use crate::pajek::*;
}
