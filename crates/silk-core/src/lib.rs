// SPDX-FileCopyrightText: 2026 Silk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Silk plugin layer.
//!
//! This crate provides the error type shared by every Silk crate and the
//! enumerated parameter types that plugins expose as closed value sets.

pub mod enumeration;
pub mod enums;
pub mod error;

// Re-export key items at crate root for ergonomic imports.
pub use enumeration::{EnumerationOption, EnumerationParameter, EnumerationSchema};
pub use enums::{
    builtin_enumeration, builtin_enumerations, CompareOperator, DateUnit,
    EntityRetrieverStrategy, OverwriteStrategy, VocabularyCategory,
};
pub use error::SilkError;
