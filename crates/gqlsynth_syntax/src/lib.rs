//! Syntax layer for gqlsynth.
//!
//! This crate provides:
//! - `ast`: Executable document syntax tree
//! - `builder`: Node constructors used to assemble documents
//! - `formatter`: Printing documents as GraphQL text

pub mod ast;
pub mod builder;
pub mod formatter;

pub use ast::*;
pub use formatter::{format, format_selection, format_with_options, FormatOptions, Formatter};
