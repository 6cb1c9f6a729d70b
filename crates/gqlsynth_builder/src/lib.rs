//! Query synthesis engine for gqlsynth.
//!
//! Turns an introspected schema and a generic data-access request into a
//! GraphQL operation document:
//! - `arguments`: Call-site arguments and variable definitions
//! - `fields`: Recursive field selection with a cycle guard
//! - `operation`: Assembly of one operation per fetch kind
//! - `query`: Resource lookup, assembly and printing in one call

pub mod arguments;
pub mod error;
pub mod fields;
pub mod operation;
pub mod query;

pub use arguments::{argument_type, build_call_arguments, build_variable_definitions};
pub use error::BuildError;
pub use fields::{FieldSelector, VisitedPath};
pub use operation::{OperationAssembler, PAGINATION_ONLY_VARIABLES};
pub use query::{BuiltQuery, QueryBuilder};
