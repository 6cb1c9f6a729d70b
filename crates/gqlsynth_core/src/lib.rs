//! Core types for gqlsynth.
//!
//! This crate provides the read-only inputs of the query-synthesis engine:
//! - `schema`: Introspected types, fields, arguments and resources
//! - `type_ref`: Type-reference classification (list, required, named leaf)
//! - `fetch`: Data-access operation kinds
//! - `variables`: Request variables with "not supplied" tracking
//! - `introspection`: Loading introspection JSON and deriving resources

pub mod error;
pub mod fetch;
pub mod introspection;
pub mod schema;
pub mod type_ref;
pub mod variables;

pub use error::IntrospectionError;
pub use fetch::{FetchKind, MUTATION_KINDS, QUERY_KINDS};
pub use introspection::{IntrospectionOptions, IntrospectionResult, OperationNames};
pub use schema::{
    FieldDescriptor, InputValue, IntrospectedSchema, QueryType, Resource, TypeDescriptor, TypeKind,
    TypeRef,
};
pub use type_ref::NamedType;
pub use variables::Variables;
