//! Errors raised while building a request.

use gqlsynth_core::FetchKind;
use miette::Diagnostic;
use thiserror::Error;

/// A request that cannot be turned into an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BuildError {
    #[error("unknown resource `{0}`")]
    #[diagnostic(
        code(gqlsynth::build::unknown_resource),
        help("run `gqlsynth resources` to list the resources found in the schema")
    )]
    UnknownResource(String),

    #[error("resource `{resource}` has no operation for `{kind}`")]
    #[diagnostic(code(gqlsynth::build::unsupported_fetch_kind))]
    UnsupportedFetchKind { resource: String, kind: FetchKind },
}
