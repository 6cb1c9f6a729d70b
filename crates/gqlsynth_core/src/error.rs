//! Errors raised while loading introspection data.

use miette::Diagnostic;
use thiserror::Error;

/// Failure to turn an introspection response into an [`IntrospectedSchema`].
///
/// [`IntrospectedSchema`]: crate::schema::IntrospectedSchema
#[derive(Debug, Error, Diagnostic)]
pub enum IntrospectionError {
    #[error("invalid introspection JSON: {0}")]
    #[diagnostic(
        code(gqlsynth::introspection::json),
        help("expected the response of a standard `__schema` introspection query")
    )]
    Json(#[from] serde_json::Error),

    #[error("introspection result has no query type")]
    #[diagnostic(code(gqlsynth::introspection::missing_query_type))]
    MissingQueryType,

    #[error("both `include` and `exclude` resource filters were supplied")]
    #[diagnostic(
        code(gqlsynth::introspection::conflicting_filters),
        help("keep only one of `include` or `exclude`")
    )]
    ConflictingFilters,
}
