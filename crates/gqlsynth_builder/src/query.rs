//! Request-level entry point.

use crate::error::BuildError;
use crate::operation::OperationAssembler;
use gqlsynth_core::{FetchKind, IntrospectedSchema, Variables};
use gqlsynth_syntax::{format_with_options, Document, FormatOptions};
use serde_json::{Map, Value};

/// The result of building one request.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub document: Document,
    /// The printed document.
    pub query: String,
    pub operation_name: String,
    /// The defined variables, ready to send along with the query.
    pub variables: Map<String, Value>,
}

/// Builds operations for the resources of one schema.
///
/// The schema is indexed once, so a builder can serve any number of
/// requests, from any number of threads.
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    schema: &'a IntrospectedSchema,
    assembler: OperationAssembler<'a>,
    format: FormatOptions,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(schema: &'a IntrospectedSchema) -> Self {
        Self {
            schema,
            assembler: OperationAssembler::new(schema),
            format: FormatOptions::default(),
        }
    }

    /// Sets the options used to print built documents.
    #[must_use]
    pub fn with_format_options(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    /// Builds the operation for `kind` on the resource named `resource_name`.
    pub fn build(
        &self,
        resource_name: &str,
        kind: &FetchKind,
        variables: &Variables,
    ) -> Result<BuiltQuery, BuildError> {
        let resource = self
            .schema
            .find_resource(resource_name)
            .ok_or_else(|| BuildError::UnknownResource(resource_name.to_string()))?;
        let query_type =
            resource
                .operation(kind)
                .ok_or_else(|| BuildError::UnsupportedFetchKind {
                    resource: resource_name.to_string(),
                    kind: kind.clone(),
                })?;

        let document = self
            .assembler
            .assemble(&resource.ty, kind, query_type, variables);
        let query = format_with_options(&document, self.format.clone());

        Ok(BuiltQuery {
            document,
            query,
            operation_name: query_type.name.clone(),
            variables: variables.to_json(),
        })
    }

    /// Like [`QueryBuilder::build`], printing with `format` instead of the
    /// builder's options.
    pub fn build_with_options(
        &self,
        resource_name: &str,
        kind: &FetchKind,
        variables: &Variables,
        format: FormatOptions,
    ) -> Result<BuiltQuery, BuildError> {
        let mut built = self.build(resource_name, kind, variables)?;
        built.query = format_with_options(&built.document, format);
        Ok(built)
    }
}
