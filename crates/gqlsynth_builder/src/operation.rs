//! Operation assembly.
//!
//! List-like kinds produce an `items` field plus a `total` count taken from
//! the `_<operation>Meta` field. Every other kind produces a single `data`
//! field, under a mutation for DELETE and for any kind that is not a read.

use crate::arguments::{build_call_arguments, build_variable_definitions};
use crate::fields::FieldSelector;
use gqlsynth_core::{FetchKind, IntrospectedSchema, QueryType, TypeDescriptor, Variables};
use gqlsynth_syntax::builder::{document, field, name, operation_definition, selection_set};
use gqlsynth_syntax::{Argument, Document, OperationType, Selection};
use tracing::debug;

/// Variables that only affect ordering and never reach the count field.
pub const PAGINATION_ONLY_VARIABLES: [&str; 2] = ["sortField", "sortOrder"];

const ITEMS_ALIAS: &str = "items";
const TOTAL_ALIAS: &str = "total";
const DATA_ALIAS: &str = "data";
const COUNT_FIELD: &str = "count";

/// Assembles one operation document per request.
#[derive(Debug)]
pub struct OperationAssembler<'a> {
    selector: FieldSelector<'a>,
}

impl<'a> OperationAssembler<'a> {
    pub fn new(schema: &'a IntrospectedSchema) -> Self {
        Self {
            selector: FieldSelector::new(schema),
        }
    }

    /// Builds the document requesting `resource` for `kind` through the root
    /// field described by `query_type`.
    pub fn assemble(
        &self,
        resource: &TypeDescriptor,
        kind: &FetchKind,
        query_type: &QueryType,
        variables: &Variables,
    ) -> Document {
        let meta_variables = variables.without(&PAGINATION_ONLY_VARIABLES);
        let variable_definitions = build_variable_definitions(&query_type.args, variables);
        let args = build_call_arguments(&query_type.args, variables);
        let meta_args = build_call_arguments(&query_type.args, &meta_variables);
        let fields = self.selector.select_fields(resource.fields());

        debug!(
            resource = %resource.name,
            kind = %kind,
            operation = %query_type.name,
            variables = variable_definitions.len(),
            fields = fields.len(),
            "assembling operation"
        );

        let (operation, selections) = if kind.is_list_like() {
            (
                OperationType::Query,
                vec![
                    root_field(&query_type.name, ITEMS_ALIAS, args, fields),
                    root_field(
                        &format!("_{}Meta", query_type.name),
                        TOTAL_ALIAS,
                        meta_args,
                        vec![field(name(COUNT_FIELD)).into()],
                    ),
                ],
            )
        } else if *kind.canonical() == FetchKind::Delete {
            (
                OperationType::Mutation,
                vec![root_field(&query_type.name, DATA_ALIAS, args, fields)],
            )
        } else {
            let operation = if kind.is_query() {
                OperationType::Query
            } else {
                OperationType::Mutation
            };
            (
                operation,
                vec![root_field(&query_type.name, DATA_ALIAS, args, fields)],
            )
        };

        document(vec![operation_definition(
            operation,
            Some(name(&query_type.name)),
            variable_definitions,
            selection_set(selections),
        )])
    }
}

fn root_field(
    field_name: &str,
    alias: &str,
    arguments: Vec<Argument>,
    selections: Vec<Selection>,
) -> Selection {
    field(name(field_name))
        .with_alias(name(alias))
        .with_arguments(arguments)
        .with_selection_set(selection_set(selections))
        .into()
}
