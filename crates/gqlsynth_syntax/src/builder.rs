//! Node constructors.
//!
//! Small free functions that assemble well-formed syntax trees, so callers
//! never build AST structs field by field.
//!
//! ```
//! use gqlsynth_syntax::builder::*;
//! use gqlsynth_syntax::{format, OperationType};
//!
//! let doc = document(vec![operation_definition(
//!     OperationType::Query,
//!     Some(name("getPost")),
//!     vec![variable_definition(name("id"), non_null_type(named_type(name("ID"))))],
//!     selection_set(vec![field(name("Post"))
//!         .with_arguments(vec![argument(name("id"), variable(name("id")))])
//!         .with_selection_set(selection_set(vec![field(name("title")).into()]))
//!         .into()]),
//! )]);
//!
//! assert_eq!(format(&doc), "query getPost($id: ID!) {\n  Post(id: $id) {\n    title\n  }\n}\n");
//! ```

use crate::ast::*;

pub fn name(value: impl Into<String>) -> Name {
    Name::new(value)
}

pub fn document(definitions: Vec<OperationDefinition>) -> Document {
    Document { definitions }
}

pub fn operation_definition(
    operation: OperationType,
    name: Option<Name>,
    variables: Vec<VariableDefinition>,
    selection_set: SelectionSet,
) -> OperationDefinition {
    OperationDefinition {
        operation,
        name,
        variables,
        selection_set,
    }
}

pub fn selection_set(selections: Vec<Selection>) -> SelectionSet {
    SelectionSet { selections }
}

/// A bare field; chain `with_alias`, `with_arguments` and
/// `with_selection_set` for the rest.
pub fn field(name: Name) -> Field {
    Field {
        alias: None,
        name,
        arguments: Vec::new(),
        selection_set: None,
    }
}

pub fn inline_fragment(
    type_condition: Option<Name>,
    selection_set: SelectionSet,
) -> InlineFragment {
    InlineFragment {
        type_condition,
        selection_set,
    }
}

pub fn argument(name: Name, value: Value) -> Argument {
    Argument { name, value }
}

pub fn variable(name: Name) -> Value {
    Value::Variable(name)
}

pub fn variable_definition(variable: Name, ty: Type) -> VariableDefinition {
    VariableDefinition { variable, ty }
}

pub fn named_type(name: Name) -> Type {
    Type::Named(name)
}

pub fn list_type(of_type: Type) -> Type {
    Type::List(Box::new(of_type))
}

pub fn non_null_type(of_type: Type) -> Type {
    Type::NonNull(Box::new(of_type))
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Self {
        Self::InlineFragment(fragment)
    }
}
