//! Call-site arguments and variable definitions.
//!
//! Both lists keep only the declared arguments whose variable is defined,
//! and both follow the declaration order of the arguments.

use gqlsynth_core::{InputValue, Variables};
use gqlsynth_syntax::builder::{
    argument, list_type, name, named_type, non_null_type, variable, variable_definition,
};
use gqlsynth_syntax::{Argument, Type, VariableDefinition};

fn supplied<'a>(
    args: &'a [InputValue],
    variables: &'a Variables,
) -> impl Iterator<Item = &'a InputValue> {
    args.iter().filter(|arg| variables.is_defined(&arg.name))
}

/// Binds each supplied argument to the variable of the same name
/// (`foo: $foo`).
pub fn build_call_arguments(args: &[InputValue], variables: &Variables) -> Vec<Argument> {
    supplied(args, variables)
        .map(|arg| argument(name(&arg.name), variable(name(&arg.name))))
        .collect()
}

/// Declares each supplied argument as an operation variable
/// (`$foo: Int!`).
pub fn build_variable_definitions(
    args: &[InputValue],
    variables: &Variables,
) -> Vec<VariableDefinition> {
    supplied(args, variables)
        .map(|arg| variable_definition(name(&arg.name), argument_type(arg)))
        .collect()
}

/// Returns the variable type declared for an argument.
///
/// Only one level of list and nullability is kept: `[T!]`, `[T]`, `T!`
/// or `T`, where `T` is the named leaf.
pub fn argument_type(arg: &InputValue) -> Type {
    let leaf = named_type(name(arg.ty.named_type().name));

    match (arg.ty.is_list(), arg.ty.is_required()) {
        (true, true) => list_type(non_null_type(leaf)),
        (true, false) => list_type(leaf),
        (false, true) => non_null_type(leaf),
        (false, false) => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlsynth_core::TypeRef;
    use serde_json::{json, Value};

    fn signatures() -> Vec<InputValue> {
        vec![
            InputValue::new("foo", TypeRef::non_null(TypeRef::scalar("Int"))),
            InputValue::new("barId", TypeRef::scalar("ID")),
            InputValue::new(
                "barIds",
                TypeRef::list(TypeRef::non_null(TypeRef::scalar("ID"))),
            ),
            InputValue::new("bar", TypeRef::scalar("String")),
        ]
    }

    fn printed_arguments(args: &[Argument]) -> Vec<String> {
        args.iter()
            .map(|arg| {
                let gqlsynth_syntax::Value::Variable(var) = &arg.value;
                format!("{}: ${}", arg.name, var)
            })
            .collect()
    }

    fn printed_definitions(defs: &[VariableDefinition]) -> Vec<String> {
        defs.iter()
            .map(|def| format!("${}: {}", def.variable, def.ty))
            .collect()
    }

    #[test]
    fn test_arg_type() {
        let cases = [
            (TypeRef::scalar("foo"), "foo"),
            (TypeRef::non_null(TypeRef::scalar("ID")), "ID!"),
            (TypeRef::list(TypeRef::scalar("ID")), "[ID]"),
            (
                TypeRef::list(TypeRef::non_null(TypeRef::scalar("ID"))),
                "[ID!]",
            ),
            (
                TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::scalar("ID")))),
                "[ID!]",
            ),
        ];

        for (ty, expected) in cases {
            assert_eq!(argument_type(&InputValue::new("arg", ty)).to_string(), expected);
        }
    }

    #[test]
    fn test_no_declared_arguments() {
        let vars = Variables::new().with("foo", "foo_value");
        assert!(build_call_arguments(&[], &vars).is_empty());
        assert!(build_variable_definitions(&[], &vars).is_empty());
    }

    #[test]
    fn test_call_arguments_filtered() {
        let vars = Variables::new().with("foo", "foo_value");
        let args = build_call_arguments(&signatures(), &vars);
        assert_eq!(printed_arguments(&args), ["foo: $foo"]);
    }

    #[test]
    fn test_variable_definitions_filtered() {
        let vars = Variables::new()
            .with("foo", "foo_value")
            .with("barId", 100)
            .with("barIds", json!([101, 102]));
        let defs = build_variable_definitions(&signatures(), &vars);
        assert_eq!(
            printed_definitions(&defs),
            ["$foo: Int!", "$barId: ID", "$barIds: [ID!]"]
        );
    }

    #[test]
    fn test_declaration_order_wins_over_variable_order() {
        let vars = Variables::new()
            .with("barIds", json!([1]))
            .with("unknown", true)
            .with("foo", 1);
        let args = build_call_arguments(&signatures(), &vars);
        let defs = build_variable_definitions(&signatures(), &vars);

        assert_eq!(printed_arguments(&args), ["foo: $foo", "barIds: $barIds"]);
        assert_eq!(printed_definitions(&defs), ["$foo: Int!", "$barIds: [ID!]"]);
    }

    #[test]
    fn test_undefined_is_skipped_but_null_is_kept() {
        let mut vars = Variables::new().with("barId", Value::Null);
        vars.insert_undefined("foo");
        let args = build_call_arguments(&signatures(), &vars);

        assert_eq!(printed_arguments(&args), ["barId: $barId"]);
    }
}
