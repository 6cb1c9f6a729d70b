//! Read-only introspection model.
//!
//! These types follow the shape of a GraphQL introspection response so they
//! can be deserialized straight from `__schema` JSON.

use crate::fetch::FetchKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of an introspected type or type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Returns true for the two wrapper kinds (LIST, NON_NULL).
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Returns true for kinds that carry their own selectable fields.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface)
    }
}

/// A possibly wrapped type reference.
///
/// `LIST` and `NON_NULL` references wrap another reference in `of_type`;
/// every other kind is a named leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// Creates a named leaf reference.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Shorthand for a named `SCALAR` reference.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(TypeKind::Scalar, name)
    }

    /// Shorthand for a named `OBJECT` reference.
    pub fn object(name: impl Into<String>) -> Self {
        Self::named(TypeKind::Object, name)
    }

    /// Wraps a reference in `LIST`.
    #[must_use]
    pub fn list(of_type: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(of_type)),
        }
    }

    /// Wraps a reference in `NON_NULL`.
    #[must_use]
    pub fn non_null(of_type: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(of_type)),
        }
    }
}

/// An argument or input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub args: Vec<InputValue>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            ty,
        }
    }

    /// Adds declared arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<InputValue>) -> Self {
        self.args = args;
        self
    }
}

/// An introspected named type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub fields: Option<Vec<FieldDescriptor>>,
    #[serde(default)]
    pub possible_types: Option<Vec<TypeRef>>,
}

impl TypeDescriptor {
    /// Creates an object type with the given fields.
    pub fn object(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            kind: TypeKind::Object,
            name: name.into(),
            fields: Some(fields),
            possible_types: None,
        }
    }

    /// Creates an interface type.
    pub fn interface(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        possible_types: Vec<TypeRef>,
    ) -> Self {
        Self {
            kind: TypeKind::Interface,
            name: name.into(),
            fields: Some(fields),
            possible_types: Some(possible_types),
        }
    }

    /// Creates a union type.
    pub fn union(name: impl Into<String>, possible_types: Vec<TypeRef>) -> Self {
        Self {
            kind: TypeKind::Union,
            name: name.into(),
            fields: None,
            possible_types: Some(possible_types),
        }
    }

    /// Creates a scalar type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Scalar,
            name: name.into(),
            fields: None,
            possible_types: None,
        }
    }

    /// Returns the declared fields (empty for scalars, enums and unions).
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Returns the possible types (interfaces and unions only).
    #[must_use]
    pub fn possible_types(&self) -> &[TypeRef] {
        self.possible_types.as_deref().unwrap_or_default()
    }
}

/// Metadata of the root field that serves one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryType {
    pub name: String,
    #[serde(default)]
    pub args: Vec<InputValue>,
}

impl QueryType {
    pub fn new(name: impl Into<String>, args: Vec<InputValue>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl From<&FieldDescriptor> for QueryType {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name.clone(),
            args: field.args.clone(),
        }
    }
}

/// A top-level queryable entity type.
///
/// Fields of this type found elsewhere in the schema are selected by `id`
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(default)]
    pub operations: IndexMap<FetchKind, QueryType>,
}

impl Resource {
    pub fn new(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            operations: IndexMap::new(),
        }
    }

    /// Binds the root field serving a fetch kind.
    #[must_use]
    pub fn with_operation(mut self, kind: FetchKind, query_type: QueryType) -> Self {
        self.operations.insert(kind, query_type);
        self
    }

    /// Returns the resource type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ty.name
    }

    /// Returns the root field serving a fetch kind, if any.
    #[must_use]
    pub fn operation(&self, kind: &FetchKind) -> Option<&QueryType> {
        self.operations.get(&*kind.canonical())
    }
}

/// Introspected types plus the resources derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectedSchema {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl IntrospectedSchema {
    pub fn new(types: Vec<TypeDescriptor>, resources: Vec<Resource>) -> Self {
        Self { types, resources }
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Looks up a resource by type name.
    #[must_use]
    pub fn find_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name() == name)
    }

    /// Returns true if `name` is a registered resource type.
    #[must_use]
    pub fn is_resource(&self, name: &str) -> bool {
        self.find_resource(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_type_ref() {
        let json = r#"{
            "kind": "NON_NULL",
            "name": null,
            "ofType": { "kind": "LIST", "name": null, "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } }
        }"#;
        let ty: TypeRef = serde_json::from_str(json).unwrap();

        assert_eq!(
            ty,
            TypeRef::non_null(TypeRef::list(TypeRef::scalar("ID")))
        );
    }

    #[test]
    fn test_deserialize_type_without_fields() {
        let json = r#"{ "kind": "SCALAR", "name": "Date", "fields": null }"#;
        let ty: TypeDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(ty.kind, TypeKind::Scalar);
        assert!(ty.fields().is_empty());
        assert!(ty.possible_types().is_empty());
    }

    #[test]
    fn test_resource_lookup() {
        let schema = IntrospectedSchema::new(
            vec![TypeDescriptor::object("Comment", vec![])],
            vec![Resource::new(TypeDescriptor::object("Post", vec![]))
                .with_operation(FetchKind::GetOne, QueryType::new("Post", vec![]))],
        );

        assert!(schema.is_resource("Post"));
        assert!(!schema.is_resource("Comment"));
        assert!(schema.find_type("Comment").is_some());
        assert_eq!(
            schema
                .find_resource("Post")
                .and_then(|r| r.operation(&FetchKind::GetOne))
                .map(|q| q.name.as_str()),
            Some("Post")
        );
        let post = schema.find_resource("Post").unwrap();
        assert!(post
            .operation(&FetchKind::Custom("get_one".to_string()))
            .is_some());
    }

    #[test]
    fn test_query_type_from_field() {
        let field = FieldDescriptor::new("Post", TypeRef::object("Post"))
            .with_args(vec![InputValue::new("id", TypeRef::non_null(TypeRef::scalar("ID")))]);
        let query_type = QueryType::from(&field);

        assert_eq!(query_type.name, "Post");
        assert_eq!(query_type.args.len(), 1);
    }
}
