//! Loading introspection responses and deriving resources.
//!
//! A type becomes a resource when the query root exposes both its list and
//! its single-record operation, as named by [`OperationNames`].

use crate::error::IntrospectionError;
use crate::fetch::FetchKind;
use crate::schema::{
    FieldDescriptor, IntrospectedSchema, QueryType, Resource, TypeDescriptor, TypeKind,
};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Placeholder replaced by the type name in operation-name templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// A reference to a root operation type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// The `__schema` object of an introspection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionResult {
    #[serde(default)]
    pub query_type: Option<RootTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<RootTypeRef>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl IntrospectionResult {
    /// Parses introspection JSON.
    ///
    /// Accepts a full response (`{"data": {"__schema": ...}}`), the bare
    /// `{"__schema": ...}` payload or the schema object itself.
    pub fn from_json(source: &str) -> Result<Self, IntrospectionError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Same as [`IntrospectionResult::from_json`] for an already parsed value.
    pub fn from_value(mut value: Value) -> Result<Self, IntrospectionError> {
        for key in ["data", "__schema"] {
            let inner = value.get_mut(key).map(Value::take);
            if let Some(inner) = inner {
                value = inner;
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Operation-name templates per fetch kind.
///
/// Each template contains [`NAME_PLACEHOLDER`], replaced by the resource
/// type name. Deserializing a partial map keeps the defaults for the kinds it
/// does not mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNames(IndexMap<FetchKind, String>);

impl Default for OperationNames {
    fn default() -> Self {
        Self(
            [
                (FetchKind::GetList, "all{name}s"),
                (FetchKind::GetOne, "{name}"),
                (FetchKind::GetMany, "all{name}s"),
                (FetchKind::GetManyReference, "all{name}s"),
                (FetchKind::Create, "create{name}"),
                (FetchKind::Update, "update{name}"),
                (FetchKind::Delete, "delete{name}"),
            ]
            .into_iter()
            .map(|(kind, template)| (kind, template.to_string()))
            .collect(),
        )
    }
}

impl OperationNames {
    /// Overrides the template of one kind.
    #[must_use]
    pub fn with(mut self, kind: FetchKind, template: impl Into<String>) -> Self {
        self.0.insert(kind, template.into());
        self
    }

    /// Returns the operation name for `kind` on the type `type_name`.
    #[must_use]
    pub fn resolve(&self, kind: &FetchKind, type_name: &str) -> Option<String> {
        self.0
            .get(kind)
            .map(|template| template.replace(NAME_PLACEHOLDER, type_name))
    }

    /// Iterates over the configured kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &FetchKind> {
        self.0.keys()
    }
}

impl<'de> Deserialize<'de> for OperationNames {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = IndexMap::<FetchKind, String>::deserialize(deserializer)?;
        let mut names = Self::default();
        names.0.extend(overrides);
        Ok(names)
    }
}

/// Options controlling resource derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntrospectionOptions {
    pub operation_names: OperationNames,
    /// Only these type names may become resources.
    pub include: Option<Vec<String>>,
    /// These type names never become resources.
    pub exclude: Option<Vec<String>>,
}

impl IntrospectionOptions {
    fn accepts(&self, type_name: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .map_or(true, |names| names.iter().any(|n| n == type_name));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == type_name));
        included && !excluded
    }
}

impl IntrospectedSchema {
    /// Builds the schema model from an introspection result.
    ///
    /// The query and mutation roots are removed from `types`; their fields
    /// become the operations bound to resources.
    pub fn from_introspection(
        result: IntrospectionResult,
        options: &IntrospectionOptions,
    ) -> Result<Self, IntrospectionError> {
        if options.include.is_some() && options.exclude.is_some() {
            return Err(IntrospectionError::ConflictingFilters);
        }

        let query_root = result
            .query_type
            .ok_or(IntrospectionError::MissingQueryType)?
            .name;
        let mutation_root = result.mutation_type.map(|root| root.name);
        let is_root =
            |name: &str| name == query_root || mutation_root.as_deref() == Some(name);

        let (roots, types): (Vec<_>, Vec<_>) = result
            .types
            .into_iter()
            .partition(|ty| is_root(&ty.name));
        let operations: Vec<&FieldDescriptor> =
            roots.iter().flat_map(|root| root.fields()).collect();

        let find_operation = |kind: &FetchKind, type_name: &str| {
            let name = options.operation_names.resolve(kind, type_name)?;
            operations.iter().find(|op| op.name == name).copied()
        };

        let resources: Vec<Resource> = types
            .iter()
            .filter(|ty| ty.kind == TypeKind::Object && options.accepts(&ty.name))
            .filter(|ty| {
                find_operation(&FetchKind::GetList, &ty.name).is_some()
                    && find_operation(&FetchKind::GetOne, &ty.name).is_some()
            })
            .map(|ty| {
                options
                    .operation_names
                    .kinds()
                    .filter_map(|kind| {
                        find_operation(kind, &ty.name).map(|op| (kind.clone(), QueryType::from(op)))
                    })
                    .fold(Resource::new(ty.clone()), |resource, (kind, query_type)| {
                        resource.with_operation(kind, query_type)
                    })
            })
            .collect();

        debug!(
            types = types.len(),
            operations = operations.len(),
            resources = resources.len(),
            "derived resources from introspection"
        );

        Ok(Self::new(types, resources))
    }

    /// Parses introspection JSON and derives resources in one step.
    pub fn from_json(
        source: &str,
        options: &IntrospectionOptions,
    ) -> Result<Self, IntrospectionError> {
        Self::from_introspection(IntrospectionResult::from_json(source)?, options)
    }
}
