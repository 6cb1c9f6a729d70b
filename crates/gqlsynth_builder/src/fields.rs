//! Recursive field selection.
//!
//! Scalars and enums are selected as bare fields, fields typed as a
//! resource select only `id`, and other object/interface types are expanded
//! recursively. Expansion stops at any type already on the current
//! recursion path; such fields, like fields of unknown types, are dropped.

use gqlsynth_core::{FieldDescriptor, IntrospectedSchema, TypeDescriptor, TypeRef};
use gqlsynth_syntax::builder::{field, inline_fragment, name, selection_set};
use gqlsynth_syntax::Selection;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// The only field selected on a linked resource.
pub const ID_FIELD: &str = "id";

/// The type names entered on the way down to the current field.
///
/// An immutable linked stack: each recursion level pushes one name and
/// siblings share their parent's path, so the same type reached through
/// two unrelated branches expands in both.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisitedPath<'a> {
    head: Option<(&'a str, &'a VisitedPath<'a>)>,
}

impl<'a> VisitedPath<'a> {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self { head: None }
    }

    /// Returns a path extended by `type_name`.
    #[must_use]
    pub fn push(&'a self, type_name: &'a str) -> VisitedPath<'a> {
        VisitedPath {
            head: Some((type_name, self)),
        }
    }

    /// Returns true if `type_name` is on the path.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.iter().any(|name| name == type_name)
    }

    /// Iterates from the innermost type outwards.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let (name, parent) = current?;
            current = parent.head;
            Some(name)
        })
    }
}

/// Builds selection sets against an introspected schema.
#[derive(Debug)]
pub struct FieldSelector<'a> {
    types: FxHashMap<&'a str, &'a TypeDescriptor>,
    resources: FxHashSet<&'a str>,
}

impl<'a> FieldSelector<'a> {
    /// Indexes the schema types and resource names.
    pub fn new(schema: &'a IntrospectedSchema) -> Self {
        let mut types = FxHashMap::default();
        for ty in &schema.types {
            // First declaration wins, like a linear lookup would.
            types.entry(ty.name.as_str()).or_insert(ty);
        }
        let resources = schema.resources.iter().map(|r| r.name()).collect();

        Self { types, resources }
    }

    /// Selects `fields` starting from an empty path.
    pub fn select_fields(&self, fields: &[FieldDescriptor]) -> Vec<Selection> {
        self.select_fields_within(fields, &VisitedPath::root())
    }

    /// Selects `fields` with `path` already visited.
    pub fn select_fields_within(
        &self,
        fields: &[FieldDescriptor],
        path: &VisitedPath<'_>,
    ) -> Vec<Selection> {
        fields
            .iter()
            .filter_map(|descriptor| self.select_field(descriptor, path))
            .collect()
    }

    fn select_field(
        &self,
        descriptor: &FieldDescriptor,
        path: &VisitedPath<'_>,
    ) -> Option<Selection> {
        let leaf = descriptor.ty.named_type();
        if leaf.name.starts_with('_') {
            return None;
        }

        let selected = field(name(&descriptor.name));
        if !leaf.kind.is_composite() {
            return Some(selected.into());
        }

        if self.resources.contains(leaf.name) {
            let id = selection_set(vec![field(name(ID_FIELD)).into()]);
            return Some(selected.with_selection_set(id).into());
        }

        let Some(linked) = self.types.get(leaf.name).copied() else {
            trace!(field = %descriptor.name, ty = leaf.name, "dropping field of unknown type");
            return None;
        };
        if path.contains(&linked.name) {
            trace!(field = %descriptor.name, ty = leaf.name, "dropping field closing a cycle");
            return None;
        }

        let nested = path.push(&linked.name);
        let mut selections = self.build_fragments(linked.possible_types(), &nested);
        selections.extend(self.select_fields_within(linked.fields(), &nested));

        Some(selected.with_selection_set(selection_set(selections)).into())
    }

    /// One inline fragment per possible type found in the schema.
    fn build_fragments(
        &self,
        possible_types: &[TypeRef],
        path: &VisitedPath<'_>,
    ) -> Vec<Selection> {
        possible_types
            .iter()
            .filter_map(|possible| {
                let leaf = possible.named_type();
                let linked = self.types.get(leaf.name).copied()?;
                let fields = self.select_fields_within(linked.fields(), path);
                Some(inline_fragment(Some(name(&linked.name)), selection_set(fields)).into())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlsynth_core::{Resource, TypeKind};
    use gqlsynth_syntax::format_selection;

    fn scalar(field_name: &str, type_name: &str) -> FieldDescriptor {
        FieldDescriptor::new(field_name, TypeRef::scalar(type_name))
    }

    fn object(field_name: &str, type_name: &str) -> FieldDescriptor {
        FieldDescriptor::new(field_name, TypeRef::object(type_name))
    }

    fn schema(types: Vec<TypeDescriptor>) -> IntrospectedSchema {
        IntrospectedSchema::new(
            types,
            vec![Resource::new(TypeDescriptor::object("resourceType", vec![]))],
        )
    }

    fn printed(selections: &[Selection]) -> Vec<String> {
        selections.iter().map(format_selection).collect()
    }

    fn resource_fields(linked: &[&str]) -> Vec<FieldDescriptor> {
        let mut fields = vec![scalar("id", "ID"), scalar("foo1", "_internalField")];
        fields.extend(linked.iter().map(|field_name| object(field_name, "linkedType")));
        fields.push(object("resource", "resourceType"));
        fields
    }

    #[test]
    fn test_build_fields() {
        let schema = schema(vec![TypeDescriptor::object("linkedType", vec![scalar("id", "ID")])]);
        let selector = FieldSelector::new(&schema);

        assert_eq!(
            printed(&selector.select_fields(&resource_fields(&["linked"]))),
            ["id", "linked {\n  id\n}", "resource {\n  id\n}"]
        );
    }

    #[test]
    fn test_self_reference_is_cut() {
        let cyclic = schema(vec![TypeDescriptor::object(
            "linkedType",
            vec![scalar("id", "ID"), object("child", "linkedType")],
        )]);
        let truncated = schema(vec![TypeDescriptor::object(
            "linkedType",
            vec![scalar("id", "ID")],
        )]);
        let fields = resource_fields(&["linked"]);

        let from_cyclic = FieldSelector::new(&cyclic).select_fields(&fields);
        let from_truncated = FieldSelector::new(&truncated).select_fields(&fields);

        assert_eq!(from_cyclic, from_truncated);
        assert_eq!(
            printed(&from_cyclic),
            ["id", "linked {\n  id\n}", "resource {\n  id\n}"]
        );
    }

    #[test]
    fn test_same_type_siblings_both_expand() {
        let schema = schema(vec![TypeDescriptor::object("linkedType", vec![scalar("id", "ID")])]);
        let selector = FieldSelector::new(&schema);

        assert_eq!(
            printed(&selector.select_fields(&resource_fields(&["linked", "anotherLinked"]))),
            [
                "id",
                "linked {\n  id\n}",
                "anotherLinked {\n  id\n}",
                "resource {\n  id\n}"
            ]
        );
    }

    #[test]
    fn test_resource_selected_by_id_only() {
        let schema = IntrospectedSchema::new(
            vec![],
            vec![Resource::new(TypeDescriptor::object(
                "Author",
                vec![scalar("id", "ID"), scalar("name", "String")],
            ))],
        );
        let selector = FieldSelector::new(&schema);
        let fields = vec![FieldDescriptor::new(
            "authors",
            TypeRef::non_null(TypeRef::list(TypeRef::object("Author"))),
        )];

        assert_eq!(printed(&selector.select_fields(&fields)), ["authors {\n  id\n}"]);
    }

    #[test]
    fn test_mutual_recursion_terminates() {
        let schema = schema(vec![
            TypeDescriptor::object("A", vec![scalar("id", "ID"), object("b", "B")]),
            TypeDescriptor::object("B", vec![scalar("id", "ID"), object("a", "A")]),
        ]);
        let selector = FieldSelector::new(&schema);

        assert_eq!(
            printed(&selector.select_fields(&[object("a", "A")])),
            ["a {\n  id\n  b {\n    id\n  }\n}"]
        );
    }

    #[test]
    fn test_path_guard_is_per_branch() {
        let schema = schema(vec![
            TypeDescriptor::object("A", vec![scalar("id", "ID"), object("b", "B")]),
            TypeDescriptor::object("B", vec![scalar("id", "ID")]),
        ]);
        let selector = FieldSelector::new(&schema);

        assert_eq!(
            printed(&selector.select_fields(&[object("x", "A"), object("y", "B")])),
            ["x {\n  id\n  b {\n    id\n  }\n}", "y {\n  id\n}"]
        );
    }

    #[test]
    fn test_unknown_and_internal_types_are_dropped() {
        let schema = schema(vec![]);
        let selector = FieldSelector::new(&schema);
        let fields = vec![
            object("missing", "NotInSchema"),
            object("meta", "_Meta"),
            FieldDescriptor::new("status", TypeRef::named(TypeKind::Enum, "Status")),
        ];

        assert_eq!(printed(&selector.select_fields(&fields)), ["status"]);
    }

    #[test]
    fn test_union_reference_is_selected_bare() {
        let schema = schema(vec![TypeDescriptor::union(
            "SearchResult",
            vec![TypeRef::object("A")],
        )]);
        let selector = FieldSelector::new(&schema);
        let fields = vec![FieldDescriptor::new(
            "result",
            TypeRef::named(TypeKind::Union, "SearchResult"),
        )];

        assert_eq!(printed(&selector.select_fields(&fields)), ["result"]);
    }

    #[test]
    fn test_interface_expands_possible_types() {
        let schema = schema(vec![
            TypeDescriptor::interface(
                "Node",
                vec![scalar("id", "ID")],
                vec![TypeRef::object("Post"), TypeRef::object("Ghost")],
            ),
            TypeDescriptor::object(
                "Post",
                vec![scalar("id", "ID"), scalar("title", "String"), object("parent", "Node")],
            ),
        ]);
        let selector = FieldSelector::new(&schema);
        let fields = vec![FieldDescriptor::new(
            "node",
            TypeRef::named(TypeKind::Interface, "Node"),
        )];

        let selections = selector.select_fields(&fields);
        insta::assert_snapshot!(format_selection(&selections[0]), @r###"
        node {
          ... on Post {
            id
            title
          }
          id
        }
        "###);
    }

    #[test]
    fn test_visited_path() {
        let root = VisitedPath::root();
        let a = root.push("A");
        let ab = a.push("B");

        assert!(!root.contains("A"));
        assert!(a.contains("A"));
        assert!(!a.contains("B"));
        assert!(ab.contains("A") && ab.contains("B"));
        assert_eq!(ab.iter().collect::<Vec<_>>(), ["B", "A"]);
    }

    #[test]
    fn test_preexisting_path_blocks_expansion() {
        let schema = schema(vec![TypeDescriptor::object("linkedType", vec![scalar("id", "ID")])]);
        let selector = FieldSelector::new(&schema);
        let root = VisitedPath::root();
        let path = root.push("linkedType");

        assert!(selector
            .select_fields_within(&[object("linked", "linkedType")], &path)
            .is_empty());
    }
}
