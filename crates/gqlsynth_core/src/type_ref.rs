//! Type-reference classification.
//!
//! List detection looks through `NON_NULL` wrappers while required detection
//! looks through `LIST` wrappers. `[ID!]`, `[ID]!` and `[ID!]!` are all
//! lists that are required; only `[ID]` is a list that is not.

use crate::schema::{TypeKind, TypeRef};

/// The innermost named type of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub kind: TypeKind,
}

impl TypeRef {
    /// Strips `LIST`/`NON_NULL` wrappers and returns the named leaf.
    #[must_use]
    pub fn named_type(&self) -> NamedType<'_> {
        match (&self.of_type, self.kind.is_wrapper()) {
            (Some(inner), true) => inner.named_type(),
            _ => NamedType {
                name: self.name.as_deref().unwrap_or_default(),
                kind: self.kind,
            },
        }
    }

    /// Returns true if the reference is a list once `NON_NULL` is stripped.
    #[must_use]
    pub fn is_list(&self) -> bool {
        match (self.kind, &self.of_type) {
            (TypeKind::NonNull, Some(inner)) => inner.is_list(),
            (kind, _) => kind == TypeKind::List,
        }
    }

    /// Returns true if the reference is `NON_NULL` once `LIST` is stripped.
    #[must_use]
    pub fn is_required(&self) -> bool {
        match (self.kind, &self.of_type) {
            (TypeKind::List, Some(inner)) => inner.is_required(),
            (kind, _) => kind == TypeKind::NonNull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> TypeRef {
        TypeRef::scalar("ID")
    }

    #[test]
    fn test_named_leaf() {
        let ty = id();
        assert_eq!(
            ty.named_type(),
            NamedType {
                name: "ID",
                kind: TypeKind::Scalar
            }
        );
        assert!(!ty.is_list());
        assert!(!ty.is_required());
    }

    #[test]
    fn test_non_null() {
        let ty = TypeRef::non_null(id());
        assert!(ty.is_required());
        assert!(!ty.is_list());
        assert_eq!(ty.named_type().name, "ID");
    }

    #[test]
    fn test_list() {
        let ty = TypeRef::list(id());
        assert!(ty.is_list());
        assert!(!ty.is_required());
    }

    #[test]
    fn test_list_of_non_null() {
        let ty = TypeRef::list(TypeRef::non_null(id()));
        assert!(ty.is_list());
        assert!(ty.is_required());
        assert_eq!(ty.named_type().name, "ID");
    }

    #[test]
    fn test_non_null_list_of_nullable() {
        let ty = TypeRef::non_null(TypeRef::list(id()));
        assert!(ty.is_list());
        assert!(ty.is_required());
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(id())));
        assert!(ty.is_list());
        assert!(ty.is_required());
        assert_eq!(
            ty.named_type(),
            NamedType {
                name: "ID",
                kind: TypeKind::Scalar
            }
        );
    }

    #[test]
    fn test_named_object_kind_survives_unwrapping() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::object("Post")));
        assert_eq!(ty.named_type().kind, TypeKind::Object);
    }
}
