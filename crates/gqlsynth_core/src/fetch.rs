//! Data-access operation kinds.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A generic data-access request kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FetchKind {
    /// Paginated, sorted and filtered list.
    GetList,
    /// Single record by identifier.
    GetOne,
    /// Several records by identifier.
    GetMany,
    /// Records referencing another record.
    GetManyReference,
    Create,
    Update,
    Delete,
    /// Any kind outside the standard vocabulary, as an upper-case token.
    /// Build it with [`FetchKind::custom`] or by parsing.
    Custom(String),
}

/// Kinds served by the query root.
pub const QUERY_KINDS: [FetchKind; 4] = [
    FetchKind::GetList,
    FetchKind::GetOne,
    FetchKind::GetMany,
    FetchKind::GetManyReference,
];

/// Kinds served by the mutation root.
pub const MUTATION_KINDS: [FetchKind; 3] = [
    FetchKind::Create,
    FetchKind::Update,
    FetchKind::Delete,
];

impl FetchKind {
    /// All standard kinds, queries first.
    pub const ALL: [FetchKind; 7] = [
        FetchKind::GetList,
        FetchKind::GetOne,
        FetchKind::GetMany,
        FetchKind::GetManyReference,
        FetchKind::Create,
        FetchKind::Update,
        FetchKind::Delete,
    ];

    /// Parses `name` as a kind token; standard tokens give standard kinds.
    #[must_use]
    pub fn custom(name: &str) -> Self {
        match name.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }

    /// Returns the standard kind a hand-built `Custom` token stands for, or
    /// the kind itself.
    #[must_use]
    pub fn canonical(&self) -> Cow<'_, Self> {
        match self {
            Self::Custom(name) => match Self::custom(name) {
                Self::Custom(normalized) if normalized == *name => Cow::Borrowed(self),
                kind => Cow::Owned(kind),
            },
            _ => Cow::Borrowed(self),
        }
    }

    /// Returns the token for this kind (`GET_LIST`, `CREATE`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GetList => "GET_LIST",
            Self::GetOne => "GET_ONE",
            Self::GetMany => "GET_MANY",
            Self::GetManyReference => "GET_MANY_REFERENCE",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Custom(name) => name,
        }
    }

    /// Returns true if this kind is a read served by a `query` operation.
    #[must_use]
    pub fn is_query(&self) -> bool {
        QUERY_KINDS.contains(&self.canonical())
    }

    /// Returns true for the kinds answered with an `items`/`total` pair.
    #[must_use]
    pub fn is_list_like(&self) -> bool {
        matches!(
            *self.canonical(),
            Self::GetList | Self::GetMany | Self::GetManyReference
        )
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Ok(Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .unwrap_or(Self::Custom(normalized)))
    }
}

impl From<String> for FetchKind {
    fn from(s: String) -> Self {
        Self::custom(&s)
    }
}

impl From<FetchKind> for String {
    fn from(kind: FetchKind) -> Self {
        kind.as_str().to_string()
    }
}
