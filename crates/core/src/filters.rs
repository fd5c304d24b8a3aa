//! Filter sets carried by a single inbound request.
//!
//! A [`FilterSet`] is a read-only view over the optional filter values a
//! request asked for: a mapping from every recognized [`FilterName`] to an
//! optional string. A name mapping to `None` means "not requested"; the map
//! always covers the full vocabulary so creators can look up any name
//! without a presence check.
//!
//! Normalization happens here and nowhere else: integers become their
//! decimal string form, enum-like inputs become their canonical lowercase
//! token. The decorator chain downstream treats every value as an opaque
//! string.

use std::collections::BTreeMap;

use crate::models::{Priority, TodoKind, TodoStatus, UserRole};

// =============================================================================
// Filter Vocabulary
// =============================================================================

/// The fixed, closed vocabulary of query parameters the gateway can emit.
///
/// Keeping this a closed enum (rather than free-form strings) makes
/// "forgot to register a creator for a name" unrepresentable at the call
/// sites that build filter maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterName {
    Limit,
    Cursor,
    After,
    Before,
    Status,
    Priority,
    Role,
    Name,
    Type,
}

impl FilterName {
    /// Every recognized name, in the order creators are registered.
    pub const ALL: [FilterName; 9] = [
        FilterName::Limit,
        FilterName::Cursor,
        FilterName::After,
        FilterName::Before,
        FilterName::Status,
        FilterName::Priority,
        FilterName::Role,
        FilterName::Name,
        FilterName::Type,
    ];

    /// Query-string spelling of the parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterName::Limit => "limit",
            FilterName::Cursor => "cursor",
            FilterName::After => "after",
            FilterName::Before => "before",
            FilterName::Status => "status",
            FilterName::Priority => "priority",
            FilterName::Role => "role",
            FilterName::Name => "name",
            FilterName::Type => "type",
        }
    }
}

impl std::fmt::Display for FilterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from every recognized filter name to an optional value.
pub type FilterMap = BTreeMap<FilterName, Option<String>>;

/// A filter map with every recognized name present and absent-valued.
fn empty_filter_map() -> FilterMap {
    FilterName::ALL.iter().map(|name| (*name, None)).collect()
}

// =============================================================================
// Filter Sets
// =============================================================================

/// Read-only view of the optional filter values a request carries.
///
/// Implementations are built once per inbound request from typed request
/// parameters, are immutable afterwards, and must produce a map covering
/// the whole vocabulary (inapplicable names map to `None`).
pub trait FilterSet: Send + Sync {
    fn filters(&self) -> FilterMap;
}

/// Pagination filters shared by every list query.
#[derive(Debug, Clone, Default)]
pub struct PageFilters {
    pub limit: Option<i32>,
    pub cursor: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl PageFilters {
    /// Fill the pagination names of `map` from this shape.
    fn fill(&self, map: &mut FilterMap) {
        map.insert(FilterName::Limit, self.limit.map(|n| n.to_string()));
        map.insert(FilterName::Cursor, self.cursor.clone());
        map.insert(FilterName::After, self.after.clone());
        map.insert(FilterName::Before, self.before.clone());
    }
}

impl FilterSet for PageFilters {
    fn filters(&self) -> FilterMap {
        let mut map = empty_filter_map();
        self.fill(&mut map);
        map
    }
}

/// Filters accepted by todo list queries.
#[derive(Debug, Clone, Default)]
pub struct TodoFilters {
    pub page: PageFilters,
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub kind: Option<TodoKind>,
}

impl FilterSet for TodoFilters {
    fn filters(&self) -> FilterMap {
        let mut map = empty_filter_map();
        self.page.fill(&mut map);
        map.insert(
            FilterName::Status,
            self.status.map(|s| s.as_str().to_string()),
        );
        map.insert(
            FilterName::Priority,
            self.priority.map(|p| p.as_str().to_string()),
        );
        map.insert(FilterName::Type, self.kind.map(|k| k.as_str().to_string()));
        map
    }
}

/// Filters accepted by user list queries.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub page: PageFilters,
    pub role: Option<UserRole>,
}

impl FilterSet for UserFilters {
    fn filters(&self) -> FilterMap {
        let mut map = empty_filter_map();
        self.page.fill(&mut map);
        map.insert(FilterName::Role, self.role.map(|r| r.as_str().to_string()));
        map
    }
}

/// Filters accepted by list queries.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub page: PageFilters,
    pub name: Option<String>,
}

impl FilterSet for ListFilters {
    fn filters(&self) -> FilterMap {
        let mut map = empty_filter_map();
        self.page.fill(&mut map);
        map.insert(FilterName::Name, self.name.clone());
        map
    }
}
