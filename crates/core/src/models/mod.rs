//! Domain models exchanged with the todo-service REST API.
//!
//! These models mirror the JSON shapes the REST service produces and
//! consumes. They are transport-agnostic: the GraphQL layer converts them
//! into its own object types and never serializes them directly to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerated Fields
// =============================================================================

/// Macro to generate the string-token enums used by the REST service.
///
/// Generates serde renames for the wire token, `as_str()` returning the
/// canonical lowercase token, and a `Display` implementation.
macro_rules! wire_token_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Canonical lowercase wire token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_token_enum!(
    /// Lifecycle state of a todo.
    TodoStatus {
        Open => "open",
        InProgress => "in progress",
        Done => "done",
    }
);

wire_token_enum!(
    /// Priority of a todo.
    Priority {
        VeryLow => "very low",
        Low => "low",
        Medium => "medium",
        High => "high",
        VeryHigh => "very high",
    }
);

wire_token_enum!(
    /// Role a user holds within a list.
    UserRole {
        Admin => "admin",
        Writer => "writer",
        Reader => "reader",
    }
);

wire_token_enum!(
    /// Due-date based todo kind used for filtering.
    TodoKind {
        Active => "active",
        Expired => "expired",
    }
);

// =============================================================================
// Entities
// =============================================================================

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

/// A todo item belonging to a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub list_id: String,
    pub status: TodoStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// User the todo is assigned to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// A todo list owned by a user and shared with collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

// =============================================================================
// Write Models
// =============================================================================

/// Body for `POST /todos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodo {
    pub name: String,
    pub description: String,
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Body for `PATCH /todos/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Body for `POST /lists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateList {
    pub name: String,
    pub description: String,
}

/// Body for `POST /lists/{id}/collaborators`.
#[derive(Debug, Clone, Serialize)]
pub struct AddCollaborator {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_are_lowercase() {
        assert_eq!(TodoStatus::Open.as_str(), "open");
        assert_eq!(TodoStatus::InProgress.as_str(), "in progress");
        assert_eq!(TodoStatus::Done.as_str(), "done");
    }

    #[test]
    fn test_priority_tokens_are_lowercase() {
        assert_eq!(Priority::VeryLow.as_str(), "very low");
        assert_eq!(Priority::VeryHigh.as_str(), "very high");
    }

    // Les tokens serde et as_str doivent rester identiques
    #[test]
    fn test_serde_token_matches_as_str() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in progress\"");

        let parsed: Priority = serde_json::from_str("\"very high\"").unwrap();
        assert_eq!(parsed, Priority::VeryHigh);

        let parsed: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }

    #[test]
    fn test_user_roundtrip() {
        let user = User {
            id: "id1".into(),
            email: "test1@email.com".into(),
            role: UserRole::Admin,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
