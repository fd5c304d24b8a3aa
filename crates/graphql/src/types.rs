//! GraphQL type definitions and conversions from the domain models.

use async_graphql::{Enum, InputObject, OutputType, SimpleObject};
use chrono::{DateTime, Utc};

use portico_core::models;
use portico_core::pagination;

// -----------------------------------------------------------------------------
// Enums
// -----------------------------------------------------------------------------

/// Macro pairing a GraphQL enum with its domain counterpart.
macro_rules! gql_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
        pub enum $name {
            $($variant,)+
        }

        impl From<$name> for models::$name {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => models::$name::$variant,)+
                }
            }
        }

        impl From<models::$name> for $name {
            fn from(value: models::$name) -> Self {
                match value {
                    $(models::$name::$variant => $name::$variant,)+
                }
            }
        }
    };
}

gql_enum!(
    /// Lifecycle state of a todo.
    TodoStatus { Open, InProgress, Done }
);

gql_enum!(
    /// Priority of a todo.
    Priority { VeryLow, Low, Medium, High, VeryHigh }
);

gql_enum!(
    /// Role a user holds within a list.
    UserRole { Admin, Writer, Reader }
);

gql_enum!(
    /// Due-date based todo kind used for filtering.
    TodoKind { Active, Expired }
);

// -----------------------------------------------------------------------------
// Objects
// -----------------------------------------------------------------------------

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

impl From<models::User> for User {
    fn from(user: models::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub list_id: String,
    pub status: TodoStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    #[graphql(skip)]
    pub assigned_to: Option<String>,
}

impl From<models::Todo> for Todo {
    fn from(todo: models::Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
            description: todo.description,
            list_id: todo.list_id,
            status: todo.status.into(),
            priority: todo.priority.into(),
            created_at: todo.created_at,
            last_updated: todo.last_updated,
            due_date: todo.due_date,
            assigned_to: todo.assigned_to,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct List {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[graphql(skip)]
    pub owner_id: String,
}

impl From<models::List> for List {
    fn from(list: models::List) -> Self {
        Self {
            id: list.id,
            name: list.name,
            description: list.description,
            created_at: list.created_at,
            last_updated: list.last_updated,
            owner_id: list.owner,
        }
    }
}

// -----------------------------------------------------------------------------
// Pagination
// -----------------------------------------------------------------------------

/// Cursor window of the returned page.
#[derive(SimpleObject, Clone)]
pub struct PageInfo {
    pub start_cursor: String,
    pub end_cursor: String,
}

impl From<pagination::PageInfo> for PageInfo {
    fn from(info: pagination::PageInfo) -> Self {
        Self {
            start_cursor: info.start_cursor,
            end_cursor: info.end_cursor,
        }
    }
}

/// A page of results. `page_info` is null for an empty page.
#[derive(SimpleObject)]
#[graphql(concrete(name = "UserPage", params(User)))]
#[graphql(concrete(name = "TodoPage", params(Todo)))]
#[graphql(concrete(name = "ListPage", params(List)))]
pub struct Page<T: OutputType> {
    pub data: Vec<T>,
    pub page_info: Option<PageInfo>,
    pub total_count: i32,
}

/// Identifier used as an element's pagination cursor.
pub(crate) trait CursorId {
    fn cursor_id(&self) -> &str;
}

impl CursorId for User {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

impl CursorId for Todo {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

impl CursorId for List {
    fn cursor_id(&self) -> &str {
        &self.id
    }
}

// -----------------------------------------------------------------------------
// Inputs
// -----------------------------------------------------------------------------

#[derive(InputObject, Default)]
pub struct TodosFilterInput {
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub kind: Option<TodoKind>,
}

#[derive(InputObject, Default)]
pub struct UserRoleFilterInput {
    pub role: Option<UserRole>,
}

#[derive(InputObject, Default)]
pub struct ListsFilterInput {
    pub name: Option<String>,
}

#[derive(InputObject)]
pub struct CreateTodoInput {
    pub name: String,
    pub description: String,
    pub list_id: String,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(InputObject)]
pub struct UpdateTodoInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
}

#[derive(InputObject)]
pub struct CreateListInput {
    pub name: String,
    pub description: String,
}

#[derive(InputObject)]
pub struct CollaboratorInput {
    pub list_id: String,
    pub user_id: String,
}

// -----------------------------------------------------------------------------
// Payloads
// -----------------------------------------------------------------------------

#[derive(SimpleObject)]
pub struct DeleteUserPayload {
    pub user: Option<User>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct DeleteTodoPayload {
    pub todo: Option<Todo>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct DeleteListPayload {
    pub list: Option<List>,
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct CollaboratorPayload {
    pub list_id: String,
    pub user_id: String,
    pub success: bool,
}
