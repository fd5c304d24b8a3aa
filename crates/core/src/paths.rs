//! Resource path fragments of the todo-service REST API.

pub const LISTS: &str = "/lists";
pub const USERS: &str = "/users";
pub const TODOS: &str = "/todos";

pub const OWNER: &str = "/owner";
pub const COLLABORATORS: &str = "/collaborators";
pub const ASSIGNEE: &str = "/assignee";

pub const HEALTHZ: &str = "/healthz";
