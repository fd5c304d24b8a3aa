//! REST adapter for the portico gateway.
//!
//! Everything that touches the wire on the way to the todo-service REST
//! API lives here: the authenticated [`RestClient`], the
//! status-to-outcome [`translate`] function, and the upstream
//! [`HealthChecker`]. The crate interprets responses but holds no domain
//! logic of its own — URL assembly and pagination stay in `portico-core`.

mod auth;
mod client;
mod health;
mod translate;

pub use auth::{BearerAuthDecorator, RequestContext, RequestDecorator};
pub use client::RestClient;
pub use health::HealthChecker;
pub use translate::{translate, Translated};
