//! User queries, mutations and field resolvers.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Object, Result};
use tracing::debug;

use portico_core::filters::UserFilters;
use portico_core::{models, paths};

use crate::context::GatewayContext;
use crate::errors::IntoGqlError;
use crate::resolvers::{fetch_one, fetch_page, page_filters, request_context};
use crate::types::{DeleteUserPayload, Page, Todo, User, UserRoleFilterInput};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// List users with pagination and role filtering.
    async fn users(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
        filter: Option<UserRoleFilterInput>,
    ) -> Result<Page<User>> {
        debug!("getting users in user resolver");

        let filters = UserFilters {
            page: page_filters(limit, cursor, after, before),
            role: filter.and_then(|f| f.role).map(Into::into),
        };
        fetch_page::<models::User, User>(ctx, paths::USERS, &filters).await
    }

    /// Get a user by id. Null when no such user exists.
    async fn user(&self, ctx: &Context<'_>, id: String) -> Result<Option<User>> {
        debug!(id = %id, "getting user in user resolver");

        fetch_one::<models::User, User>(ctx, &format!("{}/{}", paths::USERS, id)).await
    }
}

#[ComplexObject]
impl User {
    /// Todos assigned to this user.
    async fn assigned_to(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
    ) -> Result<Page<Todo>> {
        debug!(user = %self.id, "getting todos assigned to user");

        let filters = page_filters(limit, cursor, after, before);
        let path = format!("{}/{}{}", paths::USERS, self.id, paths::TODOS);
        fetch_page::<models::Todo, Todo>(ctx, &path, &filters).await
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Delete a user. Answers with `success: false`, not an error, when
    /// the user does not exist.
    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> Result<DeleteUserPayload> {
        debug!(id = %id, "deleting user in user resolver");

        let user = fetch_one::<models::User, User>(ctx, &format!("{}/{}", paths::USERS, id)).await?;
        let Some(user) = user else {
            return Ok(DeleteUserPayload {
                user: None,
                success: false,
            });
        };

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);
        let url = format!("{}{}/{}", gateway.rest_url, paths::USERS, id);
        let response = gateway
            .client
            .delete(&rctx, &url)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(DeleteUserPayload {
            success: response.status().is_success(),
            user: Some(user),
        })
    }
}
