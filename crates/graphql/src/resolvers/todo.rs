//! Todo queries, mutations and field resolvers.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Object, Result};
use tracing::debug;

use portico_core::filters::TodoFilters;
use portico_core::{models, paths};
use portico_rest::translate;

use crate::context::GatewayContext;
use crate::errors::IntoGqlError;
use crate::resolvers::{fetch_one, fetch_page, page_filters, request_context};
use crate::types::{
    CreateTodoInput, DeleteTodoPayload, Page, Todo, TodosFilterInput, UpdateTodoInput, User,
};

/// Build the todo filter set shared by the todo list queries.
fn todo_filters(
    limit: Option<i32>,
    cursor: Option<String>,
    after: Option<String>,
    before: Option<String>,
    filter: Option<TodosFilterInput>,
) -> TodoFilters {
    let filter = filter.unwrap_or_default();
    TodoFilters {
        page: page_filters(limit, cursor, after, before),
        status: filter.status.map(Into::into),
        priority: filter.priority.map(Into::into),
        kind: filter.kind.map(Into::into),
    }
}

#[derive(Default)]
pub struct TodoQuery;

#[Object]
impl TodoQuery {
    /// List todos with pagination, status, priority and kind filtering.
    async fn todos(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
        filter: Option<TodosFilterInput>,
    ) -> Result<Page<Todo>> {
        debug!("getting todos in todo resolver");

        let filters = todo_filters(limit, cursor, after, before, filter);
        fetch_page::<models::Todo, Todo>(ctx, paths::TODOS, &filters).await
    }

    /// Get a todo by id. Null when no such todo exists.
    async fn todo(&self, ctx: &Context<'_>, id: String) -> Result<Option<Todo>> {
        debug!(id = %id, "getting todo in todo resolver");

        fetch_one::<models::Todo, Todo>(ctx, &format!("{}/{}", paths::TODOS, id)).await
    }
}

#[ComplexObject]
impl Todo {
    /// User the todo is assigned to, if any.
    async fn assignee(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        debug!(todo = %self.id, "getting todo assignee");

        let path = format!("{}/{}{}", paths::TODOS, self.id, paths::ASSIGNEE);
        fetch_one::<models::User, User>(ctx, &path).await
    }
}

#[derive(Default)]
pub struct TodoMutation;

#[Object]
impl TodoMutation {
    /// Create a todo in a list. Null when the target list does not exist.
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        input: CreateTodoInput,
    ) -> Result<Option<Todo>> {
        debug!("creating todo in todo resolver");

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);

        let body = models::CreateTodo {
            name: input.name,
            description: input.description,
            list_id: input.list_id,
            priority: input.priority.map(Into::into),
            due_date: input.due_date,
        };

        let url = format!("{}{}", gateway.rest_url, paths::TODOS);
        let response = gateway
            .client
            .post(&rctx, &url, &body)
            .await
            .map_err(IntoGqlError::into_gql)?;
        let created = translate::<models::Todo>(response)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(created.into_option().map(Todo::from))
    }

    /// Update fields of a todo. Null when no such todo exists.
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: String,
        input: UpdateTodoInput,
    ) -> Result<Option<Todo>> {
        debug!(id = %id, "updating todo in todo resolver");

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);

        let body = models::UpdateTodo {
            name: input.name,
            description: input.description,
            status: input.status.map(Into::into),
            priority: input.priority.map(Into::into),
            assigned_to: input.assigned_to,
        };

        let url = format!("{}{}/{}", gateway.rest_url, paths::TODOS, id);
        let response = gateway
            .client
            .patch(&rctx, &url, &body)
            .await
            .map_err(IntoGqlError::into_gql)?;
        let updated = translate::<models::Todo>(response)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(updated.into_option().map(Todo::from))
    }

    /// Delete a todo. Answers with `success: false`, not an error, when
    /// the todo does not exist.
    async fn delete_todo(&self, ctx: &Context<'_>, id: String) -> Result<DeleteTodoPayload> {
        debug!(id = %id, "deleting todo in todo resolver");

        let todo = fetch_one::<models::Todo, Todo>(ctx, &format!("{}/{}", paths::TODOS, id)).await?;
        let Some(todo) = todo else {
            return Ok(DeleteTodoPayload {
                todo: None,
                success: false,
            });
        };

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);
        let url = format!("{}{}/{}", gateway.rest_url, paths::TODOS, id);
        let response = gateway
            .client
            .delete(&rctx, &url)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(DeleteTodoPayload {
            success: response.status().is_success(),
            todo: Some(todo),
        })
    }
}
