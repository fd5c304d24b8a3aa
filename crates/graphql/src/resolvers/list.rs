//! List queries, mutations and field resolvers.

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Object, Result};
use tracing::debug;

use portico_core::filters::ListFilters;
use portico_core::{models, paths};
use portico_rest::translate;

use crate::context::GatewayContext;
use crate::errors::IntoGqlError;
use crate::resolvers::{fetch_one, fetch_page, page_filters, request_context};
use crate::types::{
    CollaboratorInput, CollaboratorPayload, CreateListInput, DeleteListPayload, List,
    ListsFilterInput, Page, Todo, TodosFilterInput, User,
};

#[derive(Default)]
pub struct ListQuery;

#[Object]
impl ListQuery {
    /// List todo lists with pagination and name filtering.
    async fn lists(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
        filter: Option<ListsFilterInput>,
    ) -> Result<Page<List>> {
        debug!("getting lists in list resolver");

        let filters = ListFilters {
            page: page_filters(limit, cursor, after, before),
            name: filter.and_then(|f| f.name),
        };
        fetch_page::<models::List, List>(ctx, paths::LISTS, &filters).await
    }

    /// Get a list by id. Null when no such list exists.
    async fn list(&self, ctx: &Context<'_>, id: String) -> Result<Option<List>> {
        debug!(id = %id, "getting list in list resolver");

        fetch_one::<models::List, List>(ctx, &format!("{}/{}", paths::LISTS, id)).await
    }
}

#[ComplexObject]
impl List {
    /// Owner of the list.
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        debug!(list = %self.id, "getting list owner");

        let path = format!("{}/{}{}", paths::LISTS, self.id, paths::OWNER);
        fetch_one::<models::User, User>(ctx, &path).await
    }

    /// Users collaborating on the list.
    async fn collaborators(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
    ) -> Result<Page<User>> {
        debug!(list = %self.id, "getting list collaborators");

        let filters = page_filters(limit, cursor, after, before);
        let path = format!("{}/{}{}", paths::LISTS, self.id, paths::COLLABORATORS);
        fetch_page::<models::User, User>(ctx, &path, &filters).await
    }

    /// Todos belonging to the list.
    async fn todos(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        cursor: Option<String>,
        after: Option<String>,
        before: Option<String>,
        filter: Option<TodosFilterInput>,
    ) -> Result<Page<Todo>> {
        debug!(list = %self.id, "getting list todos");

        let filter = filter.unwrap_or_default();
        let filters = portico_core::filters::TodoFilters {
            page: page_filters(limit, cursor, after, before),
            status: filter.status.map(Into::into),
            priority: filter.priority.map(Into::into),
            kind: filter.kind.map(Into::into),
        };
        let path = format!("{}/{}{}", paths::LISTS, self.id, paths::TODOS);
        fetch_page::<models::Todo, Todo>(ctx, &path, &filters).await
    }
}

#[derive(Default)]
pub struct ListMutation;

#[Object]
impl ListMutation {
    /// Create a todo list.
    async fn create_list(
        &self,
        ctx: &Context<'_>,
        input: CreateListInput,
    ) -> Result<Option<List>> {
        debug!("creating list in list resolver");

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);

        let body = models::CreateList {
            name: input.name,
            description: input.description,
        };

        let url = format!("{}{}", gateway.rest_url, paths::LISTS);
        let response = gateway
            .client
            .post(&rctx, &url, &body)
            .await
            .map_err(IntoGqlError::into_gql)?;
        let created = translate::<models::List>(response)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(created.into_option().map(List::from))
    }

    /// Delete a list. Answers with `success: false`, not an error, when
    /// the list does not exist.
    async fn delete_list(&self, ctx: &Context<'_>, id: String) -> Result<DeleteListPayload> {
        debug!(id = %id, "deleting list in list resolver");

        let list = fetch_one::<models::List, List>(ctx, &format!("{}/{}", paths::LISTS, id)).await?;
        let Some(list) = list else {
            return Ok(DeleteListPayload {
                list: None,
                success: false,
            });
        };

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);
        let url = format!("{}{}/{}", gateway.rest_url, paths::LISTS, id);
        let response = gateway
            .client
            .delete(&rctx, &url)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(DeleteListPayload {
            success: response.status().is_success(),
            list: Some(list),
        })
    }

    /// Add a collaborator to a list.
    async fn add_collaborator(
        &self,
        ctx: &Context<'_>,
        input: CollaboratorInput,
    ) -> Result<CollaboratorPayload> {
        debug!(list = %input.list_id, "adding collaborator in list resolver");

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);

        let body = models::AddCollaborator {
            user_id: input.user_id.clone(),
        };
        let url = format!(
            "{}{}/{}{}",
            gateway.rest_url,
            paths::LISTS,
            input.list_id,
            paths::COLLABORATORS
        );
        let response = gateway
            .client
            .post(&rctx, &url, &body)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(CollaboratorPayload {
            success: response.status().is_success(),
            list_id: input.list_id,
            user_id: input.user_id,
        })
    }

    /// Remove a collaborator from a list.
    async fn remove_collaborator(
        &self,
        ctx: &Context<'_>,
        list_id: String,
        user_id: String,
    ) -> Result<CollaboratorPayload> {
        debug!(list = %list_id, "removing collaborator in list resolver");

        let gateway = ctx.data::<Arc<GatewayContext>>()?;
        let rctx = request_context(ctx);

        let url = format!(
            "{}{}/{}{}/{}",
            gateway.rest_url,
            paths::LISTS,
            list_id,
            paths::COLLABORATORS,
            user_id
        );
        let response = gateway
            .client
            .delete(&rctx, &url)
            .await
            .map_err(IntoGqlError::into_gql)?;

        Ok(CollaboratorPayload {
            success: response.status().is_success(),
            list_id,
            user_id,
        })
    }
}
