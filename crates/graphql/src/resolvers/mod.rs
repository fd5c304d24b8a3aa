//! Resolvers bridging the GraphQL schema to the REST service.
//!
//! Every resolver follows the same shape: build a filter set from its
//! arguments, let the decorator registry compose the request URL, perform
//! the REST call, translate the response, and derive the page cursor
//! window for list results.

pub mod list;
pub mod todo;
pub mod user;

use std::sync::Arc;

use async_graphql::{Context, Result};
use serde::de::DeserializeOwned;

use portico_core::filters::{FilterSet, PageFilters};
use portico_core::pagination::build_page_info;
use portico_rest::RequestContext;

use crate::context::GatewayContext;
use crate::errors::IntoGqlError;
use crate::types::{CursorId, Page, PageInfo};

pub use list::{ListMutation, ListQuery};
pub use todo::{TodoMutation, TodoQuery};
pub use user::{UserMutation, UserQuery};

/// The per-request context, defaulting to "no token" when the transport
/// layer injected none.
pub(crate) fn request_context(ctx: &Context<'_>) -> RequestContext {
    ctx.data_opt::<RequestContext>().cloned().unwrap_or_default()
}

/// Pagination filters from the common resolver arguments.
pub(crate) fn page_filters(
    limit: Option<i32>,
    cursor: Option<String>,
    after: Option<String>,
    before: Option<String>,
) -> PageFilters {
    PageFilters {
        limit,
        cursor,
        after,
        before,
    }
}

/// Fetch a list-shaped resource and assemble its page.
pub(crate) async fn fetch_page<M, G>(
    ctx: &Context<'_>,
    path: &str,
    filters: &dyn FilterSet,
) -> Result<Page<G>>
where
    M: DeserializeOwned,
    G: From<M> + CursorId + async_graphql::OutputType,
{
    let gateway = ctx.data::<Arc<GatewayContext>>()?;
    let rctx = request_context(ctx);

    let url = match gateway.registry.create_url_builder(path, Some(filters)) {
        Some(chain) => chain
            .build_url(&gateway.rest_url)
            .map_err(IntoGqlError::into_gql)?,
        // No filtering requested: the bare resource path is the URL.
        None => format!("{}{}", gateway.rest_url, path),
    };

    let models: Vec<M> = gateway
        .client
        .get_translated(&rctx, &url)
        .await
        .map_err(IntoGqlError::into_gql)?
        .into_option()
        .unwrap_or_default();

    let data: Vec<G> = models.into_iter().map(G::from).collect();
    let page_info = build_page_info(&data, |g| g.cursor_id().to_string()).map(PageInfo::from);

    Ok(Page {
        total_count: data.len() as i32,
        data,
        page_info,
    })
}

/// Fetch a single resource by path. `Ok(None)` means the REST service
/// answered 404.
pub(crate) async fn fetch_one<M, G>(ctx: &Context<'_>, path: &str) -> Result<Option<G>>
where
    M: DeserializeOwned,
    G: From<M>,
{
    let gateway = ctx.data::<Arc<GatewayContext>>()?;
    let rctx = request_context(ctx);

    let url = format!("{}{}", gateway.rest_url, path);
    let translated = gateway
        .client
        .get_translated::<M>(&rctx, &url)
        .await
        .map_err(IntoGqlError::into_gql)?;

    Ok(translated.into_option().map(G::from))
}
