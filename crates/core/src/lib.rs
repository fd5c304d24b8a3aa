//! Core domain layer for the portico gateway.
//!
//! This crate contains the filter model, the URL builder chain, the
//! pagination window builder, and the gateway error taxonomy. It is the
//! innermost layer with no dependency on HTTP or GraphQL machinery: the
//! only I/O in the whole pipeline — the actual REST call — happens in the
//! adapter crates sitting above.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     portico (binary)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │        portico-graphql        │        portico-rest         │
//! │      (schema, resolvers)      │   (client, translation)     │
//! ├───────────────────────────────┴─────────────────────────────┤
//! │                    portico-core  ← YOU ARE HERE             │
//! │          (filters, url chain, pagination, errors)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`filters`] - Filter vocabulary and per-request filter sets
//! - [`query`] - URL builder chain and the creator registry
//! - [`pagination`] - Cursor window derivation for returned pages
//! - [`models`] - DTOs exchanged with the REST service
//! - [`error`] - Gateway error taxonomy
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Request Flow
//!
//! 1. A resolver builds a [`filters::FilterSet`] from typed request input
//! 2. The [`query::DecoratorRegistry`] composes a builder chain for it
//! 3. The chain is invoked with the REST server address to produce a URL
//! 4. The surrounding adapter performs the REST call and translates the
//!    response
//! 5. For list-shaped results, [`pagination::build_page_info`] derives the
//!    cursor window of the returned page

pub mod error;
pub mod filters;
pub mod metrics;
pub mod models;
pub mod pagination;
pub mod paths;
pub mod query;
