//! URL builder chain: a base resource path wrapped by query-parameter
//! decorators.
//!
//! A chain is a singly-linked sequence of [`QueryParamsBuilder`] nodes with
//! a [`BaseUrlBuilder`] innermost and one [`CriteriaDecorator`] per query
//! parameter wrapped around it. Chains are pure: building a URL has no side
//! effects, and building twice with the same server address yields the same
//! string. Chains are assembled fresh per request and never shared.

use tracing::debug;
use url::Url;

use crate::error::GatewayResult;
use crate::filters::FilterName;

/// A node in the URL builder chain.
///
/// Given a base server address, produces a fully qualified URL string or
/// fails with a malformed-address error.
pub trait QueryParamsBuilder: Send + Sync {
    fn build_url(&self, server_address: &str) -> GatewayResult<String>;
}

// =============================================================================
// Base Builder
// =============================================================================

/// Innermost chain node: appends a fixed resource path to the server
/// address. No query parameters are added at this layer.
pub struct BaseUrlBuilder {
    resource_path: String,
}

impl BaseUrlBuilder {
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
        }
    }
}

impl QueryParamsBuilder for BaseUrlBuilder {
    fn build_url(&self, server_address: &str) -> GatewayResult<String> {
        debug!(path = %self.resource_path, "building base url");

        let mut url = Url::parse(server_address)?;

        // An address without an explicit path parses to "/"; appending to it
        // verbatim would produce a double slash.
        let joined = if url.path() == "/" {
            self.resource_path.clone()
        } else {
            format!("{}{}", url.path(), self.resource_path)
        };
        url.set_path(&joined);

        Ok(url.to_string())
    }
}

// =============================================================================
// Criteria Decorator
// =============================================================================

/// Chain node adding exactly one `key=value` query parameter to whatever
/// URL its inner builder produces.
///
/// Inserting is set-semantics on the key: a parameter already present is
/// replaced in place, so wrapping the same key twice is last-write-wins
/// with the outer decorator superseding, while distinct keys commute.
pub struct CriteriaDecorator {
    inner: Box<dyn QueryParamsBuilder>,
    name: FilterName,
    value: String,
}

impl CriteriaDecorator {
    pub fn new(
        inner: Box<dyn QueryParamsBuilder>,
        name: FilterName,
        value: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            name,
            value: value.into(),
        }
    }
}

impl QueryParamsBuilder for CriteriaDecorator {
    fn build_url(&self, server_address: &str) -> GatewayResult<String> {
        debug!(name = %self.name, "adding query criteria");

        let current = self.inner.build_url(server_address)?;
        let mut url = Url::parse(&current)?;

        let key = self.name.as_str();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            let mut replaced = false;
            for (k, v) in &pairs {
                if k == key {
                    query.append_pair(k, &self.value);
                    replaced = true;
                } else {
                    query.append_pair(k, v);
                }
            }
            if !replaced {
                query.append_pair(key, &self.value);
            }
        }

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(builder: impl QueryParamsBuilder + 'static) -> Box<dyn QueryParamsBuilder> {
        Box::new(builder)
    }

    #[test]
    fn test_base_builder_appends_resource_path() {
        let builder = BaseUrlBuilder::new("/users");
        let url = builder.build_url("http://test.com").unwrap();
        assert_eq!(url, "http://test.com/users");
    }

    #[test]
    fn test_base_builder_preserves_existing_path() {
        let builder = BaseUrlBuilder::new("/todos");
        let url = builder.build_url("http://test.com/api").unwrap();
        assert_eq!(url, "http://test.com/api/todos");
    }

    #[test]
    fn test_base_builder_rejects_malformed_address() {
        let builder = BaseUrlBuilder::new("/users");
        let err = builder.build_url("not a url").unwrap_err();
        assert!(err.to_string().contains("malformed server address"));
    }

    #[test]
    fn test_decorator_adds_single_parameter() {
        let chain = CriteriaDecorator::new(
            boxed(BaseUrlBuilder::new("/users")),
            FilterName::Limit,
            "200",
        );
        let url = chain.build_url("http://test.com").unwrap();
        assert_eq!(url, "http://test.com/users?limit=200");
    }

    #[test]
    fn test_decorator_propagates_inner_failure() {
        let chain = CriteriaDecorator::new(
            boxed(BaseUrlBuilder::new("/users")),
            FilterName::Limit,
            "200",
        );
        assert!(chain.build_url("::bad::").is_err());
    }

    // Test critique: deux clés distinctes commutent, seul l'ordre d'affichage change
    #[test]
    fn test_distinct_keys_commute() {
        let limit_then_status = CriteriaDecorator::new(
            boxed(CriteriaDecorator::new(
                boxed(BaseUrlBuilder::new("/todos")),
                FilterName::Limit,
                "10",
            )),
            FilterName::Status,
            "open",
        );
        let status_then_limit = CriteriaDecorator::new(
            boxed(CriteriaDecorator::new(
                boxed(BaseUrlBuilder::new("/todos")),
                FilterName::Status,
                "open",
            )),
            FilterName::Limit,
            "10",
        );

        let a = Url::parse(&limit_then_status.build_url("http://test.com").unwrap()).unwrap();
        let b = Url::parse(&status_then_limit.build_url("http://test.com").unwrap()).unwrap();

        let mut pairs_a: Vec<_> = a.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        let mut pairs_b: Vec<_> = b.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        pairs_a.sort();
        pairs_b.sort();
        assert_eq!(pairs_a, pairs_b);
    }

    // Test critique: même clé deux fois, la valeur externe gagne
    #[test]
    fn test_same_key_is_last_write_wins() {
        let chain = CriteriaDecorator::new(
            boxed(CriteriaDecorator::new(
                boxed(BaseUrlBuilder::new("/todos")),
                FilterName::Limit,
                "10",
            )),
            FilterName::Limit,
            "50",
        );
        let url = chain.build_url("http://test.com").unwrap();
        assert_eq!(url, "http://test.com/todos?limit=50");
    }

    #[test]
    fn test_chain_is_idempotent() {
        let chain = CriteriaDecorator::new(
            boxed(CriteriaDecorator::new(
                boxed(BaseUrlBuilder::new("/todos")),
                FilterName::Status,
                "in progress",
            )),
            FilterName::Limit,
            "10",
        );
        let first = chain.build_url("http://test.com").unwrap();
        let second = chain.build_url("http://test.com").unwrap();
        assert_eq!(first, second);
    }
}
