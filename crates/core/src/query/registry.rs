//! Registry composing the URL builder chain from a filter set.
//!
//! The registry holds an ordered list of [`FilterCreator`]s, one per
//! recognized filter name. It has a two-phase lifecycle: a mutable
//! [`DecoratorRegistryBuilder`] exists only inside the composition root at
//! startup, and `freeze()` turns it into an immutable registry that is
//! shared behind an `Arc` for the whole serving phase. Publication of the
//! frozen value is the happens-before edge between registration and reads,
//! so steady-state requests take no lock.

use std::sync::Arc;

use tracing::debug;

use crate::filters::{FilterMap, FilterName, FilterSet};
use crate::query::builder::{BaseUrlBuilder, CriteriaDecorator, QueryParamsBuilder};

// =============================================================================
// Creators
// =============================================================================

/// A unit that conditionally wraps the chain with one query parameter.
///
/// Each creator owns exactly one recognized filter name. It wraps the
/// current chain only when that name resolves to a present value in the
/// request's filter map; otherwise the chain passes through unchanged.
pub trait FilterCreator: Send + Sync {
    /// The one filter name this creator recognizes.
    fn filter_name(&self) -> FilterName;

    /// Wrap `inner` with a criteria decorator when this creator's name is
    /// present in `filters`.
    fn create(
        &self,
        inner: Box<dyn QueryParamsBuilder>,
        filters: &FilterMap,
    ) -> Box<dyn QueryParamsBuilder> {
        let name = self.filter_name();
        match filters.get(&name).and_then(|value| value.as_ref()) {
            Some(value) => {
                debug!(%name, "wrapping url chain with criteria decorator");
                Box::new(CriteriaDecorator::new(inner, name, value.clone()))
            }
            None => inner,
        }
    }
}

/// The standard creator: recognizes one name, emits `name=value`.
///
/// All vocabulary names use this implementation; the trait stays open for
/// creators that need to derive their value differently.
pub struct ParamCreator {
    name: FilterName,
}

impl ParamCreator {
    pub fn new(name: FilterName) -> Self {
        Self { name }
    }
}

impl FilterCreator for ParamCreator {
    fn filter_name(&self) -> FilterName {
        self.name
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Mutable registration phase of the registry. Used once, at startup, by
/// the composition root.
#[derive(Default)]
pub struct DecoratorRegistryBuilder {
    creators: Vec<Arc<dyn FilterCreator>>,
}

impl DecoratorRegistryBuilder {
    /// Append a creator. Creators run in registration order; each name must
    /// be registered at most once.
    pub fn register(mut self, creator: Arc<dyn FilterCreator>) -> Self {
        self.creators.push(creator);
        self
    }

    /// Register the standard creator for every recognized filter name, in
    /// vocabulary order.
    pub fn register_standard(mut self) -> Self {
        for name in FilterName::ALL {
            self = self.register(Arc::new(ParamCreator::new(name)));
        }
        self
    }

    /// Finish registration. The returned registry is immutable.
    pub fn freeze(self) -> DecoratorRegistry {
        DecoratorRegistry {
            creators: self.creators,
        }
    }
}

/// Frozen, read-only creator list used to compose URL builder chains.
pub struct DecoratorRegistry {
    creators: Vec<Arc<dyn FilterCreator>>,
}

impl DecoratorRegistry {
    /// Start a registration phase.
    pub fn builder() -> DecoratorRegistryBuilder {
        DecoratorRegistryBuilder::default()
    }

    /// Compose the builder chain for one request.
    ///
    /// Returns `None` when no filter set was provided at all — the caller
    /// requested no filtering and must not invoke a chain. This is a
    /// short-circuit, not an error. With a filter set present, the chain
    /// starts at `BaseUrlBuilder(initial_path)` and every registered
    /// creator is applied in registration order.
    pub fn create_url_builder(
        &self,
        initial_path: &str,
        filter_set: Option<&dyn FilterSet>,
    ) -> Option<Box<dyn QueryParamsBuilder>> {
        let filter_set = filter_set?;
        let filters = filter_set.filters();

        let mut chain: Box<dyn QueryParamsBuilder> = Box::new(BaseUrlBuilder::new(initial_path));
        for creator in &self.creators {
            chain = creator.create(chain, &filters);
        }

        Some(chain)
    }

    /// Names of all registered creators, in registration order.
    pub fn registered_names(&self) -> Vec<FilterName> {
        self.creators.iter().map(|c| c.filter_name()).collect()
    }

    /// Number of registered creators.
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    /// Whether no creator has been registered.
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{PageFilters, TodoFilters, UserFilters};
    use crate::models::{Priority, TodoStatus, UserRole};
    use url::Url;

    fn standard_registry() -> DecoratorRegistry {
        DecoratorRegistry::builder().register_standard().freeze()
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    // Test critique: aucun filtre demandé => uniquement le chemin de base, pas de query string
    #[test]
    fn test_all_absent_filters_yield_bare_path() {
        let registry = standard_registry();
        let chain = registry
            .create_url_builder("/users", Some(&PageFilters::default()))
            .unwrap();

        let url = chain.build_url("http://test.com").unwrap();
        assert_eq!(url, "http://test.com/users");
    }

    #[test]
    fn test_limit_filter_appears_verbatim() {
        let registry = standard_registry();
        let filters = PageFilters {
            limit: Some(200),
            ..Default::default()
        };
        let chain = registry.create_url_builder("/users", Some(&filters)).unwrap();

        let url = chain.build_url("http://test.com").unwrap();
        assert_eq!(url, "http://test.com/users?limit=200");
    }

    #[test]
    fn test_no_filter_set_short_circuits_to_none() {
        let registry = standard_registry();
        assert!(registry.create_url_builder("/users", None).is_none());
    }

    // Test critique: l'ordre d'enregistrement ne change pas l'ensemble des paramètres
    #[test]
    fn test_registration_order_does_not_change_parameter_set() {
        let forward = standard_registry();
        let mut reversed_builder = DecoratorRegistry::builder();
        for name in FilterName::ALL.iter().rev() {
            reversed_builder = reversed_builder.register(Arc::new(ParamCreator::new(*name)));
        }
        let reversed = reversed_builder.freeze();

        let filters = TodoFilters {
            page: PageFilters {
                limit: Some(10),
                ..Default::default()
            },
            status: Some(TodoStatus::Open),
            priority: Some(Priority::High),
            ..Default::default()
        };

        let url_a = forward
            .create_url_builder("/todos", Some(&filters))
            .unwrap()
            .build_url("http://test.com")
            .unwrap();
        let url_b = reversed
            .create_url_builder("/todos", Some(&filters))
            .unwrap()
            .build_url("http://test.com")
            .unwrap();

        let mut pairs_a = query_pairs(&url_a);
        let mut pairs_b = query_pairs(&url_b);
        pairs_a.sort();
        pairs_b.sort();
        assert_eq!(pairs_a, pairs_b);
        assert_eq!(pairs_a.len(), 3);
    }

    #[test]
    fn test_chain_built_by_registry_is_idempotent() {
        let registry = standard_registry();
        let filters = UserFilters {
            page: PageFilters {
                limit: Some(5),
                after: Some("u17".into()),
                ..Default::default()
            },
            role: Some(UserRole::Reader),
        };
        let chain = registry.create_url_builder("/users", Some(&filters)).unwrap();

        assert_eq!(
            chain.build_url("http://test.com").unwrap(),
            chain.build_url("http://test.com").unwrap()
        );
    }

    #[test]
    fn test_registered_names_follow_registration_order() {
        let registry = standard_registry();
        assert_eq!(registry.registered_names(), FilterName::ALL.to_vec());
        assert_eq!(registry.len(), 9);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_enum_filters_land_in_query_string() {
        let registry = standard_registry();
        let filters = TodoFilters {
            status: Some(TodoStatus::InProgress),
            ..Default::default()
        };
        let url = registry
            .create_url_builder("/todos", Some(&filters))
            .unwrap()
            .build_url("http://test.com")
            .unwrap();

        assert_eq!(query_pairs(&url), vec![("status".into(), "in progress".into())]);
    }
}
