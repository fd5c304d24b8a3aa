//! Request URL assembly: builder chain and creator registry.

mod builder;
mod registry;

pub use builder::{BaseUrlBuilder, CriteriaDecorator, QueryParamsBuilder};
pub use registry::{
    DecoratorRegistry, DecoratorRegistryBuilder, FilterCreator, ParamCreator,
};
