pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod resolver;

pub use error::{LocatorError, LocatorResult};
pub use locator::Locator;
pub use resolver::{parent, parent_str, resolve, resolve_str, Resolver, ResolverOptions};
