//! Catalog data models
//!
//! This module contains the core data types for catalog operations:
//! - `category` - The closed set of resource categories (Category)
//! - `records` - Wire-shaped resource records (Film, Person, Planet, ...)
//! - `page` - The paginated list envelope (Page)
//! - `resource` - Category-tagged resource wrapper (Resource, RelationList)

mod category;
mod page;
mod records;
mod resource;

pub use category::Category;
pub use page::{Page, PAGE_SIZE};
pub use records::{Film, Person, Planet, Species, Starship, Vehicle};
pub use resource::{RelationList, Resource};
