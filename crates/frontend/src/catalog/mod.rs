pub mod coordinator;
pub mod page;
pub mod state;

pub use coordinator::{CatalogCoordinator, CatalogStore};
pub use page::CatalogPage;
