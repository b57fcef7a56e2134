//! Directory page components.

mod grid;
mod overlay;
mod page;
mod search;

pub use grid::{UserCard, UserGrid};
pub use overlay::DetailOverlay;
pub use page::DirectoryPage;
pub use search::SearchBar;
