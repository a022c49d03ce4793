pub mod character_card;
pub mod filter_bar;
pub mod navbar;
pub mod pagination;
pub mod ui;

pub use character_card::{CharacterCard, FeaturedCharacterCard};
pub use filter_bar::FilterBar;
pub use navbar::Navbar;
pub use pagination::CollectionFooter;
