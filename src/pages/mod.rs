mod character;
mod characters;
mod home;

pub use character::CharacterDetailPage;
pub use characters::CharactersPage;
pub use home::HomePage;
