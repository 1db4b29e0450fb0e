//! Domain entities decoded from the remote source.

mod character;
mod planet;
mod species;

pub use character::{AggregateResult, Character, CharactersPage};
pub use planet::Planet;
pub use species::Species;
