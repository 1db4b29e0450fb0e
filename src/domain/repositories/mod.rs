//! Repository traits abstracting the remote data source.

mod character_repository;

pub use character_repository::CharacterRepository;

#[cfg(test)]
pub use character_repository::MockCharacterRepository;
