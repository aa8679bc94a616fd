// Re-export core modules
pub mod models;
pub mod db;

// Re-export common types and traits
pub use models::album::{ Album, NewAlbum };

pub use db::{ Database, DbConfig };
pub use db::error::RepositoryError;
pub use db::repositories::AlbumRepository;
