pub mod album;

pub use album::{ Album, NewAlbum };
