mod albums;

pub use albums::AlbumRepository;
