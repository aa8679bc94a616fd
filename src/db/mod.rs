pub mod common;
pub mod error;
pub mod pool;
pub mod repositories;

pub use common::*;
pub use error::*;
pub use pool::*;
pub use repositories::*;
