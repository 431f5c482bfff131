// Service exports
pub mod categories;
pub mod db;
pub mod exchanges;
pub mod photos;
pub mod reviews;
pub mod skills;
pub mod stats;
pub mod users;

pub use db::{Database, StoreError};
pub use photos::{PhotoError, PhotoStore, MAX_PHOTO_BYTES};
