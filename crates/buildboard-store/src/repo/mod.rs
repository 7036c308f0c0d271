//! Repository layer for build records

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
