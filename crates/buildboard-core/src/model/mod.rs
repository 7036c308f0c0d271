pub mod build;

pub use build::{BuildListing, BuildRecord, NewBuild};
