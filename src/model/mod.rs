//! Profile, catalog and recommendation data types

pub mod profile;
pub mod career;
pub mod recommendation;
