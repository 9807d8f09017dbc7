//! Career matcher library
//!
//! Scores a [`model::profile::Profile`] against every career in a
//! [`CareerCatalog`] and returns the best matches with skill gaps, suggested
//! next steps and an estimated time to readiness.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod model;
pub mod output;

pub use catalog::CareerCatalog;
pub use config::Config;
pub use error::{CareerMatcherError, Result};
pub use matching::MatchEngine;
