//! Matching core: skill comparison, factor scoring, gap analysis,
//! recommendation composition and ranking

pub mod skills;
pub mod scorers;
pub mod weights;
pub mod gap;
pub mod composer;
pub mod engine;

pub use engine::MatchEngine;
