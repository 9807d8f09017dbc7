//! Input processing module
//! Handles file detection, profile loading and profile validation

pub mod file_detector;
pub mod manager;
pub mod validation;
