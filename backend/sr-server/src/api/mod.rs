//! REST API handlers

pub mod echo;
pub mod extractors;
