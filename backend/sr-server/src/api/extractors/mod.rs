//! Axum extractors that report rejections through the response formatter

pub mod api_json;
