//! HTTP boundary: routes, static page and error mapping

pub mod api;
pub mod error;
