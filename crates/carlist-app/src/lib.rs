//! Application service layer - config, sample catalog, query use cases

pub mod config;
pub mod query_service;
pub mod render;
pub mod sample;
