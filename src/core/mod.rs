//! Configuration and data model

pub mod config;
pub mod models;
