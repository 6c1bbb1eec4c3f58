//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the client:
//! - HTTP adapter for the backend REST API (single bearer credential slot)
//! - Data directory resolution for durable client state

pub mod http;
pub mod paths;
