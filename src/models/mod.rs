//! Settings models deserialized from configuration sources.

pub mod config;
