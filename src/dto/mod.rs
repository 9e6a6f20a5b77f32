//! DTO modules that bridge services with the command-line front end.

pub mod search;
