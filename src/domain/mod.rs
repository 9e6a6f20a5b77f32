//! Records handed over by the data source and searched by the matcher.

pub mod customer;
pub mod ticket;
pub mod types;
