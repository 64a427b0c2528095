pub mod accounts;
pub mod codec;
pub mod coerce;
pub mod contrast;
pub mod error;
pub mod render;
pub mod repo;
pub mod sanitize;
pub mod schema;
pub mod service;

#[cfg(test)]
mod service_test;
