pub mod dto;
pub mod error;
pub mod form;
pub mod handlers;
pub mod problem;
pub mod routes;
