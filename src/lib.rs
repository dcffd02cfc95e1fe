//! The `taskhub` library crate.
//!
//! Contains the domain models, route handlers, configuration, and error
//! handling for the TaskHub API. The main binary (`main.rs`) uses it to
//! construct and run the application.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
