// MapTool-api lib.rs
//
// This is the main library file for the MAP Tool API.
// It wires the domain calculator into an axum application.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::create_application;
pub use config::AppConfig;
