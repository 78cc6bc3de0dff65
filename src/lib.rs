//! Catalyst Library
//!
//! This library provides the core of the Catalyst tools directory: the
//! catalog model read from a single YAML file, the in-memory cache in front
//! of it, the search modal logic, tool submissions, and the web server that
//! renders it all.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod search;
pub mod services;
pub mod submission;

#[cfg(feature = "web")]
pub mod web;
