//! Mood tracker CLI library.
//!
//! This crate provides the host side of the day timeline: it owns the entry
//! file, keeps the layer selection and reacts to the core's callbacks.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{Cli, Commands};
pub use config::Config;
