// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;

pub mod csv;
pub mod disclosure;
pub mod extract;
pub mod favicon;
pub mod file;
pub mod group;
pub mod offer;
pub mod progress;
pub mod render;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
