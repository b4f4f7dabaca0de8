// src/core/mod.rs

pub mod emoji;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod youtube;

pub use html::{Html, escape};
