pub mod api;
pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod output;
pub mod templates;
