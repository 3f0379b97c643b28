pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod infra;
pub mod loader;
pub mod model;
pub mod output;
pub mod parser;
pub mod services;
