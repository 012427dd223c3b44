//! Library facade exposing the bookmood pipeline modules.

pub mod cli;
pub mod config;
pub mod data;
pub mod emotion;
pub mod error;
pub mod logging;
pub mod nlp;
