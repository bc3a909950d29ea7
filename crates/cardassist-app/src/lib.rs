//! Application service layer - config, logging, comparison use case

pub mod config;
pub mod logging;
pub mod service;
