//! Domain services

pub mod fallback;

pub use fallback::{bank_from_name, fallback_comparison};
