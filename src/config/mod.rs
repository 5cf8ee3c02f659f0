// src/config/mod.rs
pub mod trends;

pub use trends::TrendsConfig;
