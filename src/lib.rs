// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod providers;
pub mod sweep;
