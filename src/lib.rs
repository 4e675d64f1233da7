// src/lib.rs
// Library crate for the Horus probe runner exposed to the binary and tests

pub mod cases;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod runner;
pub mod validator;

pub use models::{RunSummary, TestCase, TestResult};
