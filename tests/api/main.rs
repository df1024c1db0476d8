//! tests/api/main.rs
mod pipeline;
mod provider;
