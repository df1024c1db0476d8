//! src/lib.rs
pub mod configuration;
pub mod error;
pub mod mapper;
pub mod pipeline;
pub mod provider;
pub mod ranker;
pub mod reducer;
pub mod render;
pub mod shuffler;
pub mod telemetry;
pub mod tokenizer;
