// Integration tests for the conversion pipeline
// Run with: cargo test --test integration

mod cli_tests;
mod export_tests;
