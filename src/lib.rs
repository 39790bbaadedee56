//! Library exports for reuse in tests and benchmarks.
/// Application directory helpers.
pub mod app_dirs;
/// TOML-backed application configuration.
pub mod config;
/// Labeled point storage, synthetic data, and statistics.
pub mod dataset;
/// Shared egui UI modules.
pub mod egui_app;
/// Decision-field sampling and caching.
pub mod field;
/// Logging setup.
pub mod logging;
/// Binary classifiers and the classifier registry.
pub mod ml;
/// The interactive session core.
pub mod playground;
/// Canvas composition and coordinate mapping.
pub mod render;
