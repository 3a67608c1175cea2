//! Configuration management for helm-chart-gen

pub mod chart;
pub mod config;
pub mod tools;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use chart::ChartConfig;
pub use chart_manifest::RewriteRules;
pub use config::Config;
pub use tools::{GeneratorConfig, PackagingConfig};
