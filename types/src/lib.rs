pub mod config;
pub mod text;

// Re-exports for convenience
pub use config::BackendConfig;
