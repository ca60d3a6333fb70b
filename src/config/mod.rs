//! Configuration module for WealthWise
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WealthPaths;
pub use settings::Settings;
