//! # Builders
//!
//! Builder patterns for configuring cipher operations.
//!
//! ## Modules
//!
//! - [`password_builder`] - Builder for password-mode encryption parameters
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults and optional customization.

pub mod password_builder;

pub use password_builder::PasswordParametersBuilder;
