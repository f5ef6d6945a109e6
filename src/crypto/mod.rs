// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`rng`] - injectable random sources
//! - [`hmac`] - envelope MAC compute/verify
//! - [`padding`] - PKCS#7 add/remove
//! - [`kdf`] - PBKDF2 password derivation
//!
//! The CBC block chaining is crate-private; use the engines in [`crate::cipher`].

pub(crate) mod cbc;
pub mod hmac;
pub mod kdf;
pub mod padding;
pub mod rng;
