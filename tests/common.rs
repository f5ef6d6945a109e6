//! tests/common.rs
//! Common constants and utilities shared across test files

#![allow(dead_code)] // Each test binary uses a different subset

use lockbox_rs::{Crypter, FixedRandomSource, Key};
use std::sync::Arc;

/// Fast iteration count for tests - performance testing is in benches/
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password
pub const TEST_PASSWORD: &str = "Hello";

/// Common test data strings used across multiple tests
pub const TEST_DATA: &[u8] = b"test data";

pub const TEST_DATA_SHORT: &[u8] = b"test";

/// Iteration counts worth exercising
pub const TEST_ITERATION_VALUES: &[u32] = &[1, TEST_ITERATIONS, 10];

/// Envelope sizes for the empty plaintext
pub const MIN_KEY_ENVELOPE: usize = 2 + 16 + 16 + 32;
pub const MIN_PASSWORD_ENVELOPE: usize = 2 + 84 + 16 + 32;

/// Encrypt secret `00..1f`, auth secret `20..3f`.
pub fn sequential_key() -> Key {
    let encrypt: Vec<u8> = (0x00..0x20).collect();
    let auth: Vec<u8> = (0x20..0x40).collect();
    Key::new(&encrypt, &auth, Some("sequential".into()), None).expect("valid key sizes")
}

/// A crypter whose "randomness" is a short repeating pattern.
pub fn fixed_crypter() -> Crypter {
    Crypter::new(Arc::new(FixedRandomSource::new(vec![
        0x13, 0x37, 0xC0, 0xDE, 0xBE, 0xEF,
    ])))
}

/// `len` bytes of deterministic, non-repeating-looking data.
pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
