// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Constant-time and branch-free; used by the CBC chaining in both directions.
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b` or `output` is shorter than 16 bytes.
/// Callers always pass exact 16-byte AES blocks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Splits `data` at `len` bytes from the end, or returns `None` if it is shorter.
#[inline]
pub fn split_tail(data: &[u8], len: usize) -> Option<(&[u8], &[u8])> {
    data.len().checked_sub(len).map(|at| data.split_at(at))
}
