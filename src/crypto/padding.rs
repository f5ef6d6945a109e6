// src/crypto/padding.rs
//! PKCS#7 block padding.
//!
//! Removal inspects a full block's worth of trailing bytes no matter where the
//! first mismatch is, so the position of a bad byte does not leak through timing.

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use thiserror::Error;

/// The padding of a decrypted message is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid padding.")]
pub struct InvalidPadding;

/// Append `n` bytes of value `n`, where `n = block_size - data.len() % block_size`.
///
/// Aligned input gets a full block of padding, so `n` is always in `1..=block_size`.
///
/// # Panics (by contract)
///
/// Panics if `block_size` is zero or larger than 255. The engine always passes
/// [`BLOCK_SIZE`](crate::consts::BLOCK_SIZE).
pub fn add_padding(block_size: usize, data: &[u8]) -> Vec<u8> {
    assert!((1..=255).contains(&block_size), "block size must be 1..=255");

    let pad = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad as u8);
    padded
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// # Errors
///
/// [`InvalidPadding`] if the final byte `n` is `0`, exceeds `block_size` or
/// `data.len()`, or if any of the last `n` bytes differs from `n`.
///
/// # Panics (by contract)
///
/// Same as [`add_padding`].
pub fn remove_padding(block_size: usize, data: &[u8]) -> Result<&[u8], InvalidPadding> {
    assert!((1..=255).contains(&block_size), "block size must be 1..=255");

    let Some(&last) = data.last() else {
        return Err(InvalidPadding);
    };
    let pad = last as usize;

    // Range checks depend only on the count byte.
    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(InvalidPadding);
    }

    // Walk the whole trailing window; bytes inside the pad must equal `last`.
    let window = block_size.min(data.len());
    let mut mismatch = Choice::from(0u8);
    for (i, &byte) in data[data.len() - window..].iter().rev().enumerate() {
        let in_pad = (i as u8).ct_lt(&last);
        mismatch |= in_pad & !byte.ct_eq(&last);
    }

    if bool::from(mismatch) {
        return Err(InvalidPadding);
    }
    Ok(&data[..data.len() - pad])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_next_boundary() {
        assert_eq!(add_padding(16, b""), vec![16u8; 16]);
        assert_eq!(add_padding(16, b"foobar").len(), 16);
        assert_eq!(&add_padding(16, b"foobar")[6..], &[10u8; 10]);
        assert_eq!(add_padding(16, &[0u8; 16]).len(), 32);
        assert_eq!(add_padding(16, &[0u8; 17]).len(), 32);
        assert_eq!(add_padding(8, b"1234567"), b"1234567\x01".to_vec());
    }

    #[test]
    fn remove_reverses_add() {
        for len in 0..40 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = add_padding(16, &data);
            assert_eq!(remove_padding(16, &padded).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn rejects_out_of_range_count() {
        assert_eq!(remove_padding(16, b""), Err(InvalidPadding));
        assert_eq!(remove_padding(16, &[0u8; 16]), Err(InvalidPadding));
        assert_eq!(remove_padding(16, &[17u8; 32]), Err(InvalidPadding));
        assert_eq!(remove_padding(16, &[4u8; 3]), Err(InvalidPadding));
    }

    #[test]
    fn rejects_any_corrupt_pad_byte() {
        let padded = add_padding(16, b"abc"); // 13 bytes of 0x0d
        for i in 3..16 {
            if i == 15 {
                continue; // the count byte itself
            }
            let mut bad = padded.clone();
            bad[i] ^= 0x01;
            assert_eq!(remove_padding(16, &bad), Err(InvalidPadding), "byte {i}");
        }
    }

    #[test]
    fn ignores_data_bytes_before_pad() {
        let mut padded = add_padding(16, b"abc");
        padded[0] = 0x0d;
        padded[2] = 0xff;
        assert_eq!(remove_padding(16, &padded).unwrap(), &[0x0d, b'b', 0xff]);
    }

    #[test]
    fn short_input_with_valid_count() {
        assert_eq!(remove_padding(16, &[2u8, 2]).unwrap(), b"");
        assert_eq!(remove_padding(16, &[9u8, 1]).unwrap(), &[9u8]);
    }
}
