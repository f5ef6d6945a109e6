//! # Text Transport
//!
//! Envelopes are binary. [`Encoder`] and [`Decoder`] carry them through text
//! channels; [`Base64Url`] is the stock implementation (URL-safe alphabet, no padding).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

pub trait Encoder {
    fn encode(&self, bytes: &[u8]) -> String;
}

/// `None` means the text is not valid for this transport.
pub trait Decoder {
    fn decode(&self, text: &str) -> Option<Vec<u8>>;
}

/// Unpadded base64url.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Url;

impl Encoder for Base64Url {
    fn encode(&self, bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

impl Decoder for Base64Url {
    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        URL_SAFE_NO_PAD.decode(text.trim()).ok()
    }
}
