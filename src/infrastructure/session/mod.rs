//! Session codec implementations.

pub mod hmac_codec;

pub use hmac_codec::HmacSessionCodec;
