//! Whole-file conversion between raw bytes and the 64-symbol text
//! encoding (`A`-`Z`, `a`-`z`, `0`-`9`, `+`, `/`, with `=` padding).
//!
//! The [`state24`] accumulator packs three bytes into four 6-bit
//! symbols and back; [`codec`] drives it over whole buffers and files.

/// Use mimalloc as the global allocator for all binaries.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod buffer;
pub mod codec;
pub mod common;
pub mod error;
pub mod state24;

pub use buffer::ByteBuffer;
pub use codec::{EncodeOptions, decode_bytes, decode_file, encode_bytes, encode_file};
pub use error::{Error, Result};
pub use state24::State24;
