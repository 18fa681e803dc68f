use std::path::Path;

use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::state24::{
    GROUP_BYTES, GROUP_SYMBOLS, PAD, State24, is_valid_symbol, padding_for_bytes,
    symbols_for_bytes,
};

/// Encoded lines are broken after this many symbols by default.
pub const DEFAULT_WRAP_COL: usize = 76;

/// Formatting policy for encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Break lines every `wrap_col` symbols.
    pub line_breaks: bool,
    /// Complete a short final group with `=`.
    pub padding: bool,
    /// Symbols per line when `line_breaks` is set. 0 disables wrapping.
    pub wrap_col: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            line_breaks: true,
            padding: true,
            wrap_col: DEFAULT_WRAP_COL,
        }
    }
}

impl EncodeOptions {
    #[inline]
    fn effective_wrap(&self) -> usize {
        if self.line_breaks { self.wrap_col } else { 0 }
    }
}

/// Number of symbols (excluding line breaks) produced for `n` input bytes.
pub fn encoded_len(n: usize, padding: bool) -> usize {
    let full = n / GROUP_BYTES * GROUP_SYMBOLS;
    let tail = n % GROUP_BYTES;
    if padding {
        full + symbols_for_bytes(tail) + padding_for_bytes(tail)
    } else {
        full + symbols_for_bytes(tail)
    }
}

/// Convert raw bytes into the unformatted symbol sequence.
pub fn encode_symbols(data: &[u8], padding: bool) -> Vec<u8> {
    let mut symbols = Vec::with_capacity(encoded_len(data.len(), padding));
    let mut state = State24::new();

    for &b in data {
        state.feed_byte(b);
        if state.byte_count() == GROUP_BYTES {
            symbols.extend_from_slice(state.drain_symbols().as_slice());
        }
    }

    // 1 or 2 bytes left over: short final group
    if !state.is_empty() {
        let drained = state.drain_symbols();
        symbols.extend_from_slice(drained.as_slice());
        if padding {
            symbols.resize(symbols.len() + drained.padding(), PAD);
        }
    }

    symbols
}

/// Lay out a symbol sequence as text: a newline after every `wrap_col`
/// symbols (when wrapping) and always a trailing newline.
pub fn format_symbols(symbols: &[u8], wrap_col: usize) -> Vec<u8> {
    if wrap_col == 0 {
        let mut out = Vec::with_capacity(symbols.len() + 1);
        out.extend_from_slice(symbols);
        out.push(b'\n');
        return out;
    }

    let lines = symbols.len().div_ceil(wrap_col).max(1);
    let mut out = Vec::with_capacity(symbols.len() + lines);
    let mut rp = 0;

    while rp + wrap_col < symbols.len() {
        out.extend_from_slice(&symbols[rp..rp + wrap_col]);
        out.push(b'\n');
        rp += wrap_col;
    }
    out.extend_from_slice(&symbols[rp..]);
    out.push(b'\n');
    out
}

/// Encode `data` into formatted text.
pub fn encode_bytes(data: &[u8], opts: &EncodeOptions) -> Vec<u8> {
    let symbols = encode_symbols(data, opts.padding);
    format_symbols(&symbols, opts.effective_wrap())
}

/// Encode the file at `input` and write the text to `output`.
/// "-" stands for stdin / stdout.
pub fn encode_file(input: &Path, output: &Path, opts: &EncodeOptions) -> Result<()> {
    let data = ByteBuffer::load_from_file(input)?;
    let text = encode_bytes(data.as_slice(), opts);
    drop(data);
    ByteBuffer::from_vec(text).save_to_file(output)
}

/// Check that `data` only holds alphabet symbols, `=` and newlines, and
/// that no symbol follows the first `=`.
pub fn validate(data: &[u8]) -> Result<()> {
    let pad_start = memchr::memchr(PAD, data).unwrap_or(data.len());
    let (payload, tail) = data.split_at(pad_start);

    if let Some(pos) = payload
        .iter()
        .position(|&b| b != b'\n' && !is_valid_symbol(b))
    {
        return Err(invalid_at(data, pos));
    }
    if let Some(pos) = tail.iter().position(|&b| b != PAD && b != b'\n') {
        return Err(invalid_at(data, pad_start + pos));
    }
    Ok(())
}

fn invalid_at(data: &[u8], offset: usize) -> Error {
    Error::InvalidInput {
        offset,
        byte: data.get(offset).copied(),
    }
}

/// Decode text into bytes. Newlines are layout and padding is optional;
/// anything else outside the alphabet is rejected before any output exists.
pub fn decode_bytes(data: &[u8]) -> Result<ByteBuffer> {
    validate(data)?;

    let payload = match memchr::memchr(PAD, data) {
        Some(pos) => &data[..pos],
        None => data,
    };

    let mut out = ByteBuffer::new();
    let mut state = State24::new();
    let mut last_symbol = 0;
    let mut start = 0;

    // Newlines carry no bits: feed each line's symbols in turn
    let mut feed_line = |line: &[u8], line_start: usize| {
        for (i, &ch) in line.iter().enumerate() {
            state.feed_symbol(ch);
            last_symbol = line_start + i;
            if state.is_full() {
                for &b in state.drain_bytes().as_slice() {
                    out.append(b);
                }
            }
        }
    };
    for pos in memchr::memchr_iter(b'\n', payload) {
        feed_line(&payload[start..pos], start);
        start = pos + 1;
    }
    feed_line(&payload[start..], start);

    if !state.is_empty() {
        let drained = state.drain_bytes();
        // A lone trailing symbol carries 6 bits: not even one byte
        if drained.is_empty() {
            return Err(invalid_at(data, last_symbol));
        }
        for &b in drained.as_slice() {
            out.append(b);
        }
    }

    Ok(out)
}

/// Decode the text file at `input` and write the bytes to `output`.
/// "-" stands for stdin / stdout. The output file is only created once
/// the whole input has been accepted.
pub fn decode_file(input: &Path, output: &Path) -> Result<()> {
    let text = ByteBuffer::load_from_file(input)?;
    let decoded = decode_bytes(text.as_slice())?;
    drop(text);
    decoded.save_to_file(output)
}
