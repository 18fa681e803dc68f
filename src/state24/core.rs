/// The 64 symbols, in value order: `A`-`Z`, `a`-`z`, `0`-`9`, `+`, `/`.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding symbol appended after a short final group.
pub const PAD: u8 = b'=';

/// Bytes per group on the binary side.
pub const GROUP_BYTES: usize = 3;

/// Symbols per group on the text side.
pub const GROUP_SYMBOLS: usize = 4;

/// Bits held by a full accumulator.
pub const GROUP_BITS: u8 = 24;

const SYMBOL_BITS: u8 = 6;
const BYTE_BITS: u8 = 8;

/// Marks bytes that are not alphabet symbols in `DECODE_TABLE`.
const INVALID: u8 = 0xFF;

/// Symbol -> 6-bit value, derived from `ALPHABET` at compile time.
const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// True iff `ch` is one of the 64 alphabet symbols.
/// `=` and newline are not symbols; the decoder admits them separately.
#[inline]
pub fn is_valid_symbol(ch: u8) -> bool {
    DECODE_TABLE[ch as usize] != INVALID
}

/// 6-bit value of an alphabet symbol.
#[inline]
pub fn symbol_value(ch: u8) -> Option<u8> {
    match DECODE_TABLE[ch as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Alphabet symbol for the low 6 bits of `value`.
#[inline]
pub fn value_symbol(value: u8) -> u8 {
    ALPHABET[(value & 0x3F) as usize]
}

/// Number of meaningful symbols needed to carry `bytes` (0..=3) pending bytes.
#[inline]
pub const fn symbols_for_bytes(bytes: usize) -> usize {
    match bytes {
        0 => 0,
        1 => 2,
        2 => 3,
        _ => GROUP_SYMBOLS,
    }
}

/// Padding symbols that complete a group carrying `bytes` (0..=3) pending bytes.
#[inline]
pub const fn padding_for_bytes(bytes: usize) -> usize {
    match bytes {
        1 => 2,
        2 => 1,
        _ => 0,
    }
}

/// Bytes drained from the accumulator in the decode direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainedBytes {
    bytes: [u8; GROUP_BYTES],
    len: usize,
}

impl DrainedBytes {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Symbols drained from the accumulator in the encode direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainedSymbols {
    symbols: [u8; GROUP_SYMBOLS],
    len: usize,
}

impl DrainedSymbols {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Padding symbols that would complete this group to four.
    #[inline]
    pub fn padding(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            GROUP_SYMBOLS - self.len
        }
    }
}

/// Holds up to one group (24 bits) of in-flight payload.
///
/// Bytes occupy `storage` most-significant first; symbols are packed
/// into the same 24-bit window at 6-bit offsets. `bit_count` says how
/// much of the window is filled (multiples of 8 when fed bytes,
/// multiples of 6 when fed symbols) and `byte_count` how many whole
/// bytes that covers. Either drain resets everything to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State24 {
    storage: [u8; GROUP_BYTES],
    byte_count: u8,
    bit_count: u8,
}

impl State24 {
    pub const fn new() -> Self {
        Self {
            storage: [0; GROUP_BYTES],
            byte_count: 0,
            bit_count: 0,
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn byte_count(&self) -> usize {
        self.byte_count as usize
    }

    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bit_count >= GROUP_BITS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Store one raw byte (encode direction).
    /// Ignored once three bytes are held; drain first.
    #[inline]
    pub fn feed_byte(&mut self, byte: u8) {
        if self.byte_count() >= GROUP_BYTES {
            return;
        }
        self.storage[self.byte_count()] = byte;
        self.byte_count += 1;
        self.bit_count += BYTE_BITS;
    }

    /// Merge one alphabet symbol into the window (decode direction).
    /// Non-alphabet bytes and feeds into a full window are ignored;
    /// the decoder validates input before feeding.
    #[inline]
    pub fn feed_symbol(&mut self, ch: u8) {
        let Some(v) = symbol_value(ch) else {
            return;
        };
        let s = &mut self.storage;
        match self.bit_count {
            // vvvvvv.. ........ ........
            0 => s[0] |= v << 2,
            // ......vv vvvv.... ........
            6 => {
                s[0] |= v >> 4;
                s[1] |= (v & 0x0F) << 4;
            }
            // ........ ....vvvv vv......
            12 => {
                s[1] |= v >> 2;
                s[2] |= (v & 0x03) << 6;
            }
            // ........ ........ ..vvvvvv
            18 => s[2] |= v,
            _ => return,
        }
        self.bit_count += SYMBOL_BITS;
        self.byte_count = self.bit_count / BYTE_BITS;
    }

    /// Take every whole byte held (0-3) and reset.
    #[inline]
    pub fn drain_bytes(&mut self) -> DrainedBytes {
        let drained = DrainedBytes {
            bytes: self.storage,
            len: self.byte_count(),
        };
        self.reset();
        drained
    }

    /// Split the held bytes into 6-bit symbols and reset.
    /// Yields only meaningful symbols: 4 for three bytes, 3 for two,
    /// 2 for one, none when empty. Unused low bits of the last symbol
    /// are zero. Padding is the caller's business.
    #[inline]
    pub fn drain_symbols(&mut self) -> DrainedSymbols {
        let [b0, b1, b2] = self.storage;
        let fields = [
            b0 >> 2,
            ((b0 & 0x03) << 4) | (b1 >> 4),
            ((b1 & 0x0F) << 2) | (b2 >> 6),
            b2 & 0x3F,
        ];
        let drained = DrainedSymbols {
            symbols: fields.map(value_symbol),
            len: symbols_for_bytes(self.byte_count()),
        };
        self.reset();
        drained
    }
}
