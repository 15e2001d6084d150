/// Number of letters a window encodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLength {
    Doublet,
    Triplet,
}

impl CodeLength {
    pub const fn letters(self) -> usize {
        match self {
            Self::Doublet => 2,
            Self::Triplet => 3,
        }
    }
}

/// A run of `width` bits starting at bit `start` of a digest.
///
/// Bits are numbered little-endian within the digest: bit `k` is bit `k % 8` of
/// byte `k / 8`, and the first bit of the window becomes the least significant bit
/// of the extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWindow {
    start: usize,
    width: u32,
    code: CodeLength,
}

pub const TRIPLET_BITS: u32 = 14;
/// Widest window whose values still fit in two base-26 letters (2^9 <= 26^2).
pub const MAX_DOUBLET_BITS: u32 = 9;

impl BitWindow {
    pub const fn triplet(start: usize) -> Self {
        Self {
            start,
            width: TRIPLET_BITS,
            code: CodeLength::Triplet,
        }
    }

    pub const fn doublet(start: usize, width: u32) -> Self {
        assert!(width > 0 && width <= MAX_DOUBLET_BITS);
        Self {
            start,
            width,
            code: CodeLength::Doublet,
        }
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn end(&self) -> usize {
        self.start + self.width as usize
    }

    pub const fn code(&self) -> CodeLength {
        self.code
    }

    /// Smallest digest length, in bytes, that contains the whole window.
    pub const fn min_bytes(&self) -> usize {
        self.end().div_ceil(8)
    }

    /// Reads the window out of `digest`.
    ///
    /// # Panics
    ///
    /// Panics if `digest` is shorter than [`min_bytes`](Self::min_bytes).
    pub fn extract(&self, digest: &[u8]) -> u32 {
        assert!(
            digest.len() >= self.min_bytes(),
            "digest of {} byte(s) is too short for bit window {}..{} (needs {} bytes)",
            digest.len(),
            self.start,
            self.end(),
            self.min_bytes()
        );
        (0..self.width).fold(0u32, |value, offset| {
            let bit = self.start + offset as usize;
            let set = (digest[bit / 8] >> (bit % 8)) & 1;
            value | (u32::from(set) << offset)
        })
    }
}

pub const TRIPLET_1: BitWindow = BitWindow::triplet(0);
pub const TRIPLET_2: BitWindow = BitWindow::triplet(14);
pub const TRIPLET_3: BitWindow = BitWindow::triplet(28);
pub const TRIPLET_4: BitWindow = BitWindow::triplet(42);
pub const DOUBLET_BITS_56_TO_64: BitWindow = BitWindow::doublet(56, MAX_DOUBLET_BITS);
