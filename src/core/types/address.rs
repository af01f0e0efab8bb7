//! Target address wrapper type with hex parsing and word arithmetic

use super::WORD_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid memory address: {0}")]
pub struct ParseAddressError(String);

/// A byte offset into the traced process's virtual address space.
///
/// The address carries no inherent type; it is the caller's assertion about
/// where an object lives in the tracee. All engine arithmetic advances in
/// whole machine words relative to this starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub usize);

impl Address {
    /// Creates a new address from a usize value
    pub const fn new(value: usize) -> Self {
        Address(value)
    }

    /// Creates a null address (0x0)
    pub const fn null() -> Self {
        Address(0)
    }

    /// Checks if the address is null
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the address is aligned to the specified boundary
    pub const fn is_aligned(&self, alignment: usize) -> bool {
        alignment != 0 && self.0 % alignment == 0
    }

    /// Checks if the address falls on a machine-word boundary
    pub const fn is_word_aligned(&self) -> bool {
        self.is_aligned(WORD_SIZE)
    }

    /// Aligns the address down to the specified boundary
    pub const fn align_down(&self, alignment: usize) -> Self {
        if alignment == 0 {
            return *self;
        }
        Address(self.0 & !(alignment - 1))
    }

    /// Aligns the address up to the specified boundary
    pub const fn align_up(&self, alignment: usize) -> Self {
        if alignment == 0 {
            return *self;
        }
        Address((self.0 + alignment - 1) & !(alignment - 1))
    }

    /// Adds a signed byte offset to the address
    pub const fn offset(&self, offset: isize) -> Self {
        Address((self.0 as isize + offset) as usize)
    }

    /// Advances the address by a number of bytes
    pub const fn add(&self, bytes: usize) -> Self {
        Address(self.0 + bytes)
    }

    /// Advances the address by a number of whole machine words
    pub const fn add_words(&self, words: usize) -> Self {
        Address(self.0 + words * WORD_SIZE)
    }

    /// Returns the raw usize value
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // Handle hex prefix variations
        let value = if s.starts_with("0x") || s.starts_with("0X") {
            usize::from_str_radix(&s[2..], 16)
        } else if s.starts_with('$') {
            usize::from_str_radix(&s[1..], 16)
        } else if s.chars().any(|c| c.is_ascii_alphabetic()) {
            // Assume hex if contains letters
            usize::from_str_radix(s, 16)
        } else {
            // Try decimal first, then hex
            s.parse::<usize>().or_else(|_| usize::from_str_radix(s, 16))
        };

        value
            .map(Address::new)
            .map_err(|_| ParseAddressError(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.0)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl fmt::UpperHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016X}", self.0)
    }
}

impl From<usize> for Address {
    fn from(value: usize) -> Self {
        Address::new(value)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Address::new(value as usize)
    }
}

impl From<*const u8> for Address {
    fn from(ptr: *const u8) -> Self {
        Address::new(ptr as usize)
    }
}

impl From<*mut u8> for Address {
    fn from(ptr: *mut u8) -> Self {
        Address::new(ptr as usize)
    }
}
