//! Shared in-memory tracee for integration tests
#![allow(dead_code)]

use ptrace_marshal::{Address, Pid, Request, TraceError, TraceResult, Word, WordTransfer, WORD_SIZE};
use std::cell::{Cell, RefCell};

pub const MOCK_PID: Pid = 4242;

/// A fake tracee address space backed by a byte vector, with word-granular
/// bounds-checked transfers and optional failure injection.
pub struct MockVm {
    base: usize,
    bytes: RefCell<Vec<u8>>,
    transfers: Cell<usize>,
    peeks: Cell<usize>,
    fail_after: Cell<Option<usize>>,
}

impl MockVm {
    pub fn new(base: usize, size: usize) -> Self {
        Self::seeded(base, vec![0; size])
    }

    pub fn seeded(base: usize, bytes: Vec<u8>) -> Self {
        MockVm {
            base,
            bytes: RefCell::new(bytes),
            transfers: Cell::new(0),
            peeks: Cell::new(0),
            fail_after: Cell::new(None),
        }
    }

    /// Makes every transfer past the first `n` fail with `EIO`
    pub fn fail_after(&self, n: usize) {
        self.fail_after.set(Some(n));
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers.get()
    }

    pub fn peek_count(&self) -> usize {
        self.peeks.get()
    }

    fn admit(&self, request: Request, address: Address, data: Option<Word>) -> TraceResult<usize> {
        let n = self.transfers.get();
        self.transfers.set(n + 1);
        if let Some(limit) = self.fail_after.get() {
            if n >= limit {
                return Err(TraceError::new(request, MOCK_PID, address, data, libc::EIO));
            }
        }
        address
            .as_usize()
            .checked_sub(self.base)
            .filter(|o| o + WORD_SIZE <= self.bytes.borrow().len())
            .ok_or_else(|| TraceError::new(request, MOCK_PID, address, data, libc::EFAULT))
    }
}

impl WordTransfer for MockVm {
    fn read_word(&self, address: Address) -> TraceResult<Word> {
        let offset = self.admit(Request::PeekData, address, None)?;
        self.peeks.set(self.peeks.get() + 1);
        let bytes = self.bytes.borrow();
        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(&bytes[offset..offset + WORD_SIZE]);
        Ok(Word::from_ne_bytes(word))
    }

    fn write_word(&self, address: Address, word: Word) -> TraceResult<()> {
        let offset = self.admit(Request::PokeData, address, Some(word))?;
        let mut bytes = self.bytes.borrow_mut();
        bytes[offset..offset + WORD_SIZE].copy_from_slice(&word.to_ne_bytes());
        Ok(())
    }
}
