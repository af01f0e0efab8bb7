//! In-memory word transfer used by the engine's unit tests

use super::WordTransfer;
use crate::core::types::{Address, Pid, Request, TraceError, TraceResult, Word, WORD_SIZE};
use std::cell::{Cell, RefCell};

const MOCK_PID: Pid = 4242;

/// A fake tracee address space backed by a byte vector.
///
/// Transfers are word-granular and bounds-checked like the real primitive,
/// and failures can be injected after a chosen number of transfers to
/// exercise partial-failure behavior.
pub(crate) struct MockVm {
    base: usize,
    bytes: RefCell<Vec<u8>>,
    transfers: Cell<usize>,
    peeks: Cell<usize>,
    fail_after: Cell<Option<usize>>,
}

impl MockVm {
    /// A zero-filled address space of `size` bytes starting at `base`
    pub fn new(base: usize, size: usize) -> Self {
        Self::seeded(base, vec![0; size])
    }

    /// An address space seeded with `bytes` starting at `base`
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

    /// Snapshot of the backing bytes
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Total transfers issued (peeks and pokes)
    pub fn transfer_count(&self) -> usize {
        self.transfers.get()
    }

    /// Word reads issued
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
        let offset = address
            .as_usize()
            .checked_sub(self.base)
            .filter(|o| o + WORD_SIZE <= self.bytes.borrow().len())
            .ok_or_else(|| TraceError::new(request, MOCK_PID, address, data, libc::EFAULT))?;
        Ok(offset)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_vm_word_roundtrip() {
        let vm = MockVm::new(0x1000, 32);
        vm.write_word(Address::new(0x1008), 0x1234).unwrap();
        assert_eq!(vm.read_word(Address::new(0x1008)).unwrap(), 0x1234);
        assert_eq!(vm.transfer_count(), 2);
        assert_eq!(vm.peek_count(), 1);
    }

    #[test]
    fn test_mock_vm_bounds() {
        let vm = MockVm::new(0x1000, 16);
        let err = vm.read_word(Address::new(0x0FF0)).unwrap_err();
        assert_eq!(err.errno(), libc::EFAULT);
        // A word read must fit entirely inside the space.
        let err = vm
            .read_word(Address::new(0x1000 + 16 - WORD_SIZE + 1))
            .unwrap_err();
        assert_eq!(err.errno(), libc::EFAULT);
    }

    #[test]
    fn test_mock_vm_failure_injection() {
        let vm = MockVm::new(0x1000, 32);
        vm.fail_after(1);
        assert!(vm.read_word(Address::new(0x1000)).is_ok());
        let err = vm.read_word(Address::new(0x1000)).unwrap_err();
        assert_eq!(err.errno(), libc::EIO);
        assert_eq!(err.pid(), MOCK_PID);
    }
}
