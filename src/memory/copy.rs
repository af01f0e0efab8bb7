//! Local byte shuffling with an advisory volatile mode

/// How the engine performs its local, in-process byte copies.
///
/// The mode is purely advisory: it changes how bytes move between caller
/// values and the word staging buffers, never which syscalls are issued or
/// what the tracee observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// Plain `memcpy`-style copies
    #[default]
    Direct,
    /// Per-byte volatile loads and stores; forbids elision or reordering
    /// of the local copy across this boundary
    Volatile,
}

/// Copies `src` into `dst` honoring the access mode.
///
/// Panics if the slices differ in length.
pub(crate) fn copy_slice(dst: &mut [u8], src: &[u8], mode: AccessMode) {
    assert_eq!(dst.len(), src.len(), "copy_slice length mismatch");
    match mode {
        AccessMode::Direct => dst.copy_from_slice(src),
        AccessMode::Volatile => unsafe {
            copy_volatile(dst.as_mut_ptr(), src.as_ptr(), dst.len())
        },
    }
}

unsafe fn copy_volatile(dst: *mut u8, src: *const u8, len: usize) {
    for i in 0..len {
        dst.add(i).write_volatile(src.add(i).read_volatile());
    }
}
