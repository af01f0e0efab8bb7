//! Marker trait gating typed transfers to bit-copyable values

/// A fixed-size value whose bytes fully determine its meaning.
///
/// Typed reads reinterpret raw bytes fetched from the tracee as a `T`, and
/// typed writes ship `T`'s bytes verbatim, so `T` must satisfy all of:
///
/// - every bit pattern of `size_of::<T>()` bytes is a valid `T`
///   (which rules out `bool`, `char`, enums, and references);
/// - no padding bytes (their contents would leak into the tracee);
/// - no hidden ownership (`Copy`, so no destructor observes the transfer).
///
/// # Safety
///
/// Implementors guarantee the three properties above. Violating them makes
/// the safe read/write APIs instantly unsound. Types that cannot uphold them
/// can still be moved through the `unsafe` escape hatches
/// ([`read_unchecked`](crate::memory::MemoryReader::read_unchecked) /
/// [`write_unchecked`](crate::memory::MemoryWriter::write_unchecked)).
pub unsafe trait Plain: Copy + 'static {
    /// Returns the all-zero value, valid for any `Plain` type.
    fn zeroed() -> Self {
        // All-zero is a valid bit pattern per the trait contract.
        unsafe { std::mem::zeroed() }
    }
}

unsafe impl Plain for u8 {}
unsafe impl Plain for u16 {}
unsafe impl Plain for u32 {}
unsafe impl Plain for u64 {}
unsafe impl Plain for u128 {}
unsafe impl Plain for usize {}
unsafe impl Plain for i8 {}
unsafe impl Plain for i16 {}
unsafe impl Plain for i32 {}
unsafe impl Plain for i64 {}
unsafe impl Plain for i128 {}
unsafe impl Plain for isize {}
unsafe impl Plain for f32 {}
unsafe impl Plain for f64 {}

// Reading an arbitrary bit pattern into a raw pointer is fine; dereferencing
// it afterwards is the caller's problem, as with any raw pointer.
unsafe impl<T: 'static> Plain for *const T {}
unsafe impl<T: 'static> Plain for *mut T {}

// Arrays of Plain elements have no padding between elements.
unsafe impl<T: Plain, const N: usize> Plain for [T; N] {}
