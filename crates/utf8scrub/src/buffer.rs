use alloc::{ffi::CString, vec::Vec};

use crate::error::Error;

/// Output accumulator for the allocating operations.
///
/// The whole worst-case capacity is reserved up front, so allocation failure
/// is reported once, before any work, and pushes never reallocate.
#[derive(Debug)]
pub(crate) struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Reserves room for `content` bytes plus the NUL terminator.
    pub(crate) fn with_capacity(content: usize) -> Result<Self, Error> {
        let mut data = Vec::new();
        data.try_reserve_exact(content.saturating_add(1))?;
        Ok(Self { data })
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert_ne!(byte, 0, "NUL inside C string output");
        self.data.push(byte);
    }

    #[inline]
    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        debug_assert!(!bytes.contains(&0), "NUL inside C string output");
        self.data.extend_from_slice(bytes);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn finish(mut self) -> CString {
        self.data.push(0);
        // SAFETY: every producer feeds either bytes copied from a `CStr` (which
        // has no interior NUL), the filler byte, or UTF-8 encodings of non-zero
        // units, none of which contain NUL. The terminator was pushed above.
        unsafe { CString::from_vec_with_nul_unchecked(self.data) }
    }
}
