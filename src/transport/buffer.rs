// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{
    alloc::{Layout, alloc_zeroed, dealloc},
    ptr::NonNull,
};

use crate::models::error::SgError;

/// A page-aligned, zero-initialized heap buffer.
///
/// Many transport channels require page alignment of the data buffer for
/// zero-copy I/O, which `Vec` does not guarantee.
pub struct PageBuf {
    ptr: NonNull<u8>,
    len: usize,
    layout: Layout,
}

// The buffer is uniquely owned; the raw pointer never aliases.
unsafe impl Send for PageBuf {}

impl PageBuf {
    /// Allocates `len` zeroed bytes aligned to the system page size.
    ///
    /// `len` must be non-zero.
    pub fn zeroed(len: usize) -> Result<Self, SgError> {
        if len == 0 {
            return Err(SgError::invalid("zero-length page buffer"));
        }

        let layout = Layout::from_size_align(len, page_size())
            .map_err(|e| SgError::invalid(format!("bad buffer layout: {e}")))?;

        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(SgError::OutOfMemory(len))?;

        Ok(Self { ptr, len, layout })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr is valid for len bytes for the lifetime of self.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr is valid for len bytes and uniquely borrowed.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for PageBuf {
    fn drop(&mut self) {
        // SAFETY: allocated in `zeroed` with the stored layout, freed once.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

fn page_size() -> usize {
    // SAFETY: sysconf has no memory-safety preconditions.
    let sz = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if sz > 0 { sz as usize } else { 4096 }
}
