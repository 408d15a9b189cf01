// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The mutable unit of work: one command instance built from a catalog
//! entry, holding the CDB bytes, the data buffer (owned or borrowed), the
//! sense buffer and the raw completion statuses.

use std::time::Duration;

use crate::{
    models::{
        catalog::{CDB_MAX_LEN, CommandCode, DataDirection},
        error::{Result, SgError},
        sense::SENSE_MAX_LEN,
        status::{
            DRIVER_FLAGS_MASK, DRIVER_STATUS_MASK, DriverFlags, HostStatus, ScsiStatus,
        },
    },
    transport::{buffer::PageBuf, channel::Completion},
};

/// Data buffer of one command instance. Exactly one ownership mode holds,
/// resolved at construction.
pub enum DataBuffer<'a> {
    /// No data is transferred.
    None,
    /// The caller keeps ownership; never freed by this layer.
    Borrowed(&'a mut [u8]),
    /// Allocated here, page-aligned and zero-filled; freed on release.
    Owned(PageBuf),
}

pub struct SgCommand<'a> {
    pub(crate) code: CommandCode,
    pub(crate) cdb: [u8; CDB_MAX_LEN],
    pub(crate) cdb_len: usize,
    pub(crate) direction: DataDirection,
    pub(crate) buf: DataBuffer<'a>,
    pub(crate) transfer_len: usize,
    pub(crate) sense: [u8; SENSE_MAX_LEN],
    pub(crate) sense_len: usize,
    pub(crate) status: u8,
    pub(crate) masked_status: u8,
    pub(crate) host_status: u16,
    pub(crate) driver_status: u16,
    pub(crate) resid: i32,
    pub(crate) duration_ms: u32,
}

impl<'a> SgCommand<'a> {
    /// Builds an instance with no data buffer. The catalog direction must
    /// be `None`.
    pub fn new(code: CommandCode) -> Result<SgCommand<'static>> {
        SgCommand::from_buffer(code, DataBuffer::None)
    }

    /// Builds an instance around a buffer the caller already owns.
    ///
    /// An empty slice is rejected: a present buffer with zero length is
    /// ambiguous intent.
    pub fn with_buffer(code: CommandCode, data: &'a mut [u8]) -> Result<SgCommand<'a>> {
        if data.is_empty() {
            return Err(SgError::invalid("zero-size caller-supplied buffer"));
        }
        SgCommand::from_buffer(code, DataBuffer::Borrowed(data))
    }

    /// Builds an instance with an owned page-aligned, zero-filled buffer of
    /// `len` bytes. `len == 0` is only valid for commands without a data
    /// transfer.
    pub fn allocate(code: CommandCode, len: usize) -> Result<SgCommand<'static>> {
        if len == 0 {
            return SgCommand::new(code);
        }
        SgCommand::from_buffer(code, DataBuffer::Owned(PageBuf::zeroed(len)?))
    }

    fn from_buffer<'b>(code: CommandCode, buf: DataBuffer<'b>) -> Result<SgCommand<'b>> {
        let desc = code.descriptor();
        debug_assert!(desc.cdb_length <= CDB_MAX_LEN);

        let transfer_len = match &buf {
            DataBuffer::None => 0,
            DataBuffer::Borrowed(b) => b.len(),
            DataBuffer::Owned(p) => p.len(),
        };

        if transfer_len == 0 && desc.direction != DataDirection::None {
            return Err(SgError::invalid(format!(
                "{} declares a data transfer but no buffer was given",
                desc.name
            )));
        }

        // Only the CDB length is fixed here; per-command fillers write the
        // complete CDB, opcode included.
        Ok(SgCommand {
            code,
            cdb: [0u8; CDB_MAX_LEN],
            cdb_len: desc.cdb_length,
            direction: desc.direction,
            buf,
            transfer_len,
            sense: [0u8; SENSE_MAX_LEN],
            sense_len: 0,
            status: 0,
            masked_status: 0,
            host_status: 0,
            driver_status: 0,
            resid: 0,
            duration_ms: 0,
        })
    }

    pub fn code(&self) -> CommandCode {
        self.code
    }

    /// The significant CDB bytes submitted to the channel.
    pub fn cdb(&self) -> &[u8] {
        &self.cdb[..self.cdb_len]
    }

    /// Full CDB array for per-command fillers; bytes past the declared
    /// length are padding and stay zero on the wire.
    pub fn cdb_mut(&mut self) -> &mut [u8; CDB_MAX_LEN] {
        &mut self.cdb
    }

    /// Overrides the catalog transfer direction. The ATA passthrough
    /// entries leave the direction to the call site.
    pub fn set_direction(&mut self, direction: DataDirection) {
        self.direction = direction;
    }

    pub fn direction(&self) -> DataDirection {
        self.direction
    }

    /// The full data buffer. The logically valid prefix after completion is
    /// [`transfer_len`](Self::transfer_len) bytes, not the capacity.
    pub fn data(&self) -> &[u8] {
        match &self.buf {
            DataBuffer::None => &[],
            DataBuffer::Borrowed(b) => b,
            DataBuffer::Owned(p) => p.as_slice(),
        }
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        match &mut self.buf {
            DataBuffer::None => &mut [],
            DataBuffer::Borrowed(b) => b,
            DataBuffer::Owned(p) => p.as_mut_slice(),
        }
    }

    /// Requested transfer size, reduced by the residual after completion.
    pub fn transfer_len(&self) -> usize {
        self.transfer_len
    }

    /// Sense bytes the channel actually wrote.
    pub fn sense_data(&self) -> &[u8] {
        &self.sense[..self.sense_len]
    }

    pub fn scsi_status(&self) -> ScsiStatus {
        ScsiStatus::from(self.status)
    }

    pub fn host_status(&self) -> HostStatus {
        HostStatus::from(self.host_status)
    }

    /// Status nibble of the driver status word.
    pub fn driver_status(&self) -> u16 {
        self.driver_status & DRIVER_STATUS_MASK
    }

    pub fn driver_flags(&self) -> DriverFlags {
        DriverFlags::from_bits_truncate(self.driver_status & DRIVER_FLAGS_MASK)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Releases the owned data buffer, if any. Idempotent; a borrowed
    /// buffer is detached without touching the caller's memory.
    pub fn release_buffer(&mut self) {
        self.buf = DataBuffer::None;
        self.transfer_len = 0;
    }

    pub(crate) fn record_completion(&mut self, c: &Completion) {
        self.status = c.status;
        self.masked_status = c.masked_status;
        self.host_status = c.host_status;
        self.driver_status = c.driver_status;
        self.resid = c.resid;
        self.duration_ms = c.duration_ms;
        self.sense_len = usize::from(c.sense_len).min(SENSE_MAX_LEN);
    }
}
