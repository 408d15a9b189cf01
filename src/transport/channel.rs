// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The generic low-level I/O channel: a single synchronous exchange of
//! {CDB, data buffer, sense buffer, timeout} against a device, returning
//! the raw completion statuses. The production implementation issues the
//! Linux `SG_IO` ioctl; tests substitute a scripted channel.

use std::{
    fs::{File, OpenOptions},
    io,
    os::fd::AsRawFd,
    path::Path,
    time::Duration,
};

use crate::models::catalog::DataDirection;

/// `SG_IO` ioctl request number from `<scsi/sg.h>`.
const SG_IO: libc::c_ulong = 0x2285;

const SG_DXFER_NONE: libc::c_int = -1;
const SG_DXFER_TO_DEV: libc::c_int = -2;
const SG_DXFER_FROM_DEV: libc::c_int = -3;

/// One synchronous exchange handed to the channel.
pub struct ExchangeRequest<'a> {
    /// Command bytes of declared length.
    pub cdb: &'a [u8],
    /// Declared transfer direction.
    pub direction: DataDirection,
    /// Data buffer, absent when `direction` is `None`.
    pub data: Option<&'a mut [u8]>,
    /// Sense buffer the channel fills on completion.
    pub sense: &'a mut [u8],
    /// Per-command timeout enforced by the channel.
    pub timeout: Duration,
}

/// Completion metadata copied verbatim from the transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct Completion {
    /// Raw SCSI status byte.
    pub status: u8,
    /// Shifted/masked status as reported by the SG layer.
    pub masked_status: u8,
    /// Host (transport) status.
    pub host_status: u16,
    /// Driver status word (status nibble plus suggestion flags).
    pub driver_status: u16,
    /// Unmet (residual) transfer length in bytes.
    pub resid: i32,
    /// Time the command took, in milliseconds.
    pub duration_ms: u32,
    /// Number of sense bytes actually written.
    pub sense_len: u8,
}

/// Synchronous exchange primitive.
///
/// `Err` carries the raw OS errno of a submission failure; device-reported
/// failures come back as a normal [`Completion`] for the executor to
/// classify.
pub trait SgExchange: Send {
    fn exchange(&mut self, req: ExchangeRequest<'_>) -> Result<Completion, i32>;
}

/// `sg_io_hdr` from `<scsi/sg.h>`, bit for bit.
#[repr(C)]
#[allow(dead_code)]
struct SgIoHdr {
    interface_id: libc::c_int,
    dxfer_direction: libc::c_int,
    cmd_len: libc::c_uchar,
    mx_sb_len: libc::c_uchar,
    iovec_count: libc::c_ushort,
    dxfer_len: libc::c_uint,
    dxferp: *mut libc::c_void,
    cmdp: *mut libc::c_uchar,
    sbp: *mut libc::c_uchar,
    timeout: libc::c_uint,
    flags: libc::c_uint,
    pack_id: libc::c_int,
    usr_ptr: *mut libc::c_void,
    status: libc::c_uchar,
    masked_status: libc::c_uchar,
    msg_status: libc::c_uchar,
    sb_len_wr: libc::c_uchar,
    host_status: libc::c_ushort,
    driver_status: libc::c_ushort,
    resid: libc::c_int,
    duration: libc::c_uint,
    info: libc::c_uint,
}

/// The production channel: an opened SG device node.
pub struct SgIoChannel {
    file: File,
}

impl SgIoChannel {
    /// Opens the device node read-write for command submission.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self { file })
    }

    pub fn from_file(file: File) -> Self {
        Self { file }
    }
}

impl SgExchange for SgIoChannel {
    fn exchange(&mut self, req: ExchangeRequest<'_>) -> Result<Completion, i32> {
        let dxfer_direction = match req.direction {
            DataDirection::None => SG_DXFER_NONE,
            DataDirection::ToDevice => SG_DXFER_TO_DEV,
            DataDirection::FromDevice => SG_DXFER_FROM_DEV,
        };

        let (dxferp, dxfer_len) = match req.data {
            Some(data) => (data.as_mut_ptr().cast::<libc::c_void>(), data.len()),
            None => (std::ptr::null_mut(), 0),
        };

        let mut hdr = SgIoHdr {
            interface_id: libc::c_int::from(b'S'),
            dxfer_direction,
            cmd_len: req.cdb.len() as libc::c_uchar,
            mx_sb_len: req.sense.len() as libc::c_uchar,
            iovec_count: 0,
            dxfer_len: dxfer_len as libc::c_uint,
            dxferp,
            cmdp: req.cdb.as_ptr().cast_mut(),
            sbp: req.sense.as_mut_ptr(),
            timeout: req.timeout.as_millis() as libc::c_uint,
            flags: 0,
            pack_id: 0,
            usr_ptr: std::ptr::null_mut(),
            status: 0,
            masked_status: 0,
            msg_status: 0,
            sb_len_wr: 0,
            host_status: 0,
            driver_status: 0,
            resid: 0,
            duration: 0,
            info: 0,
        };

        // SAFETY: all pointers in the header stay valid for the duration of
        // the blocking ioctl; the kernel writes only within the declared
        // lengths.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), SG_IO, &mut hdr) };
        if rc != 0 {
            return Err(io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO));
        }

        Ok(Completion {
            status: hdr.status,
            masked_status: hdr.masked_status,
            host_status: hdr.host_status,
            driver_status: hdr.driver_status,
            resid: hdr.resid,
            duration_ms: hdr.duration,
            sense_len: hdr.sb_len_wr,
        })
    }
}
