// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Sense-data normalization.
//!
//! The executor stores the outcome of the most recent exchange on the
//! device handle as a [`DeviceError`]: the 4-bit sense key plus the 16-bit
//! additional-sense code/qualifier pair. Both fixed (0x70/0x71) and
//! descriptor (0x72/0x73) sense formats are recognized; any other response
//! code leaves the fields at zero.

use std::fmt;

/// Upper bound on the sense buffer written back by the channel.
pub const SENSE_MAX_LEN: usize = 64;

/// Offset of the ATA return-descriptor marker in descriptor-format sense.
pub const ATA_RETURN_DESC_OFFSET: usize = 21;
/// Expected marker byte for an ATA passthrough register return.
pub const ATA_RETURN_DESC_MARKER: u8 = 0x50;

/// Normalized error state of the most recent exchange on a device handle.
///
/// Reset to zeros at the start of every successfully submitted exchange,
/// overwritten whenever a failing exchange carried a diagnostic payload.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct DeviceError {
    /// 4-bit sense key, or 0 if none.
    pub sk: u8,
    /// Additional sense code (high byte) and qualifier (low byte), or 0.
    pub asc_ascq: u16,
}

impl DeviceError {
    pub fn is_empty(&self) -> bool {
        self.sk == 0 && self.asc_ascq == 0
    }

    pub fn asc(&self) -> u8 {
        (self.asc_ascq >> 8) as u8
    }

    pub fn ascq(&self) -> u8 {
        (self.asc_ascq & 0xFF) as u8
    }
}

impl fmt::Debug for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceError")
            .field("sk", &format_args!("{:#x}", self.sk))
            .field("asc_ascq", &format_args!("{:#06x}", self.asc_ascq))
            .field("description", &asc_ascq_to_str(self.asc(), self.ascq()))
            .finish()
    }
}

/// Extract the sense key and ASC/ASCQ pair from a raw sense buffer.
///
/// Returns an empty [`DeviceError`] for an empty buffer or an unrecognized
/// response code; that by itself is not an error.
pub fn decode_sense(sense: &[u8]) -> DeviceError {
    let mut err = DeviceError::default();
    if sense.is_empty() {
        return err;
    }

    match sense[0] & 0x7F {
        // Descriptor format, current (0x72) or deferred (0x73).
        0x72 | 0x73 if sense.len() >= 4 => {
            err.sk = sense[1] & 0x0F;
            err.asc_ascq = (u16::from(sense[2]) << 8) | u16::from(sense[3]);
        },
        // Fixed format, current (0x70) or deferred (0x71).
        0x70 | 0x71 if sense.len() >= 14 => {
            err.sk = sense[2] & 0x0F;
            err.asc_ascq = (u16::from(sense[12]) << 8) | u16::from(sense[13]);
        },
        _ => {},
    }

    err
}

/// Return the SPC description for a given ASC/ASCQ pair.
///
/// Pairs absent from the table come back as `"UNSPECIFIED / vendor
/// specific"`.
#[inline]
pub fn asc_ascq_to_str(asc: u8, ascq: u8) -> &'static str {
    hot_table(asc, ascq).unwrap_or("UNSPECIFIED / vendor specific")
}

fn hot_table(asc: u8, ascq: u8) -> Option<&'static str> {
    Some(match (asc, ascq) {
        (0x00, 0x00) => "No additional sense information",
        (0x04, 0x01) => "Logical unit is in process of becoming ready",
        (0x0C, 0x00) => "Write error",
        (0x11, 0x00) => "Unrecovered read error",
        (0x20, 0x00) => "Invalid command operation code",
        (0x21, 0x00) => "Logical block address out of range",
        (0x21, 0x04) => "Unaligned write command",
        (0x21, 0x05) => "Write boundary violation",
        (0x21, 0x06) => "Attempt to read invalid data",
        (0x24, 0x00) => "Invalid field in CDB",
        (0x25, 0x00) => "Logical unit not supported",
        (0x29, 0x00) => "Power on, reset, or bus device reset occurred",
        (0x2C, 0x0D) => "Zone is in the offline condition",
        (0x2C, 0x0E) => "Zone is in the read-only condition",
        (0x55, 0x0E) => "Insufficient zone resources",
        _ => return None,
    })
}
