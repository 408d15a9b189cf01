// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Typed views of the three overlapping error models reported by the SG
//! layer: the SAM SCSI status byte, the host (transport) status, and the
//! driver status word split into a status nibble and suggestion flags.

/// SAM SCSI status byte, as reported in `sg_io_hdr.status`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScsiStatus {
    Good = 0x00,
    CheckCondition = 0x02,
    ConditionMet = 0x04,
    Busy = 0x08,
    ReservationConflict = 0x18,
    TaskSetFull = 0x28,
    AcaActive = 0x30,
    TaskAborted = 0x40,
    /// Any other status code defined in SAM-x or reserved.
    Other(u8),
}

impl From<u8> for ScsiStatus {
    fn from(b: u8) -> Self {
        match b {
            0x00 => ScsiStatus::Good,
            0x02 => ScsiStatus::CheckCondition,
            0x04 => ScsiStatus::ConditionMet,
            0x08 => ScsiStatus::Busy,
            0x18 => ScsiStatus::ReservationConflict,
            0x28 => ScsiStatus::TaskSetFull,
            0x30 => ScsiStatus::AcaActive,
            0x40 => ScsiStatus::TaskAborted,
            other => ScsiStatus::Other(other),
        }
    }
}

/// Raw value of CHECK CONDITION, used where the status byte is compared
/// before typed decoding.
pub const CHECK_CONDITION: u8 = 0x02;

/// Host (transport) status codes from the SG layer (`DID_*`).
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    /// No transport-level error.
    Ok = 0x00,
    NoConnect = 0x01,
    BusBusy = 0x02,
    TimeOut = 0x03,
    BadTarget = 0x04,
    Abort = 0x05,
    Parity = 0x06,
    Error = 0x07,
    Reset = 0x08,
    BadIntr = 0x09,
    Passthrough = 0x0A,
    /// The low-level driver wants a retry (soft, transient).
    SoftError = 0x0B,
    Other(u16),
}

impl From<u16> for HostStatus {
    fn from(v: u16) -> Self {
        match v {
            0x00 => HostStatus::Ok,
            0x01 => HostStatus::NoConnect,
            0x02 => HostStatus::BusBusy,
            0x03 => HostStatus::TimeOut,
            0x04 => HostStatus::BadTarget,
            0x05 => HostStatus::Abort,
            0x06 => HostStatus::Parity,
            0x07 => HostStatus::Error,
            0x08 => HostStatus::Reset,
            0x09 => HostStatus::BadIntr,
            0x0A => HostStatus::Passthrough,
            0x0B => HostStatus::SoftError,
            other => HostStatus::Other(other),
        }
    }
}

/// Status nibble of the driver status word (`driver_status & 0x0F`).
pub const DRIVER_STATUS_MASK: u16 = 0x0F;
/// Flags nibble of the driver status word (`driver_status & 0xF0`).
pub const DRIVER_FLAGS_MASK: u16 = 0xF0;
/// Driver status indicating that valid sense data accompanies the reply.
pub const DRIVER_SENSE: u16 = 0x08;

bitflags::bitflags! {
    /// Suggestion flags carried in the upper nibble of the driver status.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct DriverFlags: u16 {
        const SUGGEST_RETRY  = 0x10;
        const SUGGEST_ABORT  = 0x20;
        const SUGGEST_REMAP  = 0x30;
        const SUGGEST_DIE    = 0x40;
        const SUGGEST_SENSE  = 0x80;
    }
}

/// Sense key signaled for a transient unit-attention condition.
pub const SENSE_KEY_UNIT_ATTENTION: u8 = 0x06;
