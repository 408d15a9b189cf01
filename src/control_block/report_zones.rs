// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! REPORT ZONES — 16-byte CDB (ZBC):
//!   [0]        = 0x95 (ZBC IN)
//!   [1]        = SERVICE ACTION (0x00)
//!   [2]..[9]   = ZONE START LBA (big-endian)
//!   [10]..[13] = ALLOCATION LENGTH (big-endian)
//!   [14]       = PARTIAL (bit 7) | REPORTING OPTIONS (bits 5:0)
//!   [15]       = CONTROL

use crate::{
    models::catalog::{CDB_MAX_LEN, CommandCode},
    utils::pack_be,
};

/// Zone reporting filters accepted by REPORT ZONES.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingOptions {
    /// List all zones.
    #[default]
    All = 0x00,
    /// Zones in the empty condition.
    Empty = 0x01,
    /// Implicitly opened zones.
    ImplicitOpen = 0x02,
    /// Explicitly opened zones.
    ExplicitOpen = 0x03,
    /// Closed zones.
    Closed = 0x04,
    /// Full zones.
    Full = 0x05,
    /// Read-only zones.
    ReadOnly = 0x06,
    /// Offline zones.
    Offline = 0x07,
    /// Zones with a reset-write-pointer recommendation.
    NeedResetWp = 0x10,
    /// Zones held in the non-sequential-write-resources-active state.
    NonSeqActive = 0x11,
    /// Zones not in the sequential-write-required type.
    NotWp = 0x3F,
}

/// Fill a REPORT ZONES CDB.
///
/// * `start_lba`      – lowest zone start LBA to report from
/// * `allocation_len` – size of the reply buffer
/// * `partial`        – report only what fits in the allocation length
#[inline]
pub fn build_report_zones(
    cdb: &mut [u8; CDB_MAX_LEN],
    start_lba: u64,
    allocation_len: u32,
    options: ReportingOptions,
    partial: bool,
) {
    let desc = CommandCode::ReportZones.descriptor();
    cdb.fill(0);
    cdb[0] = desc.opcode; // 0x95
    cdb[1] = desc.service_action & 0x1F; // 0x00
    pack_be(&mut cdb[2..10], start_lba);
    pack_be(&mut cdb[10..14], u64::from(allocation_len));
    cdb[14] = (u8::from(partial) << 7) | (options as u8 & 0x3F);
}
