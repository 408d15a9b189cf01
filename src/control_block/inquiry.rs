// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! INQUIRY — 6-byte CDB (SPC):
//!   [0] = 0x12 (INQUIRY)
//!   [1] = EVPD (bit 0)
//!   [2] = PAGE CODE
//!   [3]..[4] = ALLOCATION LENGTH (big-endian)
//!   [5] = CONTROL

use crate::{
    models::catalog::{CDB_MAX_LEN, CommandCode},
    utils::pack_be,
};

/// Fill a standard (non-VPD) INQUIRY CDB.
#[inline]
pub fn build_inquiry(cdb: &mut [u8; CDB_MAX_LEN], allocation_len: u16) {
    cdb.fill(0);
    cdb[0] = CommandCode::Inquiry.descriptor().opcode; // 0x12
    pack_be(&mut cdb[3..5], u64::from(allocation_len));
}

/// Fill an INQUIRY CDB requesting a VPD page.
#[inline]
pub fn build_inquiry_vpd(cdb: &mut [u8; CDB_MAX_LEN], page: u8, allocation_len: u16) {
    build_inquiry(cdb, allocation_len);
    cdb[1] = 0x01; // EVPD
    cdb[2] = page;
}
