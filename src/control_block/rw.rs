// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! READ (16) / WRITE (16) CDB layout (SBC):
//!   [0]      = opcode
//!   [1]      = RD/WRPROTECT, DPO, FUA bits
//!   [2]..[9] = LOGICAL BLOCK ADDRESS (big-endian)
//!   [10]..[13] = TRANSFER LENGTH in blocks (big-endian)
//!   [14]     = group number
//!   [15]     = CONTROL

use crate::{
    models::catalog::{CDB_MAX_LEN, CommandCode},
    utils::pack_be,
};

/// Build a READ (16) CDB.
///
/// * `lba`    – 64-bit Logical Block Address to start reading from
/// * `blocks` – number of contiguous blocks to transfer
/// * `flags`  – RDPROTECT / DPO / FUA bits (byte 1)
#[inline]
pub fn build_read16(cdb: &mut [u8; CDB_MAX_LEN], lba: u64, blocks: u32, flags: u8) {
    fill_rw16(cdb, CommandCode::Read, lba, blocks, flags);
}

/// Build a WRITE (16) CDB.
#[inline]
pub fn build_write16(cdb: &mut [u8; CDB_MAX_LEN], lba: u64, blocks: u32, flags: u8) {
    fill_rw16(cdb, CommandCode::Write, lba, blocks, flags);
}

fn fill_rw16(
    cdb: &mut [u8; CDB_MAX_LEN],
    code: CommandCode,
    lba: u64,
    blocks: u32,
    flags: u8,
) {
    cdb.fill(0);
    cdb[0] = code.descriptor().opcode;
    cdb[1] = flags;
    pack_be(&mut cdb[2..10], lba);
    pack_be(&mut cdb[10..14], u64::from(blocks));
}
