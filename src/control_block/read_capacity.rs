// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    models::catalog::{CDB_MAX_LEN, CommandCode},
    utils::pack_be,
};

/// Reply length of READ CAPACITY (16).
pub const READ_CAPACITY_REPLY_LEN: usize = 32;

/// Build a READ CAPACITY (16) CDB (SERVICE ACTION IN, sa 0x10).
///
/// * `allocation_len` – bytes the device may return (bytes 10..14)
#[inline]
pub fn build_read_capacity16(cdb: &mut [u8; CDB_MAX_LEN], allocation_len: u32) {
    let desc = CommandCode::ReadCapacity.descriptor();
    cdb.fill(0);
    cdb[0] = desc.opcode; // 0x9E
    cdb[1] = desc.service_action & 0x1F; // 0x10
    pack_be(&mut cdb[10..14], u64::from(allocation_len));
}
