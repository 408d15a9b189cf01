// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::{
    models::catalog::{CDB_MAX_LEN, CommandCode},
    utils::pack_be,
};

/// Build a SYNCHRONIZE CACHE (16) CDB.
///
/// `lba == 0 && blocks == 0` flushes the whole cache.
#[inline]
pub fn build_sync_cache16(cdb: &mut [u8; CDB_MAX_LEN], lba: u64, blocks: u32) {
    cdb.fill(0);
    cdb[0] = CommandCode::SyncCache.descriptor().opcode; // 0x91
    pack_be(&mut cdb[2..10], lba);
    pack_be(&mut cdb[10..14], u64::from(blocks));
}
