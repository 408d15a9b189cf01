// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! ZBC OUT zone operations — 16-byte CDB:
//!   [0]      = 0x94 (ZBC OUT)
//!   [1]      = SERVICE ACTION (open/close/finish/reset)
//!   [2]..[9] = ZONE ID (zone start LBA, big-endian)
//!   [14]     = ALL (bit 0)
//!   [15]     = CONTROL

use crate::{
    models::{
        catalog::{CDB_MAX_LEN, CommandCode},
        error::{Result, SgError},
    },
    utils::pack_be,
};

/// Fill an OPEN ZONE / CLOSE ZONE / FINISH ZONE / RESET WRITE POINTER CDB.
///
/// * `zone_lba` – start LBA of the target zone, ignored when `all` is set
/// * `all`      – apply the operation to every applicable zone
pub fn build_zone_op(
    cdb: &mut [u8; CDB_MAX_LEN],
    code: CommandCode,
    zone_lba: u64,
    all: bool,
) -> Result<()> {
    if !matches!(
        code,
        CommandCode::OpenZone
            | CommandCode::CloseZone
            | CommandCode::FinishZone
            | CommandCode::ResetWritePointer
    ) {
        return Err(SgError::invalid(format!("{code} is not a zone operation")));
    }

    let desc = code.descriptor();
    cdb.fill(0);
    cdb[0] = desc.opcode; // 0x94
    cdb[1] = desc.service_action & 0x1F;
    pack_be(&mut cdb[2..10], zone_lba);
    cdb[14] = u8::from(all);
    Ok(())
}
