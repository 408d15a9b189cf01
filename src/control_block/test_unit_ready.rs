// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use crate::models::catalog::{CDB_MAX_LEN, CommandCode};

/// Build a standard TEST UNIT READY CDB with the given control byte.
#[inline]
pub fn build_test_unit_ready(cdb: &mut [u8; CDB_MAX_LEN], control: u8) {
    cdb.fill(0);
    cdb[0] = CommandCode::TestUnitReady.descriptor().opcode; // 0x00
    cdb[5] = control;
}
