// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Per-command CDB fillers.
//!
//! Instance construction only fixes the CDB length; each filler here
//! writes the complete CDB, opcode and service action included, into the
//! instance's 16-byte CDB array. Bytes past the declared command length
//! are padding and never reach the wire.

/// ATA PASS-THROUGH (12) and (16).
pub mod ata;
/// INQUIRY (6).
pub mod inquiry;
/// READ (16) and WRITE (16).
pub mod rw;
/// READ CAPACITY (16).
pub mod read_capacity;
/// REPORT ZONES.
pub mod report_zones;
/// SYNCHRONIZE CACHE (16).
pub mod sync_cache;
/// TEST UNIT READY (6).
pub mod test_unit_ready;
/// OPEN/CLOSE/FINISH ZONE and RESET WRITE POINTER.
pub mod zone_op;
