// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! ATA PASS-THROUGH (12) / (16) CDB fillers (SAT).
//!
//! Register placement follows the SAT layout: each 16-bit taskfile
//! register pair is stored as (previous/"hob", current) bytes; the 48-bit
//! LBA is spread over bytes 7..13 of the 16-byte variant.

use crate::models::catalog::{CDB_MAX_LEN, CommandCode};

bitflags::bitflags! {
    /// Byte 2 of an ATA PASS-THROUGH CDB.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct AtaFlags: u8 {
        /// Return taskfile registers via an intentional CHECK CONDITION.
        const CK_COND  = 1 << 5;
        /// Transfer from the device (read).
        const T_DIR    = 1 << 3;
        /// Transfer length counts blocks, not bytes.
        const BYT_BLOK = 1 << 2;
        /// Transfer length lives in the sector count register.
        const T_LENGTH_SECT = 0x02;
        /// Transfer length lives in the feature register.
        const T_LENGTH_FEAT = 0x01;
    }
}

/// ATA taskfile registers of one tunneled command.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtaTaskFile {
    pub features: u16,
    pub count: u16,
    pub lba: u64,
    pub device: u8,
    pub command: u8,
}

/// Fill an ATA PASS-THROUGH (16) CDB.
///
/// * `protocol` – ATA protocol field (bits 4:1 of byte 1)
/// * `extend`   – 48-bit command, enables the "hob" register bytes
pub fn build_ata16(
    cdb: &mut [u8; CDB_MAX_LEN],
    protocol: u8,
    extend: bool,
    flags: AtaFlags,
    tf: &AtaTaskFile,
) {
    cdb.fill(0);
    cdb[0] = CommandCode::Ata16.descriptor().opcode; // 0x85
    cdb[1] = (protocol & 0x0F) << 1 | u8::from(extend);
    cdb[2] = flags.bits();
    cdb[3] = (tf.features >> 8) as u8;
    cdb[4] = tf.features as u8;
    cdb[5] = (tf.count >> 8) as u8;
    cdb[6] = tf.count as u8;
    cdb[7] = (tf.lba >> 24) as u8;
    cdb[8] = tf.lba as u8;
    cdb[9] = (tf.lba >> 32) as u8;
    cdb[10] = (tf.lba >> 8) as u8;
    cdb[11] = (tf.lba >> 40) as u8;
    cdb[12] = (tf.lba >> 16) as u8;
    cdb[13] = tf.device;
    cdb[14] = tf.command;
}

/// Fill an ATA PASS-THROUGH (12) CDB (28-bit commands only).
pub fn build_ata12(
    cdb: &mut [u8; CDB_MAX_LEN],
    protocol: u8,
    flags: AtaFlags,
    tf: &AtaTaskFile,
) {
    cdb.fill(0);
    cdb[0] = CommandCode::Ata12.descriptor().opcode; // 0xA1
    cdb[1] = (protocol & 0x0F) << 1;
    cdb[2] = flags.bits();
    cdb[3] = tf.features as u8;
    cdb[4] = tf.count as u8;
    cdb[5] = tf.lba as u8;
    cdb[6] = (tf.lba >> 8) as u8;
    cdb[7] = (tf.lba >> 16) as u8;
    cdb[8] = tf.device;
    cdb[9] = tf.command;
}
