// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Static catalog of the supported ZBC/ZAC commands.
//!
//! Each command is described by its name, opcode, service action, fixed CDB
//! length and data-transfer direction. The catalog is indexed by
//! [`CommandCode`]; lookup is a direct array index and never fails for a
//! valid enum member.

use std::fmt;

use crate::models::error::SgError;

/// Upper bound on CDB length across the catalog (16-byte CDBs).
pub const CDB_MAX_LEN: usize = 16;

/// Declared direction of the data transfer for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirection {
    /// No data buffer is moved.
    None,
    /// The device fills the data buffer.
    FromDevice,
    /// The data buffer is sent to the device.
    ToDevice,
}

/// Immutable, catalog-resident definition of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    /// Human-readable identifier, for diagnostics only.
    pub name: &'static str,
    /// Primary operation code.
    pub opcode: u8,
    /// Secondary selector, 0 when unused.
    pub service_action: u8,
    /// Fixed CDB length for this operation.
    pub cdb_length: usize,
    /// Declared transfer direction.
    pub direction: DataDirection,
}

/// Closed enumeration of the catalog. The discriminants double as catalog
/// indices.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCode {
    TestUnitReady = 0,
    Inquiry,
    ReadCapacity,
    Read,
    Write,
    SyncCache,
    ReportZones,
    OpenZone,
    CloseZone,
    FinishZone,
    ResetWritePointer,
    SetZones,
    SetWritePointer,
    Ata12,
    Ata16,
}

/// Number of catalog entries.
pub const CMD_NUM: usize = 15;

static CATALOG: [CommandDescriptor; CMD_NUM] = [
    CommandDescriptor {
        name: "TEST UNIT READY",
        opcode: 0x00,
        service_action: 0,
        cdb_length: 6,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "INQUIRY",
        opcode: 0x12,
        service_action: 0,
        cdb_length: 6,
        direction: DataDirection::FromDevice,
    },
    CommandDescriptor {
        name: "READ CAPACITY 16",
        opcode: 0x9E,
        service_action: 0x10,
        cdb_length: 16,
        direction: DataDirection::FromDevice,
    },
    CommandDescriptor {
        name: "READ 16",
        opcode: 0x88,
        service_action: 0,
        cdb_length: 16,
        direction: DataDirection::FromDevice,
    },
    CommandDescriptor {
        name: "WRITE 16",
        opcode: 0x8A,
        service_action: 0,
        cdb_length: 16,
        direction: DataDirection::ToDevice,
    },
    CommandDescriptor {
        name: "SYNCHRONIZE CACHE 16",
        opcode: 0x91,
        service_action: 0,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "REPORT ZONES",
        opcode: 0x95,
        service_action: 0x00,
        cdb_length: 16,
        direction: DataDirection::FromDevice,
    },
    CommandDescriptor {
        name: "OPEN ZONE",
        opcode: 0x94,
        service_action: 0x03,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "CLOSE ZONE",
        opcode: 0x94,
        service_action: 0x01,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "FINISH ZONE",
        opcode: 0x94,
        service_action: 0x02,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "RESET WRITE POINTER",
        opcode: 0x94,
        service_action: 0x04,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "SET ZONES",
        opcode: 0x9F,
        service_action: 0x15,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "SET WRITE POINTER",
        opcode: 0x9F,
        service_action: 0x16,
        cdb_length: 16,
        direction: DataDirection::None,
    },
    // The ATA passthrough entries leave the transfer direction to the call
    // site; the catalog default is no transfer.
    CommandDescriptor {
        name: "ATA 12",
        opcode: 0xA1,
        service_action: 0,
        cdb_length: 12,
        direction: DataDirection::None,
    },
    CommandDescriptor {
        name: "ATA 16",
        opcode: 0x85,
        service_action: 0,
        cdb_length: 16,
        direction: DataDirection::None,
    },
];

impl CommandCode {
    /// O(1) catalog lookup. Infallible for any enum member.
    pub fn descriptor(self) -> &'static CommandDescriptor {
        &CATALOG[self as usize]
    }

    /// Validates an untrusted numeric code against the catalog range.
    pub fn from_index(idx: usize) -> Result<Self, SgError> {
        const ORDER: [CommandCode; CMD_NUM] = [
            CommandCode::TestUnitReady,
            CommandCode::Inquiry,
            CommandCode::ReadCapacity,
            CommandCode::Read,
            CommandCode::Write,
            CommandCode::SyncCache,
            CommandCode::ReportZones,
            CommandCode::OpenZone,
            CommandCode::CloseZone,
            CommandCode::FinishZone,
            CommandCode::ResetWritePointer,
            CommandCode::SetZones,
            CommandCode::SetWritePointer,
            CommandCode::Ata12,
            CommandCode::Ata16,
        ];

        ORDER
            .get(idx)
            .copied()
            .ok_or_else(|| SgError::invalid(format!("command code {idx} out of range")))
    }

    pub fn is_ata_passthrough(self) -> bool {
        matches!(self, CommandCode::Ata12 | CommandCode::Ata16)
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Name lookup for a numeric code from an untrusted source (diagnostics
/// only).
pub fn command_name(idx: usize) -> &'static str {
    match CommandCode::from_index(idx) {
        Ok(code) => code.descriptor().name,
        Err(_) => "(UNKNOWN COMMAND)",
    }
}
