// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Static table of command definitions (opcode, service action, length,
/// transfer direction).
pub mod catalog;
/// Crate-wide error taxonomy.
pub mod error;
/// Sense-data decoding and ASC/ASCQ descriptions.
pub mod sense;
/// SCSI, host and driver status models reported by the SG layer.
pub mod status;
