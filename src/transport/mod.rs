// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Page-aligned data buffers for zero-copy channels.
pub mod buffer;
/// The synchronous exchange primitive and its SG_IO implementation.
pub mod channel;
/// The per-call command instance.
pub mod command;
/// Opaque device handle carrying the channel and the error slot.
pub mod device;
/// The command executor and its status classification.
pub mod exec;
