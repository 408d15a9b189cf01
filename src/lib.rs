//! This crate provides an SG_IO command transport for zoned block devices.
// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Handles configuration, config-path resolution, and logging.
pub mod cfg;
/// Implements per-command CDB fillers (control blocks).
pub mod control_block;
/// Retry-bearing operations built on top of the executor.
pub mod handlers;
/// Defines the command catalog, status models, sense data and errors.
pub mod models;
/// Command instances, the SG_IO channel, device handles and the executor.
pub mod transport;
/// Provides utility functions used throughout the crate.
pub mod utils;
