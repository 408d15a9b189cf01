// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use thiserror::Error;

/// Errors surfaced by the command transport.
///
/// Construction errors (`InvalidArgument`, `OutOfMemory`) never reach the
/// executor. `Io` always reflects a device- or transport-reported failure;
/// when sense data was available it has been decoded into the device
/// handle's [`DeviceError`](crate::models::sense::DeviceError) slot before
/// the error is returned.
#[derive(Debug, Error)]
pub enum SgError {
    /// Bad command code or inconsistent buffer arguments. Never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Page-aligned buffer allocation failed during instance build.
    #[error("no memory for a {0} B data buffer")]
    OutOfMemory(usize),

    /// Device or transport reported a failure; `errno` carries the
    /// underlying numeric cause (EIO for device-level failures).
    #[error("I/O error (errno {errno})")]
    Io { errno: i32 },

    /// The readiness probe exhausted its retry budget.
    #[error("device not ready")]
    DeviceNotReady,
}

impl SgError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        SgError::InvalidArgument(msg.into())
    }

    /// Device-level I/O failure (the errno the original transport reports
    /// for a failed exchange).
    pub fn io() -> Self {
        SgError::Io { errno: libc::EIO }
    }
}

pub type Result<T> = std::result::Result<T, SgError>;
