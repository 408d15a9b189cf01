// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{io, path::Path};

use crate::{
    cfg::config::{Config, RuntimeConfig},
    models::sense::DeviceError,
    transport::channel::{Completion, ExchangeRequest, SgExchange, SgIoChannel},
};

/// Opaque device handle: a display name for diagnostics, the transport
/// channel, the runtime configuration, and the per-handle error slot.
///
/// No internal locking: concurrent calls against one handle race on the
/// error slot by contract, the caller serializes.
pub struct SgDevice {
    name: String,
    channel: Box<dyn SgExchange>,
    runtime: RuntimeConfig,
    errno: DeviceError,
}

impl SgDevice {
    /// Opens an SG device node for command submission.
    pub fn open<P: AsRef<Path>>(path: P, cfg: &Config) -> io::Result<Self> {
        let name = path.as_ref().display().to_string();
        let channel = SgIoChannel::open(path)?;
        Ok(Self {
            name,
            channel: Box::new(channel),
            runtime: cfg.runtime.clone(),
            errno: DeviceError::default(),
        })
    }

    /// Builds a handle around an arbitrary channel. Used by emulated
    /// backends and tests.
    pub fn with_channel(
        name: impl Into<String>,
        channel: Box<dyn SgExchange>,
        runtime: RuntimeConfig,
    ) -> Self {
        Self {
            name: name.into(),
            channel,
            runtime,
            errno: DeviceError::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Normalized error state of the most recent failed exchange. Consult
    /// after an `Io` error; the executor only ever writes it.
    pub fn last_error(&self) -> DeviceError {
        self.errno
    }

    pub(crate) fn set_error(&mut self, err: DeviceError) {
        self.errno = err;
    }

    pub(crate) fn clear_error(&mut self) {
        self.errno = DeviceError::default();
    }

    pub(crate) fn exchange(&mut self, req: ExchangeRequest<'_>) -> Result<Completion, i32> {
        self.channel.exchange(req)
    }
}
