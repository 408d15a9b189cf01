// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Readiness probe and identification query.
//!
//! These are the retry-bearing reference consumers of the executor: the
//! executor itself never retries, retry policy lives here.

use tracing::debug;

use crate::{
    control_block::{inquiry::build_inquiry, test_unit_ready::build_test_unit_ready},
    models::{
        catalog::CommandCode,
        error::{Result, SgError},
        status::{HostStatus, SENSE_KEY_UNIT_ATTENTION},
    },
    transport::{command::SgCommand, device::SgDevice, exec::execute},
};

/// Fixed reply length of the standard INQUIRY data read by [`inquiry`].
pub const INQUIRY_REPLY_LEN: usize = 96;

/// Probes device readiness with TEST UNIT READY.
///
/// A failed attempt is retried exactly when the host status reports a
/// soft (transient) error or the fixed-format sense key is UNIT
/// ATTENTION. The attempt budget comes from the runtime configuration
/// (default 5); exhausting it yields [`SgError::DeviceNotReady`]. Any
/// non-retryable failure propagates immediately.
pub fn test_unit_ready(dev: &mut SgDevice) -> Result<()> {
    let budget = dev.runtime().tur_retries;

    for attempt in 1..=budget {
        let mut cmd = SgCommand::new(CommandCode::TestUnitReady)?;
        build_test_unit_ready(cmd.cdb_mut(), 0);

        match execute(dev, &mut cmd) {
            Ok(()) => return Ok(()),
            Err(err) => {
                let sense = cmd.sense_data();
                let retryable = cmd.host_status() == HostStatus::SoftError
                    || (sense.len() > 2 && sense[2] == SENSE_KEY_UNIT_ATTENTION);

                if !retryable {
                    return Err(err);
                }

                debug!(
                    device = dev.name(),
                    attempt,
                    budget,
                    "unit attention, retrying readiness probe"
                );
            },
        }
    }

    Err(SgError::DeviceNotReady)
}

/// Runs a standard INQUIRY and copies exactly [`INQUIRY_REPLY_LEN`] bytes
/// into `out`. A shorter output buffer is rejected. Executes once, no
/// retry; the instance is released before return, success or failure.
pub fn inquiry(dev: &mut SgDevice, out: &mut [u8]) -> Result<()> {
    if out.len() < INQUIRY_REPLY_LEN {
        return Err(SgError::invalid(format!(
            "INQUIRY reply buffer too small: {} < {INQUIRY_REPLY_LEN}",
            out.len()
        )));
    }

    let mut cmd = SgCommand::allocate(CommandCode::Inquiry, INQUIRY_REPLY_LEN)?;
    build_inquiry(cmd.cdb_mut(), INQUIRY_REPLY_LEN as u16);

    execute(dev, &mut cmd)?;

    out[..INQUIRY_REPLY_LEN].copy_from_slice(&cmd.data()[..INQUIRY_REPLY_LEN]);
    Ok(())
}
