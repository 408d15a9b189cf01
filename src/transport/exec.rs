// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! The command executor: submits one instance as a single synchronous
//! exchange, then classifies the outcome across the three overlapping
//! error models (SCSI status, host status, ATA passthrough via SCSI).

use tracing::{debug, warn};

use crate::{
    models::{
        error::{Result, SgError},
        sense::{ATA_RETURN_DESC_MARKER, ATA_RETURN_DESC_OFFSET, decode_sense},
        status::{CHECK_CONDITION, DRIVER_SENSE, HostStatus},
    },
    transport::{
        channel::ExchangeRequest,
        command::{DataBuffer, SgCommand},
        device::SgDevice,
    },
};

/// Bit 5 of CDB byte 2: the ATA CK_COND flag requesting register return
/// via CHECK CONDITION.
const ATA_CK_COND: u8 = 1 << 5;

/// Submits `cmd` to the device and classifies the completion.
///
/// On any device- or transport-reported failure the sense buffer is
/// decoded into the handle's error slot before `Io` is returned; a
/// submission failure carries the OS errno and leaves the slot untouched.
/// The executor never retries.
pub fn execute(dev: &mut SgDevice, cmd: &mut SgCommand<'_>) -> Result<()> {
    let desc = cmd.code.descriptor();
    debug!(
        device = dev.name(),
        command = desc.name,
        opcode = desc.opcode,
        sa = desc.service_action,
        cdb = %hex::encode(&cmd.cdb[..cmd.cdb_len]),
        "sending command"
    );

    let completion = {
        let data = match &mut cmd.buf {
            DataBuffer::None => None,
            DataBuffer::Borrowed(b) => Some(&mut b[..]),
            DataBuffer::Owned(p) => Some(p.as_mut_slice()),
        };
        dev.exchange(ExchangeRequest {
            cdb: &cmd.cdb[..cmd.cdb_len],
            direction: cmd.direction,
            data,
            sense: &mut cmd.sense,
            timeout: dev.runtime().command_timeout,
        })
    };

    let completion = match completion {
        Ok(c) => c,
        Err(errno) => {
            warn!(device = dev.name(), errno, "SG_IO submission failed");
            return Err(SgError::Io { errno });
        },
    };
    cmd.record_completion(&completion);

    // The exchange went through; default outcome is a clean error slot.
    dev.clear_error();

    debug!(
        device = dev.name(),
        command = desc.name,
        status = cmd.status,
        masked_status = cmd.masked_status,
        host_status = cmd.host_status,
        driver_status = cmd.driver_status(),
        driver_flags = ?cmd.driver_flags(),
        "command done"
    );

    // ATA passthrough with CK_COND set always completes through CHECK
    // CONDITION; the raw status is not meaningful on its own.
    if cmd.code.is_ata_passthrough() && cmd.cdb[2] & ATA_CK_COND != 0 {
        if cmd.status != CHECK_CONDITION {
            dev.set_error(decode_sense(cmd.sense_data()));
            return Err(SgError::io());
        }

        if cmd.driver_status() == DRIVER_SENSE
            && cmd.sense_len > ATA_RETURN_DESC_OFFSET
            && cmd.sense[ATA_RETURN_DESC_OFFSET] != ATA_RETURN_DESC_MARKER
        {
            dev.set_error(decode_sense(cmd.sense_data()));
            return Err(SgError::io());
        }

        // Expected signaling path for a successful passthrough.
        cmd.status = 0;
    }

    if cmd.status != 0
        || cmd.host_status() != HostStatus::Ok
        || (cmd.driver_status() != 0 && cmd.driver_status() != DRIVER_SENSE)
    {
        warn!(
            device = dev.name(),
            command = desc.name,
            status = cmd.status,
            host_status = cmd.host_status,
            driver_status = cmd.driver_status(),
            "command failed"
        );
        if cmd.sense_len > 0 {
            debug!(
                device = dev.name(),
                sense = %hex::encode(cmd.sense_data()),
                "sense data"
            );
        } else {
            debug!(device = dev.name(), "no sense data");
        }

        dev.set_error(decode_sense(cmd.sense_data()));
        return Err(SgError::io());
    }

    if cmd.resid != 0 {
        debug!(device = dev.name(), resid = cmd.resid, "transfer missing data");
        cmd.transfer_len = cmd.transfer_len.saturating_sub(cmd.resid.max(0) as usize);
    }

    debug!(
        device = dev.name(),
        command = desc.name,
        duration_ms = cmd.duration_ms,
        transferred = cmd.transfer_len,
        "command executed"
    );

    Ok(())
}
