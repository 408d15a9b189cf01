//! Scripted stand-in for the SG_IO channel.

use std::collections::VecDeque;

use zbc_sg_rs::{
    cfg::config::RuntimeConfig,
    transport::{
        channel::{Completion, ExchangeRequest, SgExchange},
        device::SgDevice,
    },
};

pub struct FakeReply {
    result: Result<Completion, i32>,
    sense: Vec<u8>,
    data: Vec<u8>,
}

impl FakeReply {
    /// A clean completion: all statuses zero.
    pub fn ok() -> Self {
        Self::completion(Completion::default())
    }

    pub fn completion(c: Completion) -> Self {
        Self { result: Ok(c), sense: Vec::new(), data: Vec::new() }
    }

    /// A submission-level failure with the given OS errno.
    pub fn errno(e: i32) -> Self {
        Self { result: Err(e), sense: Vec::new(), data: Vec::new() }
    }

    /// Sense bytes written back by the channel; `sense_len` follows.
    pub fn with_sense(mut self, sense: &[u8]) -> Self {
        self.sense = sense.to_vec();
        if let Ok(c) = &mut self.result {
            c.sense_len = sense.len() as u8;
        }
        self
    }

    /// Data bytes written into the command's data buffer.
    pub fn with_data(mut self, data: &[u8]) -> Self {
        self.data = data.to_vec();
        self
    }
}

pub struct FakeChannel {
    replies: VecDeque<FakeReply>,
}

impl SgExchange for FakeChannel {
    fn exchange(&mut self, req: ExchangeRequest<'_>) -> Result<Completion, i32> {
        let reply = self
            .replies
            .pop_front()
            .expect("channel received more exchanges than scripted");

        req.sense[..reply.sense.len()].copy_from_slice(&reply.sense);
        if let Some(data) = req.data {
            data[..reply.data.len()].copy_from_slice(&reply.data);
        }

        reply.result
    }
}

/// A device handle wired to a scripted channel with default runtime
/// settings.
pub fn fake_device(replies: Vec<FakeReply>) -> SgDevice {
    SgDevice::with_channel(
        "/dev/fake-sg",
        Box::new(FakeChannel { replies: replies.into() }),
        RuntimeConfig::default(),
    )
}

/// Fixed-format sense (0x70) with the given key and ASC/ASCQ.
pub fn fixed_sense(key: u8, asc: u8, ascq: u8) -> Vec<u8> {
    let mut sense = vec![0u8; 18];
    sense[0] = 0x70;
    sense[2] = key;
    sense[7] = 0x0A;
    sense[12] = asc;
    sense[13] = ascq;
    sense
}

/// Descriptor-format sense (0x72) carrying an ATA return descriptor whose
/// marker byte sits at offset 21.
pub fn ata_descriptor_sense(marker: u8) -> Vec<u8> {
    let mut sense = vec![0u8; 22];
    sense[0] = 0x72;
    sense[7] = 14; // additional sense length: one ATA status return descriptor
    sense[8] = 0x09; // descriptor type: ATA status return
    sense[9] = 12;
    sense[21] = marker;
    sense
}
