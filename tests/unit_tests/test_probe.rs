use zbc_sg_rs::{
    handlers::probe::{INQUIRY_REPLY_LEN, inquiry, test_unit_ready},
    models::error::SgError,
    transport::channel::Completion,
};

use crate::unit_tests::fake_channel::{FakeReply, fake_device, fixed_sense};

fn unit_attention() -> FakeReply {
    FakeReply::completion(Completion {
        status: 0x02,
        driver_status: 0x08,
        ..Default::default()
    })
    .with_sense(&fixed_sense(0x06, 0x29, 0x00))
}

fn soft_error() -> FakeReply {
    // DID_SOFT_ERROR from the host adapter, no sense data.
    FakeReply::completion(Completion { host_status: 0x0B, ..Default::default() })
}

#[test]
fn test_tur_succeeds_within_budget() {
    // Four UNIT ATTENTION replies, then success on the fifth attempt.
    let mut dev = fake_device(vec![
        unit_attention(),
        unit_attention(),
        unit_attention(),
        unit_attention(),
        FakeReply::ok(),
    ]);

    test_unit_ready(&mut dev).expect("fifth attempt succeeds");
}

#[test]
fn test_tur_budget_exhausted() {
    let mut dev = fake_device((0..5).map(|_| unit_attention()).collect());

    let err = test_unit_ready(&mut dev).expect_err("budget exhausted");
    assert!(matches!(err, SgError::DeviceNotReady));
}

#[test]
fn test_tur_retries_on_soft_host_error() {
    let mut dev = fake_device(vec![soft_error(), FakeReply::ok()]);
    test_unit_ready(&mut dev).expect("soft error is retryable");
}

#[test]
fn test_tur_propagates_non_retryable_failure() {
    // ILLEGAL REQUEST is not a transient condition; exactly one exchange
    // may happen (the scripted channel panics on a second one).
    let failing = FakeReply::completion(Completion {
        status: 0x02,
        driver_status: 0x08,
        ..Default::default()
    })
    .with_sense(&fixed_sense(0x05, 0x20, 0x00));

    let mut dev = fake_device(vec![failing]);

    let err = test_unit_ready(&mut dev).expect_err("non-retryable");
    assert!(matches!(err, SgError::Io { .. }));
    assert_eq!(dev.last_error().sk, 0x05);
}

#[test]
fn test_inquiry_copies_fixed_reply_length() {
    let mut payload = vec![0u8; INQUIRY_REPLY_LEN];
    payload[0] = 0x14; // host-managed zoned block device
    payload[8..16].copy_from_slice(b"VENDOR  ");

    let reply = FakeReply::ok().with_data(&payload);
    let mut dev = fake_device(vec![reply]);

    let mut out = vec![0xEEu8; INQUIRY_REPLY_LEN + 8];
    inquiry(&mut dev, &mut out).expect("inquiry");

    assert_eq!(&out[..INQUIRY_REPLY_LEN], &payload[..]);
    // Bytes past the fixed reply length stay untouched.
    assert!(out[INQUIRY_REPLY_LEN..].iter().all(|&b| b == 0xEE));
}

#[test]
fn test_inquiry_rejects_short_buffer() {
    // No exchange is scripted: the argument check fires first.
    let mut dev = fake_device(vec![]);
    let mut out = vec![0u8; INQUIRY_REPLY_LEN - 1];

    let err = inquiry(&mut dev, &mut out).expect_err("short reply buffer");
    assert!(matches!(err, SgError::InvalidArgument(_)));
}

#[test]
fn test_inquiry_failure_propagates() {
    let failing = FakeReply::completion(Completion {
        status: 0x02,
        driver_status: 0x08,
        ..Default::default()
    })
    .with_sense(&fixed_sense(0x05, 0x25, 0x00));

    let mut dev = fake_device(vec![failing]);
    let mut out = vec![0u8; INQUIRY_REPLY_LEN];

    let err = inquiry(&mut dev, &mut out).expect_err("check condition");
    assert!(matches!(err, SgError::Io { .. }));
    assert_eq!(dev.last_error().asc_ascq, 0x2500);
}
