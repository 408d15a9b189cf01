use zbc_sg_rs::models::sense::{asc_ascq_to_str, decode_sense};

use crate::unit_tests::fake_channel::fixed_sense;

#[test]
fn test_descriptor_format() {
    // Current descriptor format: key in byte 1, ASC/ASCQ in bytes 2..4.
    let mut sense = vec![0u8; 8];
    sense[0] = 0x72;
    sense[1] = 0xF5; // upper nibble must be masked off
    sense[2] = 0x21;
    sense[3] = 0x04;

    let err = decode_sense(&sense);
    assert_eq!(err.sk, 0x05);
    assert_eq!(err.asc_ascq, 0x2104);
    assert_eq!(asc_ascq_to_str(err.asc(), err.ascq()), "Unaligned write command");

    // Deferred variant decodes identically.
    sense[0] = 0x73;
    assert_eq!(decode_sense(&sense), err);
}

#[test]
fn test_fixed_format() {
    // Fixed format: key in byte 2, ASC/ASCQ in bytes 12..14.
    let err = decode_sense(&fixed_sense(0x06, 0x29, 0x00));
    assert_eq!(err.sk, 0x06);
    assert_eq!(err.asc_ascq, 0x2900);

    let mut deferred = fixed_sense(0x05, 0x24, 0x00);
    deferred[0] = 0x71;
    let err = decode_sense(&deferred);
    assert_eq!((err.sk, err.asc_ascq), (0x05, 0x2400));
}

#[test]
fn test_valid_bit_ignored() {
    let mut sense = fixed_sense(0x03, 0x11, 0x00);
    sense[0] |= 0x80; // the valid bit does not change the format
    let err = decode_sense(&sense);
    assert_eq!((err.sk, err.asc_ascq), (0x03, 0x1100));
}

#[test]
fn test_empty_and_unrecognized() {
    assert!(decode_sense(&[]).is_empty());

    let mut sense = vec![0u8; 18];
    sense[0] = 0x7F; // unknown response code: not an error, just empty
    sense[2] = 0x05;
    assert!(decode_sense(&sense).is_empty());
}

#[test]
fn test_truncated_buffers() {
    // Too short for the claimed format: fields stay at zero.
    assert!(decode_sense(&[0x70, 0, 0x05]).is_empty());
    assert!(decode_sense(&[0x72]).is_empty());
}
