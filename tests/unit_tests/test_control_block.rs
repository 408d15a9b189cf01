use hex_literal::hex;
use zbc_sg_rs::{
    control_block::{
        ata::{AtaFlags, AtaTaskFile, build_ata16},
        inquiry::build_inquiry,
        report_zones::{ReportingOptions, build_report_zones},
        rw::{build_read16, build_write16},
        sync_cache::build_sync_cache16,
        test_unit_ready::build_test_unit_ready,
        zone_op::build_zone_op,
    },
    models::catalog::{CDB_MAX_LEN, CommandCode},
};

#[test]
fn test_test_unit_ready_cdb() {
    let mut cdb = [0xFFu8; CDB_MAX_LEN];
    build_test_unit_ready(&mut cdb, 0);
    assert_eq!(cdb, [0u8; CDB_MAX_LEN]);
}

#[test]
fn test_inquiry_cdb() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_inquiry(&mut cdb, 96);
    assert_eq!(&cdb[..6], hex!("12 00 00 0060 00"));
}

#[test]
fn test_read16_cdb() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_read16(&mut cdb, 0x0123_4567_89AB_CDEF, 0x1122_3344, 0x08);
    assert_eq!(cdb, hex!("88 08 0123456789ABCDEF 11223344 00 00"));
}

#[test]
fn test_write16_cdb() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_write16(&mut cdb, 0x10, 8, 0);
    assert_eq!(cdb, hex!("8A 00 0000000000000010 00000008 00 00"));
}

#[test]
fn test_sync_cache16_cdb() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_sync_cache16(&mut cdb, 0, 0);
    assert_eq!(cdb[0], 0x91);
    assert!(cdb[1..].iter().all(|&b| b == 0));
}

#[test]
fn test_report_zones_cdb() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_report_zones(&mut cdb, 0x4000, 0x0002_0000, ReportingOptions::Empty, true);
    assert_eq!(cdb, hex!("95 00 0000000000004000 00020000 81 00"));
}

#[test]
fn test_zone_op_cdbs() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    build_zone_op(&mut cdb, CommandCode::ResetWritePointer, 0x8000, false)
        .expect("zone op");
    assert_eq!(cdb, hex!("94 04 0000000000008000 00000000 00 00"));

    build_zone_op(&mut cdb, CommandCode::OpenZone, 0, true).expect("zone op");
    assert_eq!(cdb, hex!("94 03 0000000000000000 00000000 01 00"));

    assert!(build_zone_op(&mut cdb, CommandCode::Read, 0, false).is_err());
}

#[test]
fn test_ata16_check_condition_bit() {
    let mut cdb = [0u8; CDB_MAX_LEN];
    let tf = AtaTaskFile { count: 1, command: 0xEC, ..Default::default() };
    build_ata16(
        &mut cdb,
        0x04, // PIO data-in
        false,
        AtaFlags::CK_COND | AtaFlags::T_DIR | AtaFlags::BYT_BLOK | AtaFlags::T_LENGTH_SECT,
        &tf,
    );

    assert_eq!(cdb[0], 0x85);
    assert_eq!(cdb[1], 0x04 << 1);
    assert_ne!(cdb[2] & (1 << 5), 0, "CK_COND must sit in bit 5 of byte 2");
    assert_eq!(cdb[6], 1);
    assert_eq!(cdb[14], 0xEC);
}
