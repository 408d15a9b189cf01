use zbc_sg_rs::models::{
    catalog::{CDB_MAX_LEN, CMD_NUM, CommandCode, DataDirection, command_name},
    error::SgError,
};

#[test]
fn test_descriptors_fit_the_cdb_ceiling() {
    for idx in 0..CMD_NUM {
        let code = CommandCode::from_index(idx).expect("valid index");
        let desc = code.descriptor();
        assert!(desc.cdb_length <= CDB_MAX_LEN, "{}", desc.name);
        assert!(desc.cdb_length >= 6, "{}", desc.name);
    }
}

#[test]
fn test_well_known_entries() {
    let tur = CommandCode::TestUnitReady.descriptor();
    assert_eq!((tur.opcode, tur.cdb_length), (0x00, 6));
    assert_eq!(tur.direction, DataDirection::None);

    let inq = CommandCode::Inquiry.descriptor();
    assert_eq!((inq.opcode, inq.cdb_length), (0x12, 6));
    assert_eq!(inq.direction, DataDirection::FromDevice);

    let rz = CommandCode::ReportZones.descriptor();
    assert_eq!((rz.opcode, rz.service_action, rz.cdb_length), (0x95, 0x00, 16));

    let reset = CommandCode::ResetWritePointer.descriptor();
    assert_eq!((reset.opcode, reset.service_action), (0x94, 0x04));

    let wr = CommandCode::Write.descriptor();
    assert_eq!(wr.direction, DataDirection::ToDevice);
}

#[test]
fn test_from_index_rejects_out_of_range() {
    assert!(CommandCode::from_index(CMD_NUM - 1).is_ok());
    let err = CommandCode::from_index(CMD_NUM).expect_err("out of range");
    assert!(matches!(err, SgError::InvalidArgument(_)));
}

#[test]
fn test_name_for_untrusted_codes() {
    assert_eq!(command_name(0), "TEST UNIT READY");
    assert_eq!(command_name(CMD_NUM), "(UNKNOWN COMMAND)");
    assert_eq!(command_name(usize::MAX), "(UNKNOWN COMMAND)");
}

#[test]
fn test_ata_passthrough_predicate() {
    assert!(CommandCode::Ata12.is_ata_passthrough());
    assert!(CommandCode::Ata16.is_ata_passthrough());
    assert!(!CommandCode::Read.is_ata_passthrough());
}
