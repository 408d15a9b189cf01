use zbc_sg_rs::{
    models::{catalog::CommandCode, error::SgError},
    transport::command::SgCommand,
};

#[test]
fn test_build_fixes_length_and_zero_fills() {
    let cmd = SgCommand::new(CommandCode::TestUnitReady).expect("build");
    assert_eq!(cmd.cdb().len(), 6);
    assert!(cmd.cdb().iter().all(|&b| b == 0));

    let cmd = SgCommand::allocate(CommandCode::ReportZones, 512).expect("build");
    assert_eq!(cmd.cdb().len(), 16);
    assert!(cmd.cdb().iter().all(|&b| b == 0));
    assert_eq!(cmd.transfer_len(), 512);
    assert!(cmd.data().iter().all(|&b| b == 0));
}

#[test]
fn test_empty_borrowed_buffer_rejected() {
    let mut empty: [u8; 0] = [];
    let err = SgCommand::with_buffer(CommandCode::Inquiry, &mut empty)
        .err()
        .expect("ambiguous buffer must be rejected");
    assert!(matches!(err, SgError::InvalidArgument(_)));
}

#[test]
fn test_missing_buffer_for_transfer_command_rejected() {
    let err = SgCommand::allocate(CommandCode::Inquiry, 0)
        .err()
        .expect("INQUIRY moves data, a buffer is required");
    assert!(matches!(err, SgError::InvalidArgument(_)));

    // No transfer declared: zero length is fine.
    assert!(SgCommand::allocate(CommandCode::SyncCache, 0).is_ok());
}

#[test]
fn test_release_is_idempotent() {
    let mut cmd = SgCommand::allocate(CommandCode::ReportZones, 4096).expect("build");
    cmd.release_buffer();
    cmd.release_buffer();
    assert!(cmd.data().is_empty());
}

#[test]
fn test_release_leaves_borrowed_buffer_alone() {
    let mut caller_buf = vec![0xA5u8; 128];
    {
        let mut cmd =
            SgCommand::with_buffer(CommandCode::Read, &mut caller_buf).expect("build");
        assert_eq!(cmd.transfer_len(), 128);
        cmd.release_buffer();
        cmd.release_buffer();
    }
    assert!(caller_buf.iter().all(|&b| b == 0xA5));
}

#[test]
fn test_drop_releases_owned_buffer() {
    // No explicit release; Drop must free the page-aligned allocation.
    let cmd = SgCommand::allocate(CommandCode::Read, 8192).expect("build");
    assert_eq!(cmd.transfer_len(), 8192);
    drop(cmd);
}
