// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Writes `value` into `field` most-significant-byte first, regardless of
/// host endianness. CDB fields are always big-endian on the wire.
///
/// `field` may be 1 to 8 bytes wide; values wider than the field are
/// truncated to its width.
pub fn pack_be(field: &mut [u8], value: u64) {
    debug_assert!(field.len() <= size_of::<u64>());

    for (shift, byte) in field.iter_mut().rev().enumerate() {
        *byte = (value >> (shift * 8)) as u8;
    }
}

/// Reads a big-endian field of up to 8 bytes into a native integer,
/// zero-extending.
pub fn unpack_be(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= size_of::<u64>());

    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
