// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Readiness probe and identification query with device-specific retry
/// policy.
pub mod probe;
