// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Resolves configuration file paths.
pub mod cli;
/// Runtime configuration loaded from YAML.
pub mod config;
/// Tracing subscriber setup.
pub mod logger;
