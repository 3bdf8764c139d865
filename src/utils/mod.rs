// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Shared helper utilities reused by UI and business logic.

pub mod hash;

/// Compute the MD5 hex digest of a string.
pub use hash::md5_hex;
