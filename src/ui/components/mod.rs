// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Tool forms structured for MVU-style updates.

pub mod base64;
pub mod hash;
pub mod json;
pub mod proto;
pub mod result_panel;
