// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Domain layer: tool identifiers, the result slot, and validated requests.

pub mod proto_request;
pub mod result;
pub mod tool;
