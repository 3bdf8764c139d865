// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Business logic behind the tools, free of any UI types.

pub mod codec;
pub mod protoc;
