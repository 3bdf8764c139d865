// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Desktop toolbox offering MD5 hashing, Base64 encode/decode, JSON
//! formatting, and protobuf code generation behind one egui window.

pub mod app;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;
