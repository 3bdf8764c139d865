// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Root Model-View-Update kernel: active tool, shared result, and commands.

use std::path::PathBuf;

use crate::error::{DialogError, ToolResult};
use crate::logic::protoc::{self, CodeGenerator};
use crate::models::proto_request::ProtoGenerationRequest;
use crate::models::result::ResultSink;
use crate::models::tool::{FormId, ToolKind};
use crate::ui::components::base64::{self, Base64Model, Base64Msg};
use crate::ui::components::hash::{self, HashModel, HashMsg};
use crate::ui::components::json::{self, JsonModel, JsonMsg};
use crate::ui::components::proto::{self, ProtoCommand, ProtoModel, ProtoMsg};

/// Form state of the tool currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolForm {
    Hash(HashModel),
    Base64(Base64Model),
    Json(JsonModel),
    Proto(ProtoModel),
}

impl ToolForm {
    /// Build a fresh, empty form for `kind`.
    ///
    /// `id` tags the side effects the form requests; forms without side
    /// effects do not keep it.
    pub fn new(kind: ToolKind, id: FormId) -> Self {
        match kind {
            ToolKind::Hash => ToolForm::Hash(HashModel::default()),
            ToolKind::Base64 => ToolForm::Base64(Base64Model::default()),
            ToolKind::JsonFormat => ToolForm::Json(JsonModel::default()),
            ToolKind::ProtoGenerate => ToolForm::Proto(ProtoModel::new(id)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            ToolForm::Hash(_) => ToolKind::Hash,
            ToolForm::Base64(_) => ToolKind::Base64,
            ToolForm::Json(_) => ToolKind::JsonFormat,
            ToolForm::Proto(_) => ToolKind::ProtoGenerate,
        }
    }
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Active tool form; `None` until the user picks a tool.
    pub active: Option<ToolForm>,
    /// Output or error text of the last operation.
    pub result: ResultSink,
    /// Text waiting to be handed to the system clipboard by the view layer.
    pub clipboard: Option<String>,
    /// Latest status message for the bottom bar.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    /// Last issued form id; bumped on every tool selection.
    last_form_id: u64,
}

impl AppModel {
    pub fn active_kind(&self) -> Option<ToolKind> {
        self.active.as_ref().map(ToolForm::kind)
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    SelectTool(ToolKind),
    Hash(HashMsg),
    Base64(Base64Msg),
    Json(JsonMsg),
    Proto(ProtoMsg),
    CopyResult,
}

/// Commands represent side-effects executed off the UI thread.
///
/// Each carries the id of the requesting form so its reply can be matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PickProtoFile {
        form: FormId,
    },
    PickOutputDir {
        form: FormId,
    },
    Generate {
        form: FormId,
        request: ProtoGenerationRequest,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SelectTool(kind) => {
            model.last_form_id += 1;
            let id = FormId(model.last_form_id);
            tracing::debug!(tool = kind.label(), form = id.0, "tool selected");
            model.active = Some(ToolForm::new(kind, id));
            model.result.reset();
        }
        Msg::CopyResult => {
            model.clipboard = Some(model.result.text().to_string());
            model.status = Some("Result copied to clipboard.".into());
        }
        Msg::Hash(m) => {
            if let Some(ToolForm::Hash(form)) = model.active.as_mut() {
                let outcome = hash::update(form, m);
                record(model, outcome);
            }
        }
        Msg::Base64(m) => {
            if let Some(ToolForm::Base64(form)) = model.active.as_mut() {
                let outcome = base64::update(form, m);
                record(model, outcome);
            }
        }
        Msg::Json(m) => {
            if let Some(ToolForm::Json(form)) = model.active.as_mut() {
                let outcome = json::update(form, m);
                record(model, outcome);
            }
        }
        Msg::Proto(m) => {
            let Some(ToolForm::Proto(form)) = model.active.as_mut() else {
                tracing::debug!(?m, "dropping proto message for inactive form");
                return;
            };
            let mut proto_cmds = Vec::new();
            let outcome = proto::update(form, m, &mut proto_cmds);
            for c in proto_cmds {
                match c {
                    ProtoCommand::PickSource { form } => cmds.push(Command::PickProtoFile { form }),
                    ProtoCommand::PickOutputDir { form } => {
                        cmds.push(Command::PickOutputDir { form })
                    }
                    ProtoCommand::Generate { form, request } => {
                        model.status = Some(format!("Generating from {}…", request.source_name()));
                        cmds.push(Command::Generate { form, request });
                    }
                }
            }
            record(model, outcome);
        }
    }
}

/// Execute a command to completion and return the resulting message.
///
/// Blocks for as long as the dialog or generator process runs.
pub fn run_command(cmd: Command, generator: &dyn CodeGenerator) -> Msg {
    match cmd {
        Command::PickProtoFile { form } => {
            let file = rfd::FileDialog::new()
                .set_title("Select .proto file")
                .pick_file();
            Msg::Proto(ProtoMsg::SourcePicked {
                form,
                picked: picked(file, DialogError::NoFileSelected),
            })
        }
        Command::PickOutputDir { form } => {
            let dir = rfd::FileDialog::new()
                .set_title("Select output directory")
                .pick_folder();
            Msg::Proto(ProtoMsg::OutputDirPicked {
                form,
                picked: picked(dir, DialogError::NoDirectorySelected),
            })
        }
        Command::Generate { form, request } => Msg::Proto(ProtoMsg::GenerationFinished {
            form,
            outcome: protoc::generate(&request, generator),
        }),
    }
}

fn picked(path: Option<PathBuf>, none: DialogError) -> Result<PathBuf, DialogError> {
    path.ok_or(none)
}

/// Write a form outcome into the shared result and mirror it in the status bar.
fn record(model: &mut AppModel, outcome: Option<ToolResult<String>>) {
    let Some(outcome) = outcome else {
        return;
    };
    model.status = Some(match &outcome {
        Ok(_) => "Done.".to_string(),
        Err(err) => {
            tracing::debug!(%err, "tool operation failed");
            "Operation failed.".to_string()
        }
    });
    model.result.record(outcome);
}
