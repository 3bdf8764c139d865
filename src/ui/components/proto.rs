// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! `.proto` code generation form.
//!
//! Picking paths and running the generator are side effects, so the form
//! only emits [`ProtoCommand`]s and waits for the matching reply message.
//! Commands and replies carry the form's [`FormId`]; a reply addressed to an
//! earlier form instance is dropped.

use std::path::PathBuf;

use eframe::egui;

use crate::error::{DialogError, ToolResult};
use crate::models::proto_request::ProtoGenerationRequest;
use crate::models::tool::FormId;

/// Form state: the two selections plus in-flight markers for replies.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ProtoModel {
    id: FormId,
    source: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    awaiting_source: bool,
    awaiting_output_dir: bool,
    generating: bool,
}

/// Messages emitted by the view or delivered back from commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtoMsg {
    RequestPickSource,
    RequestPickOutputDir,
    SourcePicked {
        form: FormId,
        picked: Result<PathBuf, DialogError>,
    },
    OutputDirPicked {
        form: FormId,
        picked: Result<PathBuf, DialogError>,
    },
    Generate,
    GenerationFinished {
        form: FormId,
        outcome: ToolResult<String>,
    },
}

/// Side effects requested by the form, tagged with the requesting form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtoCommand {
    PickSource { form: FormId },
    PickOutputDir { form: FormId },
    Generate {
        form: FormId,
        request: ProtoGenerationRequest,
    },
}

impl ProtoModel {
    /// Empty form owned by instance `id`.
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub fn output_dir(&self) -> Option<&PathBuf> {
        self.output_dir.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }
}

/// Apply a message to the form. Returns an outcome for the result panel when relevant.
///
/// Replies addressed to another form instance, or that this form is not
/// waiting for, are dropped.
pub fn update(
    model: &mut ProtoModel,
    msg: ProtoMsg,
    cmds: &mut Vec<ProtoCommand>,
) -> Option<ToolResult<String>> {
    match msg {
        ProtoMsg::RequestPickSource => {
            model.awaiting_source = true;
            cmds.push(ProtoCommand::PickSource { form: model.id });
            None
        }
        ProtoMsg::RequestPickOutputDir => {
            model.awaiting_output_dir = true;
            cmds.push(ProtoCommand::PickOutputDir { form: model.id });
            None
        }
        ProtoMsg::SourcePicked { form, picked } => {
            if form != model.id || !std::mem::take(&mut model.awaiting_source) {
                return None;
            }
            match picked {
                Ok(path) => {
                    model.source = Some(path);
                    None
                }
                Err(err) => Some(Err(err.into())),
            }
        }
        ProtoMsg::OutputDirPicked { form, picked } => {
            if form != model.id || !std::mem::take(&mut model.awaiting_output_dir) {
                return None;
            }
            match picked {
                Ok(path) => {
                    model.output_dir = Some(path);
                    None
                }
                Err(err) => Some(Err(err.into())),
            }
        }
        ProtoMsg::Generate => {
            if model.generating {
                return None;
            }
            match ProtoGenerationRequest::new(model.source.as_deref(), model.output_dir.as_deref()) {
                Ok(request) => {
                    model.generating = true;
                    cmds.push(ProtoCommand::Generate {
                        form: model.id,
                        request,
                    });
                    None
                }
                Err(err) => Some(Err(err)),
            }
        }
        ProtoMsg::GenerationFinished { form, outcome } => {
            if form != model.id || !std::mem::take(&mut model.generating) {
                return None;
            }
            Some(outcome)
        }
    }
}

/// Render the pickers, their current selections, and the generate button.
pub fn view(ui: &mut egui::Ui, model: &ProtoModel) -> Vec<ProtoMsg> {
    let mut msgs = Vec::new();

    let pick_file = egui::Button::new(format!(
        "{} Select .proto file",
        egui_phosphor::regular::FILE
    ));
    if ui.add_enabled(!model.awaiting_source, pick_file).clicked() {
        msgs.push(ProtoMsg::RequestPickSource);
    }
    selection_label(ui, model.source(), "No file selected");

    ui.add_space(6.0);

    let pick_dir = egui::Button::new(format!(
        "{} Select output directory",
        egui_phosphor::regular::FOLDER_OPEN
    ));
    if ui.add_enabled(!model.awaiting_output_dir, pick_dir).clicked() {
        msgs.push(ProtoMsg::RequestPickOutputDir);
    }
    selection_label(ui, model.output_dir(), "No directory selected");

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let generate = egui::Button::new(format!(
            "{} Generate .go file",
            egui_phosphor::regular::PLAY
        ));
        if ui
            .add_enabled(!model.is_generating(), generate)
            .on_disabled_hover_text("Generation in progress")
            .clicked()
        {
            msgs.push(ProtoMsg::Generate);
        }
        if model.is_generating() {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });

    msgs
}

fn selection_label(ui: &mut egui::Ui, path: Option<&PathBuf>, empty: &str) {
    match path {
        Some(path) => {
            ui.label(egui::RichText::new(path.display().to_string()).monospace());
        }
        None => {
            ui.label(
                egui::RichText::new(empty)
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::models::proto_request::MISSING_SELECTION;

    const FORM: FormId = FormId(7);

    fn picked_model() -> ProtoModel {
        let mut model = ProtoModel::new(FORM);
        let mut cmds = Vec::new();
        update(&mut model, ProtoMsg::RequestPickSource, &mut cmds);
        update(
            &mut model,
            ProtoMsg::SourcePicked {
                form: FORM,
                picked: Ok(PathBuf::from("/p/a.proto")),
            },
            &mut cmds,
        );
        update(&mut model, ProtoMsg::RequestPickOutputDir, &mut cmds);
        update(
            &mut model,
            ProtoMsg::OutputDirPicked {
                form: FORM,
                picked: Ok(PathBuf::from("/out")),
            },
            &mut cmds,
        );
        assert_eq!(
            cmds,
            vec![
                ProtoCommand::PickSource { form: FORM },
                ProtoCommand::PickOutputDir { form: FORM }
            ]
        );
        model
    }

    #[test]
    fn generate_without_selections_fails_validation_without_command() {
        let mut model = ProtoModel::new(FORM);
        let mut cmds = Vec::new();

        let outcome = update(&mut model, ProtoMsg::Generate, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            outcome,
            Some(Err(ToolError::Validation(MISSING_SELECTION.into())))
        );
        assert!(!model.is_generating());
    }

    #[test]
    fn generate_with_selections_enqueues_single_request() {
        let mut model = picked_model();
        let mut cmds = Vec::new();

        assert_eq!(update(&mut model, ProtoMsg::Generate, &mut cmds), None);
        // A second click while running is ignored.
        assert_eq!(update(&mut model, ProtoMsg::Generate, &mut cmds), None);

        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            ProtoCommand::Generate { form, request } => {
                assert_eq!(*form, FORM);
                assert_eq!(request.source(), PathBuf::from("/p/a.proto"));
                assert_eq!(request.output_dir(), PathBuf::from("/out"));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(model.is_generating());
    }

    #[test]
    fn generation_reply_is_surfaced_once() {
        let mut model = picked_model();
        let mut cmds = Vec::new();
        update(&mut model, ProtoMsg::Generate, &mut cmds);

        let outcome = update(
            &mut model,
            ProtoMsg::GenerationFinished {
                form: FORM,
                outcome: Ok("done".into()),
            },
            &mut cmds,
        );
        assert_eq!(outcome, Some(Ok("done".into())));

        let stale = update(
            &mut model,
            ProtoMsg::GenerationFinished {
                form: FORM,
                outcome: Ok("again".into()),
            },
            &mut cmds,
        );
        assert_eq!(stale, None);
    }

    #[test]
    fn reply_for_other_form_leaves_pending_generation_untouched() {
        let mut model = picked_model();
        let mut cmds = Vec::new();
        update(&mut model, ProtoMsg::Generate, &mut cmds);

        let foreign = update(
            &mut model,
            ProtoMsg::GenerationFinished {
                form: FormId(3),
                outcome: Err(ToolError::Execution {
                    reason: "exit status 1".into(),
                    output: "old form".into(),
                }),
            },
            &mut cmds,
        );

        assert_eq!(foreign, None);
        assert!(model.is_generating());

        let own = update(
            &mut model,
            ProtoMsg::GenerationFinished {
                form: FORM,
                outcome: Ok("mine".into()),
            },
            &mut cmds,
        );
        assert_eq!(own, Some(Ok("mine".into())));
    }

    #[test]
    fn pick_reply_for_other_form_is_ignored() {
        let mut model = ProtoModel::new(FORM);
        let mut cmds = Vec::new();
        update(&mut model, ProtoMsg::RequestPickSource, &mut cmds);

        let foreign = update(
            &mut model,
            ProtoMsg::SourcePicked {
                form: FormId(3),
                picked: Ok(PathBuf::from("/old/form.proto")),
            },
            &mut cmds,
        );
        assert_eq!(foreign, None);
        assert_eq!(model.source(), None);

        update(
            &mut model,
            ProtoMsg::SourcePicked {
                form: FORM,
                picked: Ok(PathBuf::from("/new/form.proto")),
            },
            &mut cmds,
        );
        assert_eq!(model.source(), Some(&PathBuf::from("/new/form.proto")));
    }

    #[test]
    fn cancelled_dialog_keeps_previous_selection() {
        let mut model = picked_model();
        let mut cmds = Vec::new();
        update(&mut model, ProtoMsg::RequestPickSource, &mut cmds);

        let outcome = update(
            &mut model,
            ProtoMsg::SourcePicked {
                form: FORM,
                picked: Err(DialogError::NoFileSelected),
            },
            &mut cmds,
        );

        assert_eq!(outcome.unwrap().unwrap_err().to_string(), "No file selected");
        assert_eq!(model.source(), Some(&PathBuf::from("/p/a.proto")));
    }

    #[test]
    fn unrequested_pick_reply_is_ignored() {
        let mut model = ProtoModel::new(FORM);
        let mut cmds = Vec::new();

        let outcome = update(
            &mut model,
            ProtoMsg::OutputDirPicked {
                form: FORM,
                picked: Ok(PathBuf::from("/elsewhere")),
            },
            &mut cmds,
        );

        assert_eq!(outcome, None);
        assert_eq!(model.output_dir(), None);
    }
}
