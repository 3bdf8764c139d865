// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Invocation of the external protobuf code generator.
//!
//! The generator is reached through the [`CodeGenerator`] trait so the UI
//! flow can be exercised without a `protoc` binary on the path.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::GeneratorConfig;
use crate::error::{ToolError, ToolResult};
use crate::models::proto_request::ProtoGenerationRequest;

/// Fully resolved command line for one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl GeneratorInvocation {
    /// `<program> --proto_path=<dir> <out_flag>=<output> <source>`
    pub fn for_request(config: &GeneratorConfig, request: &ProtoGenerationRequest) -> Self {
        Self {
            program: config.program.clone(),
            args: vec![
                flag_with_path("--proto_path", request.source_dir()),
                flag_with_path(&config.plugin_out_flag, request.output_dir()),
                request.source().as_os_str().to_os_string(),
            ],
        }
    }
}

fn flag_with_path(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push("=");
    arg.push(path.as_os_str());
    arg
}

/// Captured result of a finished generator process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    /// Standard output followed by standard error.
    pub combined: String,
}

/// Something able to run a generator invocation to completion.
pub trait CodeGenerator: Send + Sync {
    /// Block until the process exits. `Err` means it could not be launched.
    fn run(&self, invocation: &GeneratorInvocation) -> io::Result<GeneratorOutput>;

    /// Settings used to build invocations.
    fn config(&self) -> &GeneratorConfig;
}

/// Runs the configured generator as a child process.
#[derive(Clone, Debug, Default)]
pub struct ProtocGenerator {
    config: GeneratorConfig,
}

impl ProtocGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl CodeGenerator for ProtocGenerator {
    fn run(&self, invocation: &GeneratorInvocation) -> io::Result<GeneratorOutput> {
        tracing::info!(program = %invocation.program, args = ?invocation.args, "launching generator");
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::info!(status = %output.status, "generator exited");
        Ok(GeneratorOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            combined,
        })
    }

    fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Run the generator for a validated request.
///
/// # Errors
///
/// Returns [`ToolError::Execution`] when the process cannot be launched or
/// exits unsuccessfully; the captured output is carried verbatim.
pub fn generate(
    request: &ProtoGenerationRequest,
    generator: &dyn CodeGenerator,
) -> ToolResult<String> {
    let invocation = GeneratorInvocation::for_request(generator.config(), request);

    let output = generator.run(&invocation).map_err(|err| {
        tracing::warn!(%err, program = %invocation.program, "generator failed to launch");
        ToolError::Execution {
            reason: err.to_string(),
            output: String::new(),
        }
    })?;

    if !output.success {
        let reason = match output.exit_code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        tracing::warn!(%reason, "generator reported failure");
        return Err(ToolError::Execution {
            reason,
            output: output.combined,
        });
    }

    Ok(format!(
        "Successfully generated .go file from {} to {}",
        request.source_name(),
        request.output_dir().display()
    ))
}

/// Validate the two selections, then run the generator.
///
/// Nothing is launched when either selection is missing.
pub fn generate_from_source(
    source: Option<&Path>,
    output_dir: Option<&Path>,
    generator: &dyn CodeGenerator,
) -> ToolResult<String> {
    let request = ProtoGenerationRequest::new(source, output_dir)?;
    generate(&request, generator)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Fake generator that records invocations and replays a canned outcome.
    pub struct FakeGenerator {
        config: GeneratorConfig,
        outcome: Result<GeneratorOutput, io::ErrorKind>,
        calls: AtomicUsize,
        last: Mutex<Option<GeneratorInvocation>>,
    }

    impl FakeGenerator {
        pub fn succeeding() -> Self {
            Self::with_outcome(Ok(GeneratorOutput {
                success: true,
                exit_code: Some(0),
                combined: String::new(),
            }))
        }

        pub fn failing(code: i32, combined: &str) -> Self {
            Self::with_outcome(Ok(GeneratorOutput {
                success: false,
                exit_code: Some(code),
                combined: combined.to_string(),
            }))
        }

        pub fn missing_binary() -> Self {
            Self::with_outcome(Err(io::ErrorKind::NotFound))
        }

        fn with_outcome(outcome: Result<GeneratorOutput, io::ErrorKind>) -> Self {
            Self {
                config: GeneratorConfig::default(),
                outcome,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_invocation(&self) -> Option<GeneratorInvocation> {
            self.last.lock().unwrap().clone()
        }
    }

    impl CodeGenerator for FakeGenerator {
        fn run(&self, invocation: &GeneratorInvocation) -> io::Result<GeneratorOutput> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(invocation.clone());
            match &self.outcome {
                Ok(output) => Ok(output.clone()),
                Err(kind) => Err(io::Error::new(*kind, "program not found")),
            }
        }

        fn config(&self) -> &GeneratorConfig {
            &self.config
        }
    }
}
