//! Container engine detection
//!
//! Podman is preferred when both engines are installed. An engine counts as
//! available only if `<engine> info` succeeds.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::deploy::DeployError;
use crate::cli::runner::{CommandRunner, OutputMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Podman,
    Docker,
}

impl EngineKind {
    /// Get the command name for this engine
    pub fn command_name(&self) -> &'static str {
        match self {
            EngineKind::Podman => "podman",
            EngineKind::Docker => "docker",
        }
    }

    /// Detection order
    pub fn all() -> &'static [EngineKind] {
        &[EngineKind::Podman, EngineKind::Docker]
    }

    /// Volume option enabling SELinux relabelling, podman only
    pub fn relabel_option(&self) -> Option<&'static str> {
        match self {
            EngineKind::Podman => Some("Z"),
            EngineKind::Docker => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub kind: EngineKind,
    pub executable: PathBuf,
}

/// PATH lookup through `which`
pub fn which_lookup(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Locate an engine executable, honouring an explicit choice.
pub fn find_engine(preferred: Option<EngineKind>, lookup: impl Fn(&str) -> Option<PathBuf>) -> Result<Engine, DeployError> {
    let candidates: Vec<EngineKind> = match preferred {
        Some(kind) => vec![kind],
        None => EngineKind::all().to_vec(),
    };

    for kind in candidates {
        if let Some(executable) = lookup(kind.command_name()) {
            tracing::info!("Found {} at {:?}", kind.command_name(), executable);
            return Ok(Engine { kind, executable });
        }
    }

    Err(DeployError::EngineNotFound(
        preferred.map(|k| k.command_name().to_string()).unwrap_or_else(|| "podman or docker".to_string()),
    ))
}

/// Check that the engine daemon/service answers
pub async fn ensure_available(engine: &Engine, runner: &dyn CommandRunner) -> Result<(), DeployError> {
    let output = runner
        .run(&engine.executable, &["info".to_string()], OutputMode::Capture)
        .await?;

    if output.success {
        Ok(())
    } else {
        Err(DeployError::EngineUnavailable {
            engine: engine.kind.command_name().to_string(),
            reason: first_line(&output.stderr),
        })
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("no output").to_string()
}

/// Engine name and location for status messages
pub fn display_engine(engine: &Engine) -> String {
    format!("{} ({})", engine.kind.command_name(), engine.executable.display())
}
