/// Container engine detection (podman, docker)
pub mod engine;

/// Process execution behind a trait so deployment plans are testable
pub mod runner;

/// Build / run / stop / logs workflow
pub mod deploy;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub use deploy::{Deployer, DeployError, DeployOptions};
pub use engine::{Engine, EngineKind};
pub use runner::{CommandOutput, CommandRunner, OutputMode, ProcessRunner};

#[derive(Parser, Debug)]
#[command(name = "oc-mirror-deploy")]
#[command(about = "Build and run the OC Mirror web application in a container")]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct Cli {
    /// Only build the container image
    #[arg(long, group = "action")]
    pub build_only: bool,
    /// Only run the container (image must already exist)
    #[arg(long, group = "action")]
    pub run_only: bool,
    /// Stop and remove the running container
    #[arg(long, group = "action")]
    pub stop: bool,
    /// Follow the container logs
    #[arg(long, group = "action")]
    pub logs: bool,
    /// Container engine to use instead of auto-detection
    #[arg(long, value_enum)]
    pub engine: Option<EngineKind>,
    /// Host directory mounted as the application storage
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,
    /// Pull secret mounted read-only into the container
    #[arg(long, default_value = "./pull-secret/pull-secret.json")]
    pub pull_secret: PathBuf,
    /// Build context containing the Dockerfile
    #[arg(long, default_value = ".")]
    pub context: PathBuf,
}

/// What the tool was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BuildAndRun,
    BuildOnly,
    RunOnly,
    Stop,
    Logs,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.build_only {
            Action::BuildOnly
        } else if self.run_only {
            Action::RunOnly
        } else if self.stop {
            Action::Stop
        } else if self.logs {
            Action::Logs
        } else {
            Action::BuildAndRun
        }
    }

    pub fn options(&self) -> DeployOptions {
        DeployOptions {
            data_dir: self.data_dir.clone(),
            pull_secret: self.pull_secret.clone(),
            context: self.context.clone(),
        }
    }
}
