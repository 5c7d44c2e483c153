//! Container deployment workflow
//!
//! Builds the application image for the host architecture and runs it with
//! the storage directory and pull secret mounted.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::engine::{display_engine, ensure_available, find_engine, Engine};
use crate::cli::runner::{CommandOutput, CommandRunner, OutputMode};
use crate::cli::{Action, Cli};
use crate::infrastructure::storage::ensure_layout;
use crate::shared::constants::{
    CONTAINER_NAME, CONTAINER_PORT, CONTAINER_PULL_SECRET, CONTAINER_STORAGE_DIR, HOST_PORT, IMAGE_NAME,
};
use crate::shared::errors::AppError;
use crate::shared::logging::log_deploy_step;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("No container engine found: {0} is not installed")]
    EngineNotFound(String),

    #[error("{engine} is installed but not usable: {reason}")]
    EngineUnavailable { engine: String, reason: String },

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Storage setup failed: {0}")]
    Storage(#[from] AppError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub data_dir: PathBuf,
    pub pull_secret: PathBuf,
    pub context: PathBuf,
}

/// Image platform for the machine running the tool
pub fn host_platform() -> String {
    platform_for_arch(std::env::consts::ARCH, cfg!(target_endian = "little"))
}

/// `powerpc64` covers both byte orders; only little-endian is `ppc64le`.
fn platform_for_arch(arch: &str, little_endian: bool) -> String {
    let arch = match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "powerpc64" if little_endian => "ppc64le",
        other => other,
    };
    format!("linux/{}", arch)
}

pub struct Deployer<R: CommandRunner> {
    engine: Engine,
    runner: R,
    options: DeployOptions,
}

impl<R: CommandRunner> Deployer<R> {
    pub fn new(engine: Engine, runner: R, options: DeployOptions) -> Self {
        Self { engine, runner, options }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn build_args(&self, platform: &str) -> Vec<String> {
        vec![
            "build".to_string(),
            "--platform".to_string(),
            platform.to_string(),
            "-t".to_string(),
            IMAGE_NAME.to_string(),
            self.options.context.display().to_string(),
        ]
    }

    pub fn run_args(&self, data_dir: &Path, pull_secret: Option<&Path>) -> Vec<String> {
        let suffix = |base: &str| match self.engine.kind.relabel_option() {
            Some(opt) if base.is_empty() => format!(":{}", opt),
            Some(opt) => format!(":{},{}", base, opt),
            None if base.is_empty() => String::new(),
            None => format!(":{}", base),
        };

        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            CONTAINER_NAME.to_string(),
            "-p".to_string(),
            format!("{}:{}", HOST_PORT, CONTAINER_PORT),
            "-v".to_string(),
            format!("{}:{}{}", data_dir.display(), CONTAINER_STORAGE_DIR, suffix("")),
        ];
        if let Some(secret) = pull_secret {
            args.push("-v".to_string());
            args.push(format!("{}:{}{}", secret.display(), CONTAINER_PULL_SECRET, suffix("ro")));
        }
        for env in [
            "NODE_ENV=production".to_string(),
            format!("PORT={}", CONTAINER_PORT),
            format!("STORAGE_DIR={}", CONTAINER_STORAGE_DIR),
        ] {
            args.push("-e".to_string());
            args.push(env);
        }
        args.push(IMAGE_NAME.to_string());
        args
    }

    /// Create the storage tree and return its absolute path.
    pub fn prepare_data_dir(&self) -> Result<PathBuf, DeployError> {
        let layout = ensure_layout(&self.options.data_dir, true)?;
        let absolute = std::fs::canonicalize(&layout.root)?;
        log_deploy_step("data_dir", absolute.display());
        Ok(absolute)
    }

    /// Absolute pull secret path, or `None` with a warning when absent.
    pub fn resolve_pull_secret(&self) -> Option<PathBuf> {
        match std::fs::canonicalize(&self.options.pull_secret) {
            Ok(path) if path.is_file() => Some(path),
            _ => {
                tracing::warn!(
                    "Pull secret {} not found, starting without it",
                    self.options.pull_secret.display()
                );
                None
            }
        }
    }

    pub async fn build(&self) -> Result<(), DeployError> {
        let platform = host_platform();
        log_deploy_step("build", &platform);
        self.checked(self.build_args(&platform), OutputMode::Inherit).await?;
        Ok(())
    }

    pub async fn run(&self) -> Result<(), DeployError> {
        let data_dir = self.prepare_data_dir()?;
        let pull_secret = self.resolve_pull_secret();

        // Leftover container from a previous run; absence is fine.
        let _ = self
            .runner
            .run(&self.engine.executable, &["rm".to_string(), "-f".to_string(), CONTAINER_NAME.to_string()], OutputMode::Capture)
            .await?;

        log_deploy_step("run", CONTAINER_NAME);
        self.checked(self.run_args(&data_dir, pull_secret.as_deref()), OutputMode::Capture).await?;
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), DeployError> {
        log_deploy_step("stop", CONTAINER_NAME);
        self.checked(vec!["stop".to_string(), CONTAINER_NAME.to_string()], OutputMode::Capture).await?;
        self.checked(vec!["rm".to_string(), CONTAINER_NAME.to_string()], OutputMode::Capture).await?;
        Ok(())
    }

    pub async fn logs(&self) -> Result<(), DeployError> {
        self.checked(
            vec!["logs".to_string(), "-f".to_string(), CONTAINER_NAME.to_string()],
            OutputMode::Inherit,
        )
        .await?;
        Ok(())
    }

    /// One-line container status, as reported by the engine
    pub async fn status(&self) -> Result<String, DeployError> {
        let output = self
            .checked(
                vec![
                    "ps".to_string(),
                    "-a".to_string(),
                    "--filter".to_string(),
                    format!("name=^{}$", CONTAINER_NAME),
                    "--format".to_string(),
                    "{{.Names}} {{.Status}}".to_string(),
                ],
                OutputMode::Capture,
            )
            .await?;
        if output.stdout.is_empty() {
            Ok(format!("{} is not running", CONTAINER_NAME))
        } else {
            Ok(output.stdout)
        }
    }

    async fn checked(&self, args: Vec<String>, mode: OutputMode) -> Result<CommandOutput, DeployError> {
        let output = self.runner.run(&self.engine.executable, &args, mode).await?;
        if output.success {
            Ok(output)
        } else {
            Err(DeployError::CommandFailed {
                command: format!("{} {}", self.engine.kind.command_name(), args.join(" ")),
                stderr: output.stderr,
            })
        }
    }
}

/// Entry point shared by the binary and tests.
pub async fn execute<R: CommandRunner>(
    cli: &Cli,
    runner: R,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> Result<(), DeployError> {
    let engine = find_engine(cli.engine, lookup)?;
    ensure_available(&engine, &runner).await?;

    let deployer = Deployer::new(engine, runner, cli.options());
    println!("Using {}", display_engine(deployer.engine()));
    match cli.action() {
        Action::BuildAndRun => {
            deployer.build().await?;
            deployer.run().await?;
            print_status(&deployer).await?;
        }
        Action::BuildOnly => {
            deployer.build().await?;
            println!("Image {} built", IMAGE_NAME);
        }
        Action::RunOnly => {
            deployer.run().await?;
            print_status(&deployer).await?;
        }
        Action::Stop => {
            deployer.stop().await?;
            println!("Container {} stopped", CONTAINER_NAME);
        }
        Action::Logs => deployer.logs().await?,
    }
    Ok(())
}

async fn print_status<R: CommandRunner>(deployer: &Deployer<R>) -> Result<(), DeployError> {
    println!("{}", deployer.status().await?);
    println!("Application available at http://localhost:{}", HOST_PORT);
    Ok(())
}
