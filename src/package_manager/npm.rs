use async_trait::async_trait;
use tracing::debug;

use super::process::{self, CommandSpec};
use super::PackageManagerClient;
use crate::core::{InstallOptions, PackageManager, ScaffoldResult};

/// npm クライアント
#[derive(Debug, Clone, Default)]
pub struct NpmClient;

impl NpmClient {
    pub fn new() -> Self {
        Self
    }

    fn log_level(options: &InstallOptions) -> &'static str {
        if options.verbose {
            "verbose"
        } else {
            "error"
        }
    }

    /// `npm install --loglevel <verbose|error>`
    pub fn install_all_command(options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Npm.program())
            .arg("install")
            .args(["--loglevel", Self::log_level(options)])
    }

    /// `npm install <name> --ignore-scripts --loglevel <verbose|error>`
    pub fn install_dependency_command(name: &str, options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Npm.program())
            .args(["install", name, "--ignore-scripts"])
            .args(["--loglevel", Self::log_level(options)])
    }
}

#[async_trait]
impl PackageManagerClient for NpmClient {
    fn manager(&self) -> PackageManager {
        PackageManager::Npm
    }

    async fn check_available(&self) -> bool {
        process::probe_version(&self.manager().program()).await
    }

    async fn install_dependency(&self, name: &str, options: &InstallOptions) -> ScaffoldResult<()> {
        let spec = Self::install_dependency_command(name, options);
        let output = process::run_captured(&spec, &options.cwd).await?;
        debug!(%output, "npm install finished");
        Ok(())
    }

    async fn install_all(&self, options: &InstallOptions) -> ScaffoldResult<()> {
        process::run_streaming(&Self::install_all_command(options), &options.cwd).await
    }
}
