use async_trait::async_trait;
use tracing::debug;

use super::process::{self, CommandSpec};
use super::PackageManagerClient;
use crate::core::{InstallOptions, PackageManager, ScaffoldResult};

/// yarn クライアント
#[derive(Debug, Clone, Default)]
pub struct YarnClient;

impl YarnClient {
    pub fn new() -> Self {
        Self
    }

    fn verbosity_flag(options: &InstallOptions) -> &'static str {
        if options.verbose {
            "--verbose"
        } else {
            "--silent"
        }
    }

    /// `yarn [--verbose|--silent]`
    pub fn install_all_command(options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Yarn.program()).arg(Self::verbosity_flag(options))
    }

    /// `yarn add <name> --ignore-scripts [--verbose|--silent]`
    pub fn install_dependency_command(name: &str, options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Yarn.program())
            .args(["add", name, "--ignore-scripts"])
            .arg(Self::verbosity_flag(options))
    }
}

#[async_trait]
impl PackageManagerClient for YarnClient {
    fn manager(&self) -> PackageManager {
        PackageManager::Yarn
    }

    async fn check_available(&self) -> bool {
        process::probe_version(&self.manager().program()).await
    }

    async fn install_dependency(&self, name: &str, options: &InstallOptions) -> ScaffoldResult<()> {
        let spec = Self::install_dependency_command(name, options);
        let output = process::run_captured(&spec, &options.cwd).await?;
        debug!(%output, "yarn add finished");
        Ok(())
    }

    async fn install_all(&self, options: &InstallOptions) -> ScaffoldResult<()> {
        process::run_streaming(&Self::install_all_command(options), &options.cwd).await
    }
}
