use async_trait::async_trait;
use tracing::debug;

use super::process::{self, CommandSpec};
use super::PackageManagerClient;
use crate::core::{InstallOptions, PackageManager, ScaffoldResult};

/// pnpm クライアント
#[derive(Debug, Clone, Default)]
pub struct PnpmClient;

impl PnpmClient {
    pub fn new() -> Self {
        Self
    }

    fn reporter_flag(options: &InstallOptions) -> &'static str {
        if options.verbose {
            "--reporter=default"
        } else {
            "--reporter=silent"
        }
    }

    /// `pnpm install --reporter=<default|silent>`
    pub fn install_all_command(options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Pnpm.program())
            .arg("install")
            .arg(Self::reporter_flag(options))
    }

    /// `pnpm add <name> --ignore-scripts --reporter=<default|silent>`
    pub fn install_dependency_command(name: &str, options: &InstallOptions) -> CommandSpec {
        CommandSpec::new(PackageManager::Pnpm.program())
            .args(["add", name, "--ignore-scripts"])
            .arg(Self::reporter_flag(options))
    }
}

#[async_trait]
impl PackageManagerClient for PnpmClient {
    fn manager(&self) -> PackageManager {
        PackageManager::Pnpm
    }

    async fn check_available(&self) -> bool {
        process::probe_version(&self.manager().program()).await
    }

    async fn install_dependency(&self, name: &str, options: &InstallOptions) -> ScaffoldResult<()> {
        let spec = Self::install_dependency_command(name, options);
        let output = process::run_captured(&spec, &options.cwd).await?;
        debug!(%output, "pnpm add finished");
        Ok(())
    }

    async fn install_all(&self, options: &InstallOptions) -> ScaffoldResult<()> {
        process::run_streaming(&Self::install_all_command(options), &options.cwd).await
    }
}
