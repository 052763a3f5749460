pub mod cli;
pub mod core;
pub mod git;
pub mod manifest;
pub mod package_manager;
pub mod project;
pub mod registry;
pub mod reporting;
pub mod template;

use std::path::Path;
use tracing::info;

use crate::core::{InstallRequest, ScaffoldConfig, ScaffoldResult};
use crate::git::GitInitOutcome;
use crate::manifest::ManifestStore;
use crate::package_manager::{PackageInstaller, PackageManagerClient};
use crate::project::ProjectInitializer;
use crate::registry::RegistryClient;
use crate::reporting::ScaffoldReporter;
use crate::template::{TemplateSource, TemplateVerifier};

// 依存関係を直接所有するジェネリックなApp構造体
// 検証 → 初期化 → インストール → git 初期化を順番に実行する
pub struct App<P, R, M, Rep>
where
    P: PackageManagerClient,
    R: RegistryClient,
    M: ManifestStore,
    Rep: ScaffoldReporter,
{
    pub client: P,
    pub registry: R,
    pub store: M,
    pub reporter: Rep,
    pub config: ScaffoldConfig,
}

impl<P, R, M, Rep> App<P, R, M, Rep>
where
    P: PackageManagerClient,
    R: RegistryClient,
    M: ManifestStore,
    Rep: ScaffoldReporter,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(client: P, registry: R, store: M, reporter: Rep, config: ScaffoldConfig) -> Self {
        Self {
            client,
            registry,
            store,
            reporter,
            config,
        }
    }

    /// スキャフォールドを実行する
    ///
    /// ローカルテンプレートのパスは `cwd` を基準に解決する。
    pub async fn run(&self, request: &InstallRequest, cwd: &Path) -> ScaffoldResult<()> {
        self.reporter.report_started(request).await;

        let source = TemplateSource::parse(request.template(), cwd);
        self.reporter
            .report_step(&format!("テンプレート {source} を検証しています..."))
            .await;
        let template = TemplateVerifier::new(&self.registry, &self.store, self.config.sentinel_keyword())
            .verify(source)
            .await?;

        ProjectInitializer::new(
            &self.client,
            &self.store,
            &self.reporter,
            self.config.placeholder_name(),
        )
        .initialize(request, &template)
        .await?;

        self.reporter
            .report_step(&format!(
                "{} で依存関係をインストールしています...",
                request.package_manager()
            ))
            .await;
        PackageInstaller::new(&self.client).install(request).await?;

        if request.git_init() {
            self.init_git(request.target_path()).await;
        }

        self.reporter.report_completed(request).await;
        info!(target = %request.target_path().display(), "scaffold finished");
        Ok(())
    }

    /// git の初期化に失敗してもプロジェクト作成自体は成功として扱う
    async fn init_git(&self, dir: &Path) {
        match git::init_repository(dir).await {
            Ok(GitInitOutcome::Initialized) => {
                self.reporter
                    .report_step("git リポジトリを初期化しました")
                    .await;
            }
            Ok(outcome) => info!(?outcome, "git initialization skipped"),
            Err(e) => {
                self.reporter
                    .report_warning(&format!("git リポジトリを初期化できませんでした: {e}"))
                    .await;
            }
        }
    }
}
