// プロジェクトの初期化
//
// 各ステップは前のステップの完了後に順番に実行する。途中で失敗しても
// それまでに作成したファイルは残す（ロールバックしない）。

use tracing::info;

use super::copy::{copy_dir_all, remove_scaffold_entries};
use crate::core::{InstallRequest, ScaffoldError, ScaffoldResult};
use crate::manifest::{ManifestStore, ProjectManifest};
use crate::package_manager::PackageManagerClient;
use crate::reporting::ScaffoldReporter;
use crate::template::{TemplateSource, VerifiedTemplate};

pub struct ProjectInitializer<'a, P: ?Sized, M: ?Sized, Rep: ?Sized> {
    client: &'a P,
    store: &'a M,
    reporter: &'a Rep,
    placeholder_name: &'a str,
}

impl<'a, P, M, Rep> ProjectInitializer<'a, P, M, Rep>
where
    P: PackageManagerClient + ?Sized,
    M: ManifestStore + ?Sized,
    Rep: ScaffoldReporter + ?Sized,
{
    pub fn new(client: &'a P, store: &'a M, reporter: &'a Rep, placeholder_name: &'a str) -> Self {
        Self {
            client,
            store,
            reporter,
            placeholder_name,
        }
    }

    /// 作成先ディレクトリにテンプレートを展開する
    pub async fn initialize(
        &self,
        request: &InstallRequest,
        template: &VerifiedTemplate,
    ) -> ScaffoldResult<()> {
        let target = request.target_path();

        // 1. 作成先ディレクトリ
        tokio::fs::create_dir_all(target)
            .await
            .map_err(|e| ScaffoldError::io(target, e))?;
        info!(target = %target.display(), "target directory ready");

        // 2. プレースホルダーのマニフェスト
        self.store
            .write(target, &ProjectManifest::placeholder(self.placeholder_name))
            .await?;

        // 3. リモートテンプレートの取得
        let source = template.source();
        if let TemplateSource::Remote(spec) = source {
            self.reporter
                .report_step(&format!("テンプレート {spec} を取得しています..."))
                .await;
            self.client
                .install_dependency(spec, &request.install_options())
                .await?;
        }

        // 4. テンプレートのコピー
        let location = source.location(target);
        self.reporter.report_step("テンプレートをコピーしています...").await;
        let copied = copy_dir_all(&location, target).await?;
        info!(from = %location.display(), copied, "template files copied");

        // 5. クリーンアップ
        self.reporter.report_step("不要なファイルを削除しています...").await;
        remove_scaffold_entries(target).await?;
        let manifest = self.store.read(target).await?;
        self.store.write(target, &manifest.cleaned()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstallOptions, PackageManager};
    use crate::manifest::local::FsManifestStore;
    use crate::package_manager::MockPackageManagerClient;
    use crate::registry::MockRegistryClient;
    use crate::reporting::NoOpReporter;
    use crate::template::TemplateVerifier;
    use mockall::predicate::*;
    use serde_json::{json, Value};
    use std::path::Path;
    use tempfile::tempdir;

    fn write_template(dir: &Path) {
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::write(
            dir.join("package.json"),
            json!({
                "name": "tpl",
                "keywords": ["csa-template"],
                "scripts": {"test": "jest", "start": "serve"},
                "dependencies": {"a": "1"}
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(dir.join("src/index.js"), "export {}").unwrap();
        std::fs::write(dir.join("LICENSE"), "MIT").unwrap();
        std::fs::write(dir.join(".npmignore"), "src").unwrap();
    }

    async fn verified(source: TemplateSource, store: &FsManifestStore) -> VerifiedTemplate {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_fetch_keywords()
            .returning(|_| Ok(vec!["csa-template".to_string()]));
        TemplateVerifier::new(&registry, store, "csa-template")
            .verify(source)
            .await
            .unwrap()
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_from_local_template() {
        let workspace = tempdir().unwrap();
        let template_dir = workspace.path().join("tpl");
        write_template(&template_dir);
        let target = workspace.path().join("app");

        let store = FsManifestStore::new();
        let client = MockPackageManagerClient::new();
        let template = verified(TemplateSource::Local(template_dir), &store).await;
        let request = InstallRequest::new("./tpl", PackageManager::Npm, &target);

        ProjectInitializer::new(&client, &store, &NoOpReporter::new(), "placeholder")
            .initialize(&request, &template)
            .await
            .unwrap();

        assert!(target.join("src/index.js").is_file());
        assert!(!target.join("LICENSE").exists());
        assert!(!target.join(".npmignore").exists());

        let manifest = read_json(&target.join("package.json"));
        assert_eq!(
            manifest,
            json!({"scripts": {"start": "serve", "test": "jest"}, "dependencies": {"a": "1"}})
        );
        let script_names: Vec<_> = manifest["scripts"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(script_names, vec!["start", "test"]);
    }

    #[tokio::test]
    async fn test_initialize_from_remote_template() {
        let workspace = tempdir().unwrap();
        let target = workspace.path().join("app");
        let store = FsManifestStore::new();
        let template = verified(TemplateSource::Remote("@org/pkg".to_string()), &store).await;
        let request = InstallRequest::new("@org/pkg", PackageManager::Npm, &target);

        let mut client = MockPackageManagerClient::new();
        let expected_options = InstallOptions::new(&target, false);
        client
            .expect_install_dependency()
            .with(eq("@org/pkg"), eq(expected_options))
            .times(1)
            .returning(|_, options| {
                // プレースホルダーが先に書かれていること
                assert!(options.cwd.join("package.json").is_file());
                write_template(&options.cwd.join("node_modules/@org/pkg"));
                std::fs::write(options.cwd.join("package-lock.json"), "{}").unwrap();
                Ok(())
            });

        ProjectInitializer::new(&client, &store, &NoOpReporter::new(), "placeholder")
            .initialize(&request, &template)
            .await
            .unwrap();

        assert!(target.join("src/index.js").is_file());
        assert!(!target.join("node_modules").exists());
        assert!(!target.join("package-lock.json").exists());
        assert_eq!(
            read_json(&target.join("package.json"))["dependencies"],
            json!({"a": "1"})
        );
    }

    #[tokio::test]
    async fn test_remote_fetch_failure_aborts() {
        let workspace = tempdir().unwrap();
        let target = workspace.path().join("app");
        let store = FsManifestStore::new();
        let template = verified(TemplateSource::Remote("tpl".to_string()), &store).await;
        let request = InstallRequest::new("tpl", PackageManager::Npm, &target);

        let mut client = MockPackageManagerClient::new();
        client.expect_install_dependency().returning(|_, _| {
            Err(ScaffoldError::SubprocessFailed {
                command: "npm install tpl".to_string(),
                status: Some(1),
                output: "npm ERR! 404".to_string(),
            })
        });

        let error = ProjectInitializer::new(&client, &store, &NoOpReporter::new(), "placeholder")
            .initialize(&request, &template)
            .await
            .unwrap_err();

        match error {
            ScaffoldError::SubprocessFailed { output, .. } => assert!(output.contains("404")),
            other => panic!("unexpected error: {other}"),
        }
        // ロールバックはしない
        assert!(target.join("package.json").is_file());
    }
}
