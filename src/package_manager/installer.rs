// 依存関係のインストール
// 作成したプロジェクト内で選択されたパッケージマネージャーを実行する

use tracing::info;

use super::PackageManagerClient;
use crate::core::{InstallRequest, ScaffoldResult};

pub struct PackageInstaller<'a, P: ?Sized> {
    client: &'a P,
}

impl<'a, P> PackageInstaller<'a, P>
where
    P: PackageManagerClient + ?Sized,
{
    pub fn new(client: &'a P) -> Self {
        Self { client }
    }

    /// 作成先ディレクトリで install を実行する（リトライなし）
    pub async fn install(&self, request: &InstallRequest) -> ScaffoldResult<()> {
        info!(
            manager = %self.client.manager(),
            target = %request.target_path().display(),
            "installing dependencies"
        );
        self.client.install_all(&request.install_options()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstallOptions, PackageManager, ScaffoldError};
    use crate::package_manager::MockPackageManagerClient;
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_install_runs_in_target() {
        let mut client = MockPackageManagerClient::new();
        client.expect_manager().return_const(PackageManager::Yarn);
        client
            .expect_install_all()
            .with(eq(InstallOptions::new("/work/app", true)))
            .times(1)
            .returning(|_| Ok(()));

        let request = InstallRequest::new("tpl", PackageManager::Yarn, "/work/app").with_verbose(true);

        PackageInstaller::new(&client).install(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_install_failure_is_not_retried() {
        let mut client = MockPackageManagerClient::new();
        client.expect_manager().return_const(PackageManager::Npm);
        client.expect_install_all().times(1).returning(|_| {
            Err(ScaffoldError::SubprocessFailed {
                command: "npm install".to_string(),
                status: Some(1),
                output: String::new(),
            })
        });

        let request = InstallRequest::new("tpl", PackageManager::Npm, "/work/app");
        let result = PackageInstaller::new(&client).install(&request).await;

        assert!(matches!(result, Err(ScaffoldError::SubprocessFailed { .. })));
    }
}
