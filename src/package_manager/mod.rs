use async_trait::async_trait;
use mockall::automock;

use crate::core::{InstallOptions, PackageManager, ScaffoldResult};

pub mod installer;
pub mod npm;
pub mod pnpm;
pub mod process;
pub mod yarn;

pub use installer::PackageInstaller;
pub use npm::NpmClient;
pub use pnpm::PnpmClient;
pub use yarn::YarnClient;

/// パッケージマネージャー操作の抽象化トレイト
#[automock]
#[async_trait]
pub trait PackageManagerClient: Send + Sync {
    /// 対応するパッケージマネージャー
    fn manager(&self) -> PackageManager;

    /// ホストにインストールされているかどうか
    async fn check_available(&self) -> bool;

    /// 単一パッケージを取得する（ライフサイクルスクリプトは実行しない）
    ///
    /// 出力はキャプチャされ、失敗時はエラーに含まれる。
    async fn install_dependency(&self, name: &str, options: &InstallOptions) -> ScaffoldResult<()>;

    /// プロジェクトの依存関係を全てインストールする（出力は端末に流す）
    async fn install_all(&self, options: &InstallOptions) -> ScaffoldResult<()>;
}

#[async_trait]
impl PackageManagerClient for Box<dyn PackageManagerClient> {
    fn manager(&self) -> PackageManager {
        self.as_ref().manager()
    }

    async fn check_available(&self) -> bool {
        self.as_ref().check_available().await
    }

    async fn install_dependency(&self, name: &str, options: &InstallOptions) -> ScaffoldResult<()> {
        self.as_ref().install_dependency(name, options).await
    }

    async fn install_all(&self, options: &InstallOptions) -> ScaffoldResult<()> {
        self.as_ref().install_all(options).await
    }
}

/// パッケージマネージャーに対応するクライアントを作成
pub fn client_for(manager: PackageManager) -> Box<dyn PackageManagerClient> {
    match manager {
        PackageManager::Npm => Box::new(NpmClient::new()),
        PackageManager::Yarn => Box::new(YarnClient::new()),
        PackageManager::Pnpm => Box::new(PnpmClient::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_for_each_manager() {
        for manager in [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm] {
            assert_eq!(client_for(manager).manager(), manager);
        }
    }

    #[tokio::test]
    async fn test_boxed_client_delegates() {
        let mut mock = MockPackageManagerClient::new();
        mock.expect_manager().return_const(PackageManager::Pnpm);
        mock.expect_check_available().times(1).returning(|| true);
        mock.expect_install_all().times(1).returning(|_| Ok(()));

        let client: Box<dyn PackageManagerClient> = Box::new(mock);

        assert_eq!(client.manager(), PackageManager::Pnpm);
        assert!(client.check_available().await);
        assert!(client
            .install_all(&InstallOptions::new("/tmp", false))
            .await
            .is_ok());
    }
}
