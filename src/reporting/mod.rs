// 進捗報告
//
// ユーザー向けの表示はこのトレイトを通し、診断ログは tracing に出す。

use async_trait::async_trait;
use mockall::automock;

use crate::core::InstallRequest;

pub mod console;

pub use console::ConsoleReporter;

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ScaffoldReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, request: &InstallRequest);

    /// 各ステップ開始時の報告
    async fn report_step(&self, message: &str);

    /// 処理は続行できる問題の報告
    async fn report_warning(&self, message: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, request: &InstallRequest);
}

/// 何もしない進捗報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScaffoldReporter for NoOpReporter {
    async fn report_started(&self, _request: &InstallRequest) {}

    async fn report_step(&self, _message: &str) {}

    async fn report_warning(&self, _message: &str) {}

    async fn report_completed(&self, _request: &InstallRequest) {}
}
