// スキャフォールド処理のカスタムエラー型定義
// 全ての公開操作は ScaffoldResult を返し、プロセス終了は main だけが行う

use std::path::PathBuf;
use thiserror::Error;

use super::types::PackageManager;

/// スキャフォールド固有のエラー型
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("--useYarn と --usePnpm は同時に指定できません")]
    ConflictingPackageManager,

    #[error("パッケージマネージャーが見つかりません: {manager}")]
    PackageManagerNotFound { manager: PackageManager },

    #[error("作成先ディレクトリが指定されていません")]
    MissingTarget,

    #[error("--template が指定されていません")]
    MissingTemplate,

    #[error("余分な引数があります: {}", .extra.join(" "))]
    UnexpectedArguments { extra: Vec<String> },

    #[error("作成先ディレクトリが既に存在します: {}", .path.display())]
    TargetExists { path: PathBuf },

    #[error("引数エラー: {message}")]
    InvalidArguments { message: String },

    #[error("テンプレートを検証できません: {template} - {source}")]
    VerificationUnavailable {
        template: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("許可されていないテンプレートです: {template} (キーワード \"{sentinel}\" がありません)")]
    UnauthorizedTemplate { template: String, sentinel: String },

    #[error("ファイル操作エラー: {} - {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("テンプレートを自身の内側にはコピーできません: {} -> {}", .template.display(), .target.display())]
    CopyIntoSelf { template: PathBuf, target: PathBuf },

    #[error("package.json を解析できません: {} - {source}", .path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("コマンドを起動できません: {command} - {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("コマンドが失敗しました: {command} (終了コード: {})", .status.map_or_else(|| "なし".to_string(), |c| c.to_string()))]
    SubprocessFailed {
        command: String,
        status: Option<i32>,
        /// キャプチャした stdout と stderr（ストリーミング実行時は空）
        output: String,
    },
}

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 引数の誤り・不足
    Configuration,
    /// テンプレート検証の失敗
    Trust,
    /// ファイルシステム操作の失敗
    Io,
    /// パッケージマネージャー等の外部プロセスの失敗
    Subprocess,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "CONFIGURATION",
            Self::Trust => "TRUST",
            Self::Io => "IO",
            Self::Subprocess => "SUBPROCESS",
        }
    }
}

impl ScaffoldError {
    /// ファイル操作エラーの作成
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 検証不能エラーの作成
    pub fn verification_unavailable(template: impl Into<String>, source: anyhow::Error) -> Self {
        Self::VerificationUnavailable {
            template: template.into(),
            source,
        }
    }

    /// 起動失敗エラーの作成
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.into(),
            source,
        }
    }

    /// エラーの分類を取得
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConflictingPackageManager
            | Self::PackageManagerNotFound { .. }
            | Self::MissingTarget
            | Self::MissingTemplate
            | Self::UnexpectedArguments { .. }
            | Self::TargetExists { .. }
            | Self::InvalidArguments { .. } => ErrorKind::Configuration,
            Self::VerificationUnavailable { .. } | Self::UnauthorizedTemplate { .. } => {
                ErrorKind::Trust
            }
            Self::Io { .. } | Self::CopyIntoSelf { .. } | Self::InvalidManifest { .. } => {
                ErrorKind::Io
            }
            Self::SpawnFailed { .. } | Self::SubprocessFailed { .. } => ErrorKind::Subprocess,
        }
    }

    /// プロセスの終了コード（全てのエラーで 1）
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// エラー解決のための提案
    pub fn suggestion(&self, issue_tracker_url: &str) -> Option<String> {
        match self {
            Self::TargetExists { .. } => {
                Some("上書きする場合は --force を指定してください".to_string())
            }
            Self::MissingTarget => Some(
                "作成先を位置引数または --target <dir> で指定してください".to_string(),
            ),
            Self::MissingTemplate => {
                Some("--template <パッケージ名またはパス> を指定してください".to_string())
            }
            Self::CopyIntoSelf { .. } => Some(
                "作成先にはテンプレートディレクトリの外を指定してください".to_string(),
            ),
            Self::PackageManagerNotFound { manager } => Some(format!(
                "{} をインストールするか、別のパッケージマネージャーを選択してください",
                manager.program()
            )),
            Self::VerificationUnavailable { .. } | Self::UnauthorizedTemplate { .. } => Some(
                format!("テンプレートに問題がある場合は {issue_tracker_url} で報告してください"),
            ),
            Self::SubprocessFailed { output, .. } if !output.trim().is_empty() => {
                Some(output.trim_end().to_string())
            }
            _ => None,
        }
    }
}

/// スキャフォールド処理の結果型
pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;
