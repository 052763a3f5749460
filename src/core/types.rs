// スキャフォールド処理に関連するデータ型定義

use std::fmt;
use std::path::{Path, PathBuf};

/// 依存関係のインストールに使うパッケージマネージャー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// 表示名兼コマンド名
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// 実行ファイル名（Windows では .cmd シムを起動する）
    pub fn program(&self) -> String {
        if cfg!(windows) {
            format!("{}.cmd", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// スクリプト実行コマンドの接頭辞（クイックスタート表示用）
    pub const fn run_prefix(&self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm run",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 検証済みの引数から一度だけ作られるインストール要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    template: String,
    package_manager: PackageManager,
    target_path: PathBuf,
    force: bool,
    verbose: bool,
    git_init: bool,
}

impl InstallRequest {
    pub fn new(
        template: impl Into<String>,
        package_manager: PackageManager,
        target_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template: template.into(),
            package_manager,
            target_path: target_path.into(),
            force: false,
            verbose: false,
            git_init: true,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_git_init(mut self, git_init: bool) -> Self {
        self.git_init = git_init;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn git_init(&self) -> bool {
        self.git_init
    }

    /// パッケージマネージャー呼び出し用のオプション
    pub fn install_options(&self) -> InstallOptions {
        InstallOptions {
            cwd: self.target_path.clone(),
            verbose: self.verbose,
        }
    }
}

/// パッケージマネージャー呼び出し時のオプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// コマンドを実行するディレクトリ
    pub cwd: PathBuf,
    /// 詳細ログを出すかどうか
    pub verbose: bool,
}

impl InstallOptions {
    pub fn new(cwd: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            cwd: cwd.into(),
            verbose,
        }
    }
}
