// テンプレートの種類の判定と配置場所の解決

use std::fmt;
use std::path::{Path, PathBuf};

use crate::registry::split_package_spec;

pub mod verifier;

pub use verifier::{TemplateVerifier, VerifiedTemplate};

/// 依存パッケージが置かれるディレクトリ
pub const DEPENDENCY_DIR: &str = "node_modules";

/// テンプレートの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// ローカルディレクトリ（絶対パス）
    Local(PathBuf),
    /// レジストリ上のパッケージ（バージョン指定を含んでもよい）
    Remote(String),
}

impl TemplateSource {
    /// `.` で始まる識別子はローカルパス、それ以外はレジストリのパッケージ
    pub fn parse(identifier: &str, cwd: &Path) -> Self {
        if identifier.starts_with('.') {
            Self::Local(cwd.join(identifier))
        } else {
            Self::Remote(identifier.to_string())
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// レジストリのパッケージ名（バージョン指定を除く）
    pub fn package_name(&self) -> Option<&str> {
        match self {
            Self::Local(_) => None,
            Self::Remote(spec) => Some(split_package_spec(spec).0),
        }
    }

    /// コピー元となるディレクトリ
    ///
    /// リモートの場合は作成先の node_modules 以下にインストールされた場所。
    pub fn location(&self, target: &Path) -> PathBuf {
        match self {
            Self::Local(path) => path.clone(),
            Self::Remote(spec) => split_package_spec(spec)
                .0
                .split('/')
                .fold(target.join(DEPENDENCY_DIR), |dir, part| dir.join(part)),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(spec) => f.write_str(spec),
        }
    }
}
