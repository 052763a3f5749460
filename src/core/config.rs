// 実行時設定
// 既定値は Default、環境変数からの上書きは from_env で行う

/// npm 公式レジストリ
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// 利用を許可するテンプレートが持つキーワード
pub const DEFAULT_SENTINEL_KEYWORD: &str = "csa-template";

pub const DEFAULT_ISSUE_TRACKER_URL: &str = "https://github.com/snowpackjs/snowpack/issues";

/// プレースホルダー package.json に書き込む名前
pub const DEFAULT_PLACEHOLDER_NAME: &str = "scaffold-placeholder";

/// レジストリ URL を上書きする環境変数（npm と同じ名前）
const REGISTRY_ENV_VARS: [&str; 2] = ["npm_config_registry", "NPM_CONFIG_REGISTRY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    registry_url: String,
    sentinel_keyword: String,
    issue_tracker_url: String,
    placeholder_name: String,
}

impl ScaffoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 環境変数を反映した設定を作成
    pub fn from_env() -> Self {
        let config = Self::default();
        let registry = REGISTRY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        match registry {
            Some(url) => config.with_registry_url(url),
            None => config,
        }
    }

    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_sentinel_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.sentinel_keyword = keyword.into();
        self
    }

    pub fn with_issue_tracker_url(mut self, url: impl Into<String>) -> Self {
        self.issue_tracker_url = url.into();
        self
    }

    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    pub fn sentinel_keyword(&self) -> &str {
        &self.sentinel_keyword
    }

    pub fn issue_tracker_url(&self) -> &str {
        &self.issue_tracker_url
    }

    pub fn placeholder_name(&self) -> &str {
        &self.placeholder_name
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            sentinel_keyword: DEFAULT_SENTINEL_KEYWORD.to_string(),
            issue_tracker_url: DEFAULT_ISSUE_TRACKER_URL.to_string(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
        }
    }
}
