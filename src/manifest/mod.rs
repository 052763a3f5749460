use async_trait::async_trait;
use mockall::automock;
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::ScaffoldResult;

pub mod local;

/// マニフェストのファイル名
pub const MANIFEST_FILE: &str = "package.json";

/// クリーンアップ後に残すフィールド（この順で書き出す）
pub const RETAINED_FIELDS: [&str; 4] = ["scripts", "webDependencies", "dependencies", "devDependencies"];

/// 先頭に並べるスクリプト名（この順）
pub const PREFERRED_SCRIPTS: [&str; 4] = ["prepare", "start", "build", "test"];

/// package.json の内容を表す構造体
///
/// キーの挿入順を保持するため、serde_json の preserve_order 機能を前提とする。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectManifest {
    fields: Map<String, Value>,
}

impl ProjectManifest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// JSON テキストから読み込む（トップレベルはオブジェクトのみ）
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self { fields })
    }

    /// テンプレート到着前に置く最小限のマニフェスト
    pub fn placeholder(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        fields.insert("private".to_string(), Value::Bool(true));
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// keywords フィールドの文字列要素（配列でなければ空）
    pub fn keywords(&self) -> Vec<String> {
        keywords_of(self.fields.get("keywords"))
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords().iter().any(|k| k == keyword)
    }

    /// スキャフォールド専用のフィールドを取り除いたマニフェストを作る
    ///
    /// `RETAINED_FIELDS` 以外は全て捨てる。scripts は `PREFERRED_SCRIPTS` を先頭に、
    /// 残りを元の順序のまま後ろに並べる。存在しないフィールドは出力しない。
    pub fn cleaned(&self) -> Self {
        let mut fields = Map::new();

        for key in RETAINED_FIELDS {
            let Some(value) = self.fields.get(key) else {
                continue;
            };
            let value = match (key, value) {
                ("scripts", Value::Object(scripts)) => Value::Object(order_scripts(scripts)),
                _ => value.clone(),
            };
            fields.insert(key.to_string(), value);
        }

        Self { fields }
    }

    /// 2スペースインデントの JSON（末尾改行付き）
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}\n", Value::Object(self.fields.clone()))
    }
}

impl From<Map<String, Value>> for ProjectManifest {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// keywords 値から文字列だけを取り出す
pub fn keywords_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn order_scripts(scripts: &Map<String, Value>) -> Map<String, Value> {
    let mut ordered = Map::new();

    for name in PREFERRED_SCRIPTS {
        if let Some(command) = scripts.get(name) {
            ordered.insert(name.to_string(), command.clone());
        }
    }
    for (name, command) in scripts {
        if !PREFERRED_SCRIPTS.contains(&name.as_str()) {
            ordered.insert(name.clone(), command.clone());
        }
    }

    ordered
}

/// マニフェストの読み書きを抽象化するトレイト
#[automock]
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// ディレクトリ内の package.json を読み込む
    async fn read(&self, dir: &Path) -> ScaffoldResult<ProjectManifest>;

    /// ディレクトリ内の package.json を書き込む（既存は上書き）
    async fn write(&self, dir: &Path, manifest: &ProjectManifest) -> ScaffoldResult<()>;
}

#[async_trait]
impl ManifestStore for Box<dyn ManifestStore> {
    async fn read(&self, dir: &Path) -> ScaffoldResult<ProjectManifest> {
        self.as_ref().read(dir).await
    }

    async fn write(&self, dir: &Path, manifest: &ProjectManifest) -> ScaffoldResult<()> {
        self.as_ref().write(dir, manifest).await
    }
}
