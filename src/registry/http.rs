use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use semver::{Version, VersionReq};
use serde_json::Value;
use tracing::debug;

use super::{split_package_spec, RegistryClient};
use crate::manifest::keywords_of;

/// npm 互換レジストリに HTTP で問い合わせるクライアント
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// パッケージドキュメントの URL（スコープの `/` は `%2F` にエスケープ）
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.replace('/', "%2F"))
    }
}

/// バージョン指定を versions のキーに解決する
///
/// dist-tags のタグ名、完全一致のバージョン、semver の範囲の順に試す。
/// 範囲に一致するバージョンが複数あれば最も新しいものを選ぶ。
pub fn resolve_version<'a>(document: &'a Value, requested: &'a str) -> Option<&'a str> {
    if let Some(tagged) = document
        .pointer(&format!("/dist-tags/{requested}"))
        .and_then(Value::as_str)
    {
        return Some(tagged);
    }

    let versions = document.get("versions")?.as_object()?;
    if versions.contains_key(requested) {
        return Some(requested);
    }
    // 完全なバージョン指定は範囲として扱わない
    if Version::parse(requested).is_ok() {
        return None;
    }

    let ranges = parse_ranges(requested)?;
    versions
        .keys()
        .filter_map(|key| Version::parse(key).ok().map(|version| (version, key)))
        .filter(|(version, _)| ranges.iter().any(|range| range.matches(version)))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, key)| key.as_str())
}

/// `||` 区切りの範囲指定を解析する（`>=1.0.0 <2.0.0` のような空白区切りも受け付ける）
fn parse_ranges(requested: &str) -> Option<Vec<VersionReq>> {
    requested
        .split("||")
        .map(|part| {
            let part = part.trim();
            VersionReq::parse(part)
                .or_else(|_| {
                    let comparators: Vec<&str> = part.split_whitespace().collect();
                    VersionReq::parse(&comparators.join(", "))
                })
                .ok()
        })
        .collect()
}

/// パッケージドキュメントから keywords を取り出す
///
/// 指定バージョン、なければ dist-tags.latest のバージョンの keywords を使う。
/// dist-tags を持たないドキュメントはトップレベルの keywords を見る。
pub fn keywords_from_document(document: &Value, version: Option<&str>) -> Result<Vec<String>> {
    let resolved = match version {
        Some(requested) => Some(
            resolve_version(document, requested)
                .ok_or_else(|| anyhow!("No published version matches \"{requested}\""))?,
        ),
        None => document.pointer("/dist-tags/latest").and_then(Value::as_str),
    };

    let Some(resolved) = resolved else {
        return Ok(keywords_of(document.get("keywords")));
    };

    let manifest = document
        .get("versions")
        .and_then(|versions| versions.get(resolved))
        .ok_or_else(|| anyhow!("Version {resolved} is missing from the registry document"))?;

    Ok(keywords_of(manifest.get("keywords")))
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn fetch_keywords(&self, package: &str) -> Result<Vec<String>> {
        let (name, version) = split_package_spec(package);
        let url = self.package_url(name);
        debug!(%url, "querying registry");

        let document: Value = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to query registry: {url}"))?
            .error_for_status()
            .with_context(|| format!("Registry returned an error for {name}"))?
            .json()
            .await
            .with_context(|| format!("Invalid registry response for {name}"))?;

        keywords_from_document(&document, version)
            .with_context(|| format!("Cannot resolve {package} in the registry"))
    }
}
