use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod http;

pub use http::HttpRegistryClient;

/// パッケージレジストリへのメタデータ問い合わせを抽象化するトレイト
#[automock]
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// パッケージの keywords を取得する
    ///
    /// `package` はバージョン指定付き（`name@1.2.3`）でもよい。
    async fn fetch_keywords(&self, package: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl RegistryClient for Box<dyn RegistryClient> {
    async fn fetch_keywords(&self, package: &str) -> Result<Vec<String>> {
        self.as_ref().fetch_keywords(package).await
    }
}

/// `name@version` をパッケージ名とバージョンに分ける
///
/// スコープ付きパッケージ先頭の `@` は区切りとして扱わない。
pub fn split_package_spec(spec: &str) -> (&str, Option<&str>) {
    let search_from = usize::from(spec.starts_with('@'));
    match spec[search_from..].find('@') {
        Some(index) => {
            let at = search_from + index;
            let version = &spec[at + 1..];
            (&spec[..at], (!version.is_empty()).then_some(version))
        }
        None => (spec, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_package_spec() {
        assert_eq!(split_package_spec("left-pad"), ("left-pad", None));
        assert_eq!(split_package_spec("left-pad@1.3.0"), ("left-pad", Some("1.3.0")));
        assert_eq!(split_package_spec("@org/pkg"), ("@org/pkg", None));
        assert_eq!(split_package_spec("@org/pkg@next"), ("@org/pkg", Some("next")));
        assert_eq!(split_package_spec("pkg@"), ("pkg", None));
    }
}
