// テンプレートの検証
// センチネルキーワードを持つテンプレートだけを通す。問い合わせに失敗した場合も通さない。

use tracing::{debug, warn};

use super::TemplateSource;
use crate::core::{ScaffoldError, ScaffoldResult};
use crate::manifest::ManifestStore;
use crate::registry::RegistryClient;

/// 検証を通過したテンプレート
///
/// このモジュールの外からは作れないため、初期化処理は必ず検証後に行われる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedTemplate {
    source: TemplateSource,
}

impl VerifiedTemplate {
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }
}

pub struct TemplateVerifier<'a, R: ?Sized, M: ?Sized> {
    registry: &'a R,
    store: &'a M,
    sentinel: &'a str,
}

impl<'a, R, M> TemplateVerifier<'a, R, M>
where
    R: RegistryClient + ?Sized,
    M: ManifestStore + ?Sized,
{
    pub fn new(registry: &'a R, store: &'a M, sentinel: &'a str) -> Self {
        Self {
            registry,
            store,
            sentinel,
        }
    }

    pub async fn verify(&self, source: TemplateSource) -> ScaffoldResult<VerifiedTemplate> {
        let template = source.to_string();

        let keywords = match &source {
            TemplateSource::Local(path) => self
                .store
                .read(path)
                .await
                .map(|manifest| manifest.keywords())
                .map_err(|e| ScaffoldError::verification_unavailable(&template, e.into()))?,
            TemplateSource::Remote(spec) => self
                .registry
                .fetch_keywords(spec)
                .await
                .map_err(|e| ScaffoldError::verification_unavailable(&template, e))?,
        };
        debug!(%template, ?keywords, "template keywords");

        if keywords.iter().any(|k| k == self.sentinel) {
            Ok(VerifiedTemplate { source })
        } else {
            warn!(%template, sentinel = self.sentinel, "template is not tagged");
            Err(ScaffoldError::UnauthorizedTemplate {
                template,
                sentinel: self.sentinel.to_string(),
            })
        }
    }
}
