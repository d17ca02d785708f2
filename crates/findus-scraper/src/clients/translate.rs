//! Best-effort translation client.
//!
//! Failures are swallowed: the contract guarantees some string comes back,
//! and the untranslated input is always an acceptable answer.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::services::TranslationService;

pub struct TranslationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TranslationClient {
    #[must_use]
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        TranslationClient { client, endpoint }
    }

    async fn try_translate(&self, text: &str) -> Option<String> {
        let url = format!(
            "{}?client=gtx&sl=auto&tl=ko&dt=t&q={}",
            self.endpoint,
            utf8_percent_encode(text, NON_ALPHANUMERIC)
        );
        let response = self.client.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let body: serde_json::Value = response.json().await.ok()?;

        // Response shape: [[["<translated>", "<source>", ...], ...], ...] —
        // the translation is split into segments, first element each.
        let segments = body.get(0)?.as_array()?;
        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0)?.as_str())
            .collect();
        (!translated.is_empty()).then_some(translated)
    }
}

impl TranslationService for TranslationClient {
    async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Some(translated) => translated,
            None => {
                tracing::warn!(text, "translation failed; keeping original text");
                text.to_owned()
            }
        }
    }
}
