// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Language extractor used to pick message templates
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let default_lang = "en".to_string();

        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    // "zh-TW" -> "zh", "en" -> "en"
                    .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            })
            .unwrap_or(default_lang);

        Ok(Locale(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn locale_for(header_value: Option<&str>) -> String {
        let mut builder = Request::builder();
        if let Some(v) = header_value {
            builder = builder.header(header::ACCEPT_LANGUAGE, v);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let Ok(Locale(lang)) = Locale::from_request_parts(&mut parts, &()).await;
        lang
    }

    #[tokio::test]
    async fn picks_primary_subtag_of_preferred_language() {
        assert_eq!(locale_for(Some("zh-TW,zh;q=0.9,en;q=0.8")).await, "zh");
    }

    #[tokio::test]
    async fn defaults_to_english_without_header() {
        assert_eq!(locale_for(None).await, "en");
    }
}
