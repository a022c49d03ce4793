use crate::models::{Character, CharacterDetail, PageDescriptor};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "https://dragonball-api.com/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    NotFound,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        let kind = if status == reqwest::StatusCode::NOT_FOUND {
            ApiErrorKind::NotFound
        } else {
            ApiErrorKind::Http
        };
        Self {
            kind,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // `window.ENV.API_URL` wins, `window.ENV.api_url` is accepted too.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_api_url(&url_str);
                            }
                        }
                    }
                }
            }
        }

        Self::with_api_url(DEFAULT_API_URL)
    }

    pub fn with_api_url(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };
        Self {
            api_url: api_url.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Thin client over the three read-only character endpoints.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: EnvConfig::with_api_url(&base_url).api_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn characters_url(&self, page: u32, limit: u32) -> String {
        format!("{}/characters?page={page}&limit={limit}", self.base_url)
    }

    pub(crate) fn search_url(&self, name: &str) -> String {
        format!(
            "{}/characters?name={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    pub(crate) fn character_url(&self, id: &str) -> String {
        format!(
            "{}/characters/{}",
            self.base_url,
            urlencoding::encode(id.trim())
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        ctx: &str,
    ) -> ApiResult<T> {
        log::debug!("GET {url}");

        let client = reqwest::Client::new();
        let res = client.get(&url).send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    pub async fn get_characters(&self, page: u32, limit: u32) -> ApiResult<PageDescriptor> {
        self.get_json(self.characters_url(page, limit), "Failed to load characters")
            .await
    }

    pub async fn search_characters(&self, name: &str) -> ApiResult<Vec<Character>> {
        let data: serde_json::Value = self
            .get_json(self.search_url(name), "Failed to search characters")
            .await?;
        Self::parse_search_response(data)
    }

    pub async fn get_character(&self, id: &str) -> ApiResult<CharacterDetail> {
        self.get_json(self.character_url(id), "Failed to load character")
            .await
    }

    /// The name filter answers with a bare array; a paginated envelope is
    /// accepted as well in case the API starts wrapping it.
    pub(crate) fn parse_search_response(data: serde_json::Value) -> ApiResult<Vec<Character>> {
        let list = match data {
            serde_json::Value::Array(items) => serde_json::Value::Array(items),
            serde_json::Value::Object(mut obj) => obj
                .remove("items")
                .unwrap_or_else(|| serde_json::Value::Array(vec![])),
            other => return Err(ApiError::parse(format!("unexpected search payload: {other}"))),
        };
        serde_json::from_value(list).map_err(ApiError::parse)
    }
}
