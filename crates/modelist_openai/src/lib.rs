use std::borrow::Cow;

use anyhttp::HttpClient;
use secrecy::SecretString;

mod list_models;

const DEFAULT_URL: &str = "https://api.openai.com";

/// Lists models from any endpoint speaking the OpenAI `/v1/models` protocol.
pub struct OpenAiProvider<C: HttpClient> {
    client: C,
    url: Cow<'static, str>,
    api_key: SecretString,
}

impl<C: HttpClient> OpenAiProvider<C> {
    pub fn new(client: C, api_key: impl Into<SecretString>) -> Self {
        Self {
            client,
            url: Cow::Borrowed(DEFAULT_URL),
            api_key: api_key.into(),
        }
    }

    /// Sets the base url. See [`normalize_base_url`] for the accepted forms.
    pub fn url(mut self, url: impl Into<Cow<'static, str>>) -> Self {
        let url = url.into();
        // Normalization only strips suffixes, so the result is a prefix.
        let len = normalize_base_url(&url).len();
        self.url = match url {
            Cow::Borrowed(url) => Cow::Borrowed(&url[..len]),
            Cow::Owned(mut url) => {
                url.truncate(len);
                Cow::Owned(url)
            }
        };
        self
    }

    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.url
    }
}

/// Reduces a user supplied endpoint to the base that `/v1/...` paths are
/// appended to.
///
/// Trailing slashes are dropped, as are a trailing `/chat/completions`
/// (people often paste their chat url) and a trailing `/v1`.
pub fn normalize_base_url(url: &str) -> &str {
    let url = url.trim_end_matches('/');
    let url = url.strip_suffix("/chat/completions").unwrap_or(url);
    let url = url.trim_end_matches('/');
    url.strip_suffix("/v1").unwrap_or(url)
}
