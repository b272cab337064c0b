use web_sys::window;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[cfg(debug_assertions)]
pub fn get_provider_base_url() -> &'static str {
    // Lets a local mock stand in for the provider during development
    match option_env!("GEMINI_BASE_URL") {
        Some(url) => url,
        None => "https://generativelanguage.googleapis.com",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_provider_base_url() -> &'static str {
    "https://generativelanguage.googleapis.com"
}

/// Settings for the text-generation provider, read fresh for every request.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl ProviderConfig {
    /// Host page `<meta>` tags win over values baked in at compile time.
    pub fn load() -> Self {
        let api_key = meta_content("gemini-api-key")
            .or_else(|| option_env!("GEMINI_API_KEY").map(str::to_string))
            .filter(|key| !key.trim().is_empty());
        let model = meta_content("gemini-model")
            .or_else(|| option_env!("GEMINI_MODEL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            base_url: get_provider_base_url().to_string(),
            model,
            api_key,
        }
    }

    pub fn endpoint_url(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(api_key)
        )
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    element
        .get_attribute("content")
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_encodes_key_and_strips_trailing_slash() {
        let config = ProviderConfig {
            base_url: "http://localhost:8080/".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        };
        assert_eq!(
            config.endpoint_url("a b&c"),
            "http://localhost:8080/v1beta/models/gemini-3-flash-preview:generateContent?key=a%20b%26c"
        );
    }
}
