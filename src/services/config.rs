use serde::{Deserialize, Serialize};

/// Prefixes tried, in order, before the bare key.
const ENV_PREFIXES: [&str; 2] = ["REACT_APP_", "VITE_"];

/// Datastore settings. Every field is optional; without an API key and a
/// database URL the app runs local-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl FirebaseConfig {
    /// Resolve each `FIREBASE_*` key through `lookup`, trying the prefixed
    /// variants first. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> Option<String> {
            ENV_PREFIXES
                .iter()
                .map(|prefix| format!("{prefix}{key}"))
                .chain(std::iter::once(key.to_string()))
                .find_map(|name| lookup(&name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            api_key: get("FIREBASE_API_KEY"),
            auth_domain: get("FIREBASE_AUTH_DOMAIN"),
            database_url: get("FIREBASE_DATABASE_URL"),
            project_id: get("FIREBASE_PROJECT_ID"),
            storage_bucket: get("FIREBASE_STORAGE_BUCKET"),
            messaging_sender_id: get("FIREBASE_MESSAGING_SENDER_ID"),
            app_id: get("FIREBASE_APP_ID"),
        }
    }

    /// Values baked in when the wasm bundle was built.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| build_env(name).map(str::to_string))
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some() && self.database_url().is_some()
    }
}

// option_env! needs literals, so every accepted name is spelled out.
fn build_env(name: &str) -> Option<&'static str> {
    match name {
        "REACT_APP_FIREBASE_API_KEY" => option_env!("REACT_APP_FIREBASE_API_KEY"),
        "VITE_FIREBASE_API_KEY" => option_env!("VITE_FIREBASE_API_KEY"),
        "FIREBASE_API_KEY" => option_env!("FIREBASE_API_KEY"),
        "REACT_APP_FIREBASE_AUTH_DOMAIN" => option_env!("REACT_APP_FIREBASE_AUTH_DOMAIN"),
        "VITE_FIREBASE_AUTH_DOMAIN" => option_env!("VITE_FIREBASE_AUTH_DOMAIN"),
        "FIREBASE_AUTH_DOMAIN" => option_env!("FIREBASE_AUTH_DOMAIN"),
        "REACT_APP_FIREBASE_DATABASE_URL" => option_env!("REACT_APP_FIREBASE_DATABASE_URL"),
        "VITE_FIREBASE_DATABASE_URL" => option_env!("VITE_FIREBASE_DATABASE_URL"),
        "FIREBASE_DATABASE_URL" => option_env!("FIREBASE_DATABASE_URL"),
        "REACT_APP_FIREBASE_PROJECT_ID" => option_env!("REACT_APP_FIREBASE_PROJECT_ID"),
        "VITE_FIREBASE_PROJECT_ID" => option_env!("VITE_FIREBASE_PROJECT_ID"),
        "FIREBASE_PROJECT_ID" => option_env!("FIREBASE_PROJECT_ID"),
        "REACT_APP_FIREBASE_STORAGE_BUCKET" => option_env!("REACT_APP_FIREBASE_STORAGE_BUCKET"),
        "VITE_FIREBASE_STORAGE_BUCKET" => option_env!("VITE_FIREBASE_STORAGE_BUCKET"),
        "FIREBASE_STORAGE_BUCKET" => option_env!("FIREBASE_STORAGE_BUCKET"),
        "REACT_APP_FIREBASE_MESSAGING_SENDER_ID" => option_env!("REACT_APP_FIREBASE_MESSAGING_SENDER_ID"),
        "VITE_FIREBASE_MESSAGING_SENDER_ID" => option_env!("VITE_FIREBASE_MESSAGING_SENDER_ID"),
        "FIREBASE_MESSAGING_SENDER_ID" => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
        "REACT_APP_FIREBASE_APP_ID" => option_env!("REACT_APP_FIREBASE_APP_ID"),
        "VITE_FIREBASE_APP_ID" => option_env!("VITE_FIREBASE_APP_ID"),
        "FIREBASE_APP_ID" => option_env!("FIREBASE_APP_ID"),
        _ => None,
    }
}
