use anyhow::Context;
use contracts::domain::a001_account::ApiSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    pub base_url: String,
    pub schema: ApiSchema,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    pub currency_prefix: String,
}

/// User-facing texts
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MessagesConfig {
    pub load_failed: String,
    pub transaction_failed: String,
    pub connection_error: String,
    pub no_transactions: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
schema = "current"

[display]
currency_prefix = "R$"

[messages]
load_failed = "Não foi possível carregar os detalhes da conta."
transaction_failed = "Ocorreu um erro."
connection_error = "Erro de conexão. Tente novamente."
no_transactions = "Nenhuma transação registada."
"#;

/// Page element that may carry a TOML override
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Parse the embedded default configuration
pub fn default_config() -> anyhow::Result<ClientConfig> {
    toml::from_str(DEFAULT_CONFIG).context("embedded default config is invalid")
}

/// Apply a TOML override on top of the defaults.
///
/// Tables are merged key by key, so an override only needs the keys it
/// changes.
pub fn config_with_override(override_toml: &str) -> anyhow::Result<ClientConfig> {
    let mut base: toml::Table =
        toml::from_str(DEFAULT_CONFIG).context("embedded default config is invalid")?;
    let overlay: toml::Table = toml::from_str(override_toml).context("config override is not valid TOML")?;
    merge_tables(&mut base, overlay);
    toml::Value::Table(base)
        .try_into()
        .context("config override has unexpected values")
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration for the running page.
///
/// Search order:
/// 1. `<script type="application/toml" id="app-config">` in the document
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<ClientConfig> {
    let override_text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match override_text {
        Some(text) if !text.trim().is_empty() => {
            log::info!("Loading config from #{}", CONFIG_ELEMENT_ID);
            config_with_override(&text)
        }
        _ => {
            log::info!("Using default embedded configuration");
            default_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.schema, ApiSchema::Current);
        assert_eq!(config.display.currency_prefix, "R$");
        assert_eq!(config.messages.connection_error, "Erro de conexão. Tente novamente.");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = config_with_override(
            r#"
            [api]
            schema = "legacy"

            [messages]
            no_transactions = "No transactions yet."
            "#,
        )
        .unwrap();
        assert_eq!(config.api.schema, ApiSchema::Legacy);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.messages.no_transactions, "No transactions yet.");
        assert_eq!(config.messages.transaction_failed, "Ocorreu um erro.");
        assert_eq!(config.display.currency_prefix, "R$");
    }

    #[test]
    fn test_bad_override_is_an_error() {
        assert!(config_with_override("[api]\nschema = \"v3\"").is_err());
        assert!(config_with_override("not toml at all [").is_err());
    }
}
