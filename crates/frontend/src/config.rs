/// Build mode the console is served in; selects which protected resources
/// the gateways talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Development,
    Production,
}

/// Resolved resource paths for the protected API.
///
/// Constructed once at startup and handed to the gateways explicitly; the
/// state layer never reads the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub page_config_resource: String,
    pub contents_resource: String,
}

impl ApiConfig {
    pub fn for_mode(mode: EnvMode) -> Self {
        match mode {
            EnvMode::Development => Self {
                page_config_resource: "page_config_test".to_string(),
                contents_resource: "contents_test".to_string(),
            },
            EnvMode::Production => Self {
                page_config_resource: "page_config".to_string(),
                contents_resource: "contents".to_string(),
            },
        }
    }

    pub fn development() -> Self {
        Self::for_mode(EnvMode::Development)
    }

    pub fn production() -> Self {
        Self::for_mode(EnvMode::Production)
    }
}

/// Prefix shared by every authenticated endpoint.
pub const PROTECTED_BASE: &str = "/api/protected";

pub fn protected_path(resource: &str) -> String {
    format!("{}/{}", PROTECTED_BASE, resource)
}
