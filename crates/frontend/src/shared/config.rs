use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableDefaults,
    pub export: ExportFormats,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Port of the REST API on the host serving the dashboard
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableDefaults {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Quiet period before a search query is sent
    pub debounce_ms: u32,
    pub row_id_field: String,
}

/// Export formats offered by the table toolbar
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ExportFormats {
    pub csv: bool,
    pub excel: bool,
    pub pdf: bool,
    pub print: bool,
}

impl ExportFormats {
    pub fn none() -> Self {
        Self {
            csv: false,
            excel: false,
            pdf: false,
            print: false,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.csv || self.excel || self.pdf || self.print
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
            debounce_ms: 500,
            row_id_field: "id".to_string(),
        }
    }
}

impl Default for ExportFormats {
    fn default() -> Self {
        Self {
            csv: true,
            excel: true,
            pdf: true,
            print: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            table: TableDefaults::default(),
            export: ExportFormats::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[table]
page_size = 20
page_size_options = [10, 20, 50, 100]
debounce_ms = 500
row_id_field = "id"

[export]
csv = true
excel = true
pdf = true
print = true
"#;

impl AppConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config.normalized())
    }

    /// Load the embedded configuration
    pub fn load() -> Self {
        match Self::from_toml_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to built-in defaults: {}", e);
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.table.page_size == 0 {
            self.table.page_size = TableDefaults::default().page_size;
        }
        if !self.table.page_size_options.contains(&self.table.page_size) {
            self.table.page_size_options.push(self.table.page_size);
            self.table.page_size_options.sort_unstable();
        }
        if self.table.row_id_field.trim().is_empty() {
            self.table.row_id_field = TableDefaults::default().row_id_field;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.table.debounce_ms, 500);
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_toml_str("[table]\ndebounce_ms = 300\n").unwrap();
        assert_eq!(config.table.debounce_ms, 300);
        assert_eq!(config.table.page_size, 20);
        assert!(config.export.any_enabled());
    }

    #[test]
    fn test_page_size_added_to_options() {
        let config = AppConfig::from_toml_str("[table]\npage_size = 25\n").unwrap();
        assert_eq!(config.table.page_size_options, vec![10, 20, 25, 50, 100]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = AppConfig::from_toml_str("[table]\npage_size = 0\n").unwrap();
        assert_eq!(config.table.page_size, 20);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[table\npage_size = ").is_err());
    }

    #[test]
    fn test_export_formats_none() {
        assert!(!ExportFormats::none().any_enabled());
    }
}
