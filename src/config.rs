use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use ratatui::style::Color;

use crate::formatting::{BoxChars, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

/// Default API server (the dashboard backend in development mode)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Seconds between automatic news refreshes
pub const DEFAULT_NEWS_REFRESH_INTERVAL: u64 = 300;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub base_url: String,
    /// Seconds between news refreshes; 0 turns the timer off
    pub news_refresh_interval: u64,
    pub date_format: String,
    pub time_format: String,
    pub use_unicode: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
}

/// Everything the renderers need, resolved from `Config`
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Option<Color>,
    pub info_fg: Color,
    pub error_fg: Color,
    pub date_format: String,
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            news_refresh_interval: DEFAULT_NEWS_REFRESH_INTERVAL,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            use_unicode: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.theme.selection_fg,
            unfocused_selection_fg: self.theme.unfocused_selection_fg,
            info_fg: Color::LightBlue,
            error_fg: Color::Red,
            date_format: self.date_format.clone(),
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl DisplayConfig {
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults when it is missing or invalid
///
/// Runs before logging is set up, so problems go to stderr.
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    load(&config_path).unwrap_or_else(|e| {
        eprintln!("{}; using defaults", e);
        Config::default()
    })
}

/// Parse one config file
pub fn load(path: &Path) -> Result<Config, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("ORANGE"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_color_rejects_multibyte_hex() {
        assert_eq!(parse_color("#aéaaa"), None);
        assert_eq!(parse_color("#éa"), None);
        assert!(toml::from_str::<Config>("[theme]\nselection_fg = \"#aéaaa\"").is_err());
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("invalid"), None);
    }

    #[test]
    fn test_unfocused_color_defaults_to_darker() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.unfocused_selection_fg(), Color::Rgb(127, 82, 0));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.news_refresh_interval, 300);
        assert_eq!(config.date_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r##"
base_url = "https://f1.example.com"
news_refresh_interval = 60

[theme]
selection_fg = "#00FFFF"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://f1.example.com");
        assert_eq!(config.news_refresh_interval, 60);
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.theme.selection_fg, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_invalid_color_is_an_error() {
        let toml_str = r#"
[theme]
selection_fg = "not-a-color"
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let path = std::env::temp_dir().join(format!("f1-top-config-{}.toml", std::process::id()));
        fs::write(&path, "news_refresh_interval = \"soon\"").unwrap();
        let result = load(&path);
        fs::remove_file(&path).unwrap();

        let message = result.unwrap_err();
        assert!(message.starts_with("Invalid config"));
        assert!(message.contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let path = std::env::temp_dir().join("f1-top-config-does-not-exist.toml");
        assert!(load(&path).unwrap_err().starts_with("Failed to read"));
    }

    #[test]
    fn test_display_config_follows_unicode_flag() {
        let mut config = Config::default();
        config.use_unicode = false;
        let display = config.display();
        assert_eq!(display.box_chars, BoxChars::ascii());
        assert_eq!(display.date_format, "%-m/%-d/%Y");
    }
}
