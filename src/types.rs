use serde::{Deserialize, Deserializer, Serialize};

/// One headline from the news endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Timestamp text exactly as the server sent it (RFC 2822 from RSS feeds)
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One row of the drivers' championship table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(deserialize_with = "deserialize_count")]
    pub position: u32,
    pub name: String,
    pub constructor: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(deserialize_with = "deserialize_points")]
    pub points: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub wins: u32,
}

/// One row of the constructors' championship table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(deserialize_with = "deserialize_count")]
    pub position: u32,
    pub name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(deserialize_with = "deserialize_points")]
    pub points: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub wins: u32,
}

/// Body of a list endpoint: a bare array, or an `{"items": [...]}` envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Enveloped { items: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Enveloped { items } => items,
        }
    }
}

/// Standings servers emit numbers either as JSON numbers or as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Float(f64),
    Text(String),
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    let parsed = match value {
        NumberOrString::Int(n) => u32::try_from(n).ok(),
        NumberOrString::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        NumberOrString::Float(_) => None,
        NumberOrString::Text(ref s) => s.trim().parse::<u32>().ok(),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("expected a non-negative integer"))
}

fn deserialize_points<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n as f64),
        NumberOrString::Float(f) => Ok(f),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid points value: {}", s))),
    }
}

/// Empty and null sources both mean "no source"
fn deserialize_source<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
