use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2025;

/// Recommendation strategy the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Quick,
    Advanced,
    Both,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Quick, Mode::Advanced, Mode::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Advanced => "advanced",
            Self::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::Advanced => "Advanced",
            Self::Both => "Both",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Quick => 0,
            Self::Advanced => 1,
            Self::Both => 2,
        }
    }

    pub fn includes(self, method: Method) -> bool {
        !matches!(
            (self, method),
            (Self::Quick, Method::Advanced) | (Self::Advanced, Method::Quick)
        )
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two recommendation methods the service can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Quick,
    Advanced,
}

impl Method {
    pub fn fallback_error(self) -> &'static str {
        match self {
            Self::Quick => "Failed to get quick recommendations",
            Self::Advanced => "Failed to get advanced recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub songs: Vec<SongEntry>,
    #[serde(rename = "recommendation_type")]
    pub mode: Mode,
}

/// `artists` arrives either as a list or as a stringified list such as `"['A', 'B']"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Artists {
    List(Vec<String>),
    Literal(String),
}

impl Default for Artists {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl Artists {
    pub fn display(&self) -> String {
        match self {
            Self::List(names) => names.join(", "),
            Self::Literal(text) => text
                .chars()
                .filter(|ch| !matches!(ch, '[' | ']' | '\''))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongRecommendation {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Artists,
    #[serde(default)]
    pub year: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<SongRecommendation>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub quick: Option<MethodResult>,
    #[serde(default)]
    pub advanced: Option<MethodResult>,
}

impl RecommendationResponse {
    pub fn method(&self, method: Method) -> Option<&MethodResult> {
        match method {
            Method::Quick => self.quick.as_ref(),
            Method::Advanced => self.advanced.as_ref(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn format_year(year: Option<f64>) -> String {
    match year {
        Some(value) if value.is_finite() && value.fract() == 0.0 => format!("{}", value as i64),
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
