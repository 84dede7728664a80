use serde::{Deserialize, Serialize};

/// NPK levels as reported by the soil sensor, each a percentage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpkReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
}

impl NpkReading {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen: Some(nitrogen),
            phosphorus: Some(phosphorus),
            potassium: Some(potassium),
        }
    }

    /// True when no nutrient was reported at all
    pub fn is_empty(&self) -> bool {
        self.nitrogen.is_none() && self.phosphorus.is_none() && self.potassium.is_none()
    }
}

/// Snapshot of soil conditions supplied by the caller.
///
/// Every field is optional on the wire; analysis degrades per missing field
/// instead of rejecting the whole reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npk: Option<NpkReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(
        default,
        rename = "lastUpdate",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update: Option<String>,
}

impl SensorReading {
    /// NPK block, only when at least one nutrient is present
    pub fn npk_present(&self) -> Option<&NpkReading> {
        self.npk.as_ref().filter(|npk| !npk.is_empty())
    }
}

/// Agricultural season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Dry,
    Wet,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Dry => "dry",
            Season::Wet => "wet",
        }
    }

    /// Short label used in chat replies ("Musim Kering")
    pub fn short_label(&self) -> &'static str {
        match self {
            Season::Dry => "Kering",
            Season::Wet => "Hujan",
        }
    }

    /// Full season name used on the dashboard
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Dry => "Musim Kemarau",
            Season::Wet => "Musim Hujan",
        }
    }

    pub fn next(&self) -> Season {
        match self {
            Season::Dry => Season::Wet,
            Season::Wet => Season::Dry,
        }
    }
}

/// How the current season of a settings row is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonMode {
    Auto,
    ManualDry,
    ManualWet,
}

impl SeasonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonMode::Auto => "auto",
            SeasonMode::ManualDry => "manual_dry",
            SeasonMode::ManualWet => "manual_wet",
        }
    }
}

/// Farming context chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantPreference {
    Sawah,
    LahanKering,
    Hidroponik,
}

impl PlantPreference {
    pub const ALL: [PlantPreference; 3] = [
        PlantPreference::Sawah,
        PlantPreference::LahanKering,
        PlantPreference::Hidroponik,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantPreference::Sawah => "sawah",
            PlantPreference::LahanKering => "lahan-kering",
            PlantPreference::Hidroponik => "hidroponik",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlantPreference::Sawah => "Tanaman Sawah",
            PlantPreference::LahanKering => "Lahan Kering",
            PlantPreference::Hidroponik => "Hidroponik",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        PlantPreference::ALL
            .into_iter()
            .find(|pref| pref.as_str() == value)
    }

    /// Resolve an optional raw value, falling back to lahan-kering
    pub fn or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

impl Default for PlantPreference {
    fn default() -> Self {
        PlantPreference::LahanKering
    }
}

/// One acceptable band for moisture and pH
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalThresholds {
    pub moisture_min: f64,
    pub moisture_max: f64,
    pub ph_min: f64,
    pub ph_max: f64,
}

impl SeasonalThresholds {
    pub const fn new(moisture_min: f64, moisture_max: f64, ph_min: f64, ph_max: f64) -> Self {
        Self {
            moisture_min,
            moisture_max,
            ph_min,
            ph_max,
        }
    }
}

/// Per-user seasonal configuration, one row per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSettings {
    pub user_id: String,
    pub season_mode: SeasonMode,
    pub current_season: Season,
    pub dry_season_settings: SeasonalThresholds,
    pub wet_season_settings: SeasonalThresholds,
    pub monitoring_interval_dry: u32,
    pub monitoring_interval_wet: u32,
    pub power_conservation_enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Severity attached to a recommendation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Critical,
    Urgent,
    Warning,
    Info,
}

/// Independent advisory produced from a sensor reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

/// Kind of text a bot reply carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Text,
    Suggestion,
    Analysis,
    Error,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Suggestion => "suggestion",
            MessageType::Analysis => "analysis",
            MessageType::Error => "error",
        }
    }
}

/// Rendered chatbot answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BotReply {
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub suggestions: Vec<&'static str>,
}

/// Who wrote a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// Append-only conversation log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub conversation_id: String,
    pub entry_id: String,
    pub message: String,
    pub sender: Sender,
    pub message_type: MessageType,
    pub question_id: Option<String>,
    pub created_at: String,
}

impl ConversationEntry {
    /// Sort key that keeps entries in write order within a conversation
    pub fn sort_key(&self) -> String {
        format!("{}#{}", self.created_at, self.entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_reading_deserializes_partial_payload() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"moisture": 63, "npk": {"nitrogen": 45}}"#).unwrap();

        assert_eq!(reading.moisture, Some(63.0));
        assert_eq!(reading.ph, None);
        let npk = reading.npk_present().unwrap();
        assert_eq!(npk.nitrogen, Some(45.0));
        assert_eq!(npk.potassium, None);
    }

    #[test]
    fn test_sensor_reading_last_update_uses_camel_case() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"lastUpdate": "2024-05-01T08:00:00Z"}"#).unwrap();
        assert_eq!(reading.last_update.as_deref(), Some("2024-05-01T08:00:00Z"));

        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("lastUpdate"));
        assert!(!json.contains("moisture"));
    }

    #[test]
    fn test_empty_npk_block_is_not_present() {
        let reading = SensorReading {
            npk: Some(NpkReading::default()),
            ..Default::default()
        };
        assert!(reading.npk_present().is_none());
    }

    #[test]
    fn test_plant_preference_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlantPreference::LahanKering).unwrap(),
            "\"lahan-kering\""
        );
        assert_eq!(PlantPreference::parse("sawah"), Some(PlantPreference::Sawah));
        assert_eq!(PlantPreference::parse("kebun"), None);
        assert_eq!(
            PlantPreference::or_default(Some("kebun")),
            PlantPreference::LahanKering
        );
        assert_eq!(PlantPreference::or_default(None), PlantPreference::LahanKering);
    }

    #[test]
    fn test_season_mode_wire_names() {
        let mode: SeasonMode = serde_json::from_str("\"manual_wet\"").unwrap();
        assert_eq!(mode, SeasonMode::ManualWet);
        assert_eq!(SeasonMode::ManualDry.as_str(), "manual_dry");
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = Recommendation {
            kind: RecommendationKind::Urgent,
            title: "Nitrogen Rendah",
            message: "m",
            action: "a",
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "urgent");
        assert_eq!(json["title"], "Nitrogen Rendah");
    }

    #[test]
    fn test_conversation_entry_sort_key() {
        let entry = ConversationEntry {
            conversation_id: "conv-1".to_string(),
            entry_id: "abc".to_string(),
            message: "halo".to_string(),
            sender: Sender::User,
            message_type: MessageType::Text,
            question_id: None,
            created_at: "2024-05-01T08:00:00+00:00".to_string(),
        };
        assert_eq!(entry.sort_key(), "2024-05-01T08:00:00+00:00#abc");
    }
}
