use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for season detection and record timestamps
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current time as RFC3339 string
    /// Format: "2024-05-01T08:00:00+00:00"
    fn now_rfc3339(&self) -> String {
        self.now_utc().to_rfc3339()
    }

    /// Seconds since Unix epoch, used for anonymous conversation ids
    fn now_epoch_seconds(&self) -> i64 {
        self.now_utc().timestamp()
    }

    /// Calendar date that season rules are evaluated against
    fn today(&self) -> NaiveDate {
        self.now_utc().date_naive()
    }
}

/// Production implementation of Clock using system time
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant for deterministic tests
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }

    pub fn from_rfc3339(timestamp_str: &str) -> Result<Self, chrono::ParseError> {
        let timestamp = DateTime::parse_from_rfc3339(timestamp_str)?.with_timezone(&Utc);
        Ok(Self { timestamp })
    }

    /// Midnight UTC of the given calendar day, None for an impossible date
    pub fn on_date(year: i32, month: u32, day: u32) -> Option<Self> {
        let timestamp = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(0, 0, 0)?
            .and_utc();
        Some(Self { timestamp })
    }

    pub fn advance_days(&mut self, days: i64) {
        self.timestamp += chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
