//! First-match keyword classification of chat messages.
//!
//! Keyword sets overlap ("pupuk npk" is both nutrition and fertilizer), so
//! the rules are an ordered slice and the first rule with a hit wins.

use serde::Serialize;

/// Canned response family a message is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFamily {
    Nutrition,
    Irrigation,
    Fertilizer,
    PestDisease,
    Weather,
    Ph,
    General,
}

impl ResponseFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFamily::Nutrition => "nutrition",
            ResponseFamily::Irrigation => "irrigation",
            ResponseFamily::Fertilizer => "fertilizer",
            ResponseFamily::PestDisease => "pest_disease",
            ResponseFamily::Weather => "weather",
            ResponseFamily::Ph => "ph",
            ResponseFamily::General => "general",
        }
    }
}

/// One entry of the ordered classification table
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub family: ResponseFamily,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Substring match against an already lowercased message
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const KEYWORD_RULES: [KeywordRule; 6] = [
    KeywordRule {
        family: ResponseFamily::Nutrition,
        keywords: &["npk", "nutrisi", "nitrogen", "fosfor", "kalium"],
    },
    KeywordRule {
        family: ResponseFamily::Irrigation,
        keywords: &["air", "kelembaban", "siram", "irigasi"],
    },
    KeywordRule {
        family: ResponseFamily::Fertilizer,
        keywords: &["pupuk", "fertilizer"],
    },
    KeywordRule {
        family: ResponseFamily::PestDisease,
        keywords: &["hama", "pest", "penyakit", "ulat"],
    },
    KeywordRule {
        family: ResponseFamily::Weather,
        keywords: &["cuaca", "musim", "hujan", "kering"],
    },
    KeywordRule {
        family: ResponseFamily::Ph,
        keywords: &["ph", "asam", "basa"],
    },
];

pub fn classify(message: &str) -> ResponseFamily {
    let lowered = message.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.family)
        .unwrap_or(ResponseFamily::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_family_keyword() {
        assert_eq!(classify("Bagaimana NPK tanah saya?"), ResponseFamily::Nutrition);
        assert_eq!(classify("kapan harus siram?"), ResponseFamily::Irrigation);
        assert_eq!(classify("pupuk apa yang bagus"), ResponseFamily::Fertilizer);
        assert_eq!(classify("ada ulat di daun"), ResponseFamily::PestDisease);
        assert_eq!(classify("cuaca minggu ini"), ResponseFamily::Weather);
        assert_eq!(classify("tanah terlalu basa"), ResponseFamily::Ph);
        assert_eq!(classify("halo"), ResponseFamily::General);
        assert_eq!(classify(""), ResponseFamily::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("NITROGEN"), ResponseFamily::Nutrition);
        assert_eq!(classify("Irigasi Tetes"), ResponseFamily::Irrigation);
        assert_eq!(classify("PH"), ResponseFamily::Ph);
    }

    #[test]
    fn test_first_match_wins() {
        // Nutrition is checked before fertilizer
        assert_eq!(classify("pupuk npk"), ResponseFamily::Nutrition);
        // "hujan" would be weather, but "air" is checked earlier
        assert_eq!(classify("air hujan"), ResponseFamily::Irrigation);
        // "kering" contains no earlier keyword
        assert_eq!(classify("musim kering"), ResponseFamily::Weather);
        assert_eq!(classify("hama saat musim hujan"), ResponseFamily::PestDisease);
    }

    #[test]
    fn test_substring_matching() {
        // "pairing" contains "air"
        assert_eq!(classify("pairing"), ResponseFamily::Irrigation);
        // "photo" contains "ph"
        assert_eq!(classify("photo"), ResponseFamily::Ph);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<_> = KEYWORD_RULES.iter().map(|r| r.family).collect();
        assert_eq!(
            order,
            vec![
                ResponseFamily::Nutrition,
                ResponseFamily::Irrigation,
                ResponseFamily::Fertilizer,
                ResponseFamily::PestDisease,
                ResponseFamily::Weather,
                ResponseFamily::Ph,
            ]
        );
    }
}
