//! Property Test: Chat Classification Order
//!
//! This property test verifies that:
//! - The first matching keyword family wins when a message mentions several
//! - Matching ignores case
//! - Messages without any keyword fall through to the general reply
//! - Every reply carries text and suggestions, with or without sensor data
//! - The same message and reading always produce the same reply

use proptest::prelude::*;
use soilsense::test_utils::generators;
use soilsense::{
    classify, classify_and_respond, MessageType, ResponseFamily, KEYWORD_RULES,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a message with keywords from two families goes to the earlier one
    #[test]
    fn prop_earlier_family_wins(
        first in 0usize..KEYWORD_RULES.len(),
        offset in 1usize..KEYWORD_RULES.len(),
        seed in any::<prop::sample::Index>(),
        seed2 in any::<prop::sample::Index>(),
    ) {
        let second = (first + offset).min(KEYWORD_RULES.len() - 1);
        prop_assume!(second > first);

        let early = &KEYWORD_RULES[first];
        let late = &KEYWORD_RULES[second];
        let early_kw = seed.get(early.keywords);
        let late_kw = seed2.get(late.keywords);

        let message = format!("tolong {} dan {}", late_kw, early_kw);
        prop_assert_eq!(classify(&message), early.family);
    }

    /// Property: matching is case-insensitive
    #[test]
    fn prop_case_insensitive(
        rule_index in 0usize..KEYWORD_RULES.len(),
        seed in any::<prop::sample::Index>(),
    ) {
        let rule = &KEYWORD_RULES[rule_index];
        let keyword = seed.get(rule.keywords);

        prop_assert_eq!(classify(&keyword.to_uppercase()), classify(keyword));
    }

    /// Property: neutral messages get the general reply
    #[test]
    fn prop_neutral_message_is_general(
        message in generators::neutral_message(),
        season in generators::season(),
    ) {
        prop_assert_eq!(classify(&message), ResponseFamily::General);

        let reply = classify_and_respond(&message, None, season);
        prop_assert_eq!(reply.message_type, MessageType::Text);
        prop_assert!(!reply.suggestions.is_empty());
    }

    /// Property: every family produces a non-empty reply for any reading
    #[test]
    fn prop_reply_never_empty(
        rule_index in 0usize..KEYWORD_RULES.len(),
        seed in any::<prop::sample::Index>(),
        reading in prop::option::of(generators::sensor_reading()),
        season in generators::season(),
    ) {
        let keyword = seed.get(KEYWORD_RULES[rule_index].keywords);
        let reply = classify_and_respond(keyword, reading.as_ref(), season);

        prop_assert!(!reply.text.is_empty());
        prop_assert!(!reply.suggestions.is_empty());
        prop_assert_ne!(reply.message_type, MessageType::Error);
    }

    /// Property: responding is deterministic for identical input
    #[test]
    fn prop_reply_is_deterministic(
        message in prop_oneof![
            ".{0,80}",
            generators::neutral_message(),
            (0usize..KEYWORD_RULES.len(), any::<prop::sample::Index>())
                .prop_map(|(i, seed)| format!("cek {}", seed.get(KEYWORD_RULES[i].keywords))),
        ],
        reading in prop::option::of(generators::sensor_reading()),
        season in generators::season(),
    ) {
        let first = classify_and_respond(&message, reading.as_ref(), season);
        let second = classify_and_respond(&message, reading.as_ref(), season);

        prop_assert_eq!(first, second);
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;
    use soilsense::{NpkReading, Season, SensorReading};

    #[test]
    fn test_mixed_messages() {
        assert_eq!(classify("pupuk untuk npk rendah"), ResponseFamily::Nutrition);
        assert_eq!(classify("hama muncul saat musim hujan"), ResponseFamily::PestDisease);
        assert_eq!(classify("Kapan SIRAM saat cuaca panas?"), ResponseFamily::Irrigation);
        assert_eq!(classify("halo"), ResponseFamily::General);
    }

    #[test]
    fn test_nutrition_with_and_without_npk() {
        let reading = SensorReading {
            npk: Some(NpkReading::new(45.0, 32.0, 78.0)),
            ..Default::default()
        };

        let with_data = classify_and_respond("cek npk", Some(&reading), Season::Dry);
        assert_eq!(with_data.message_type, MessageType::Analysis);

        let without = classify_and_respond("cek npk", None, Season::Dry);
        assert_eq!(without.message_type, MessageType::Text);
    }
}
