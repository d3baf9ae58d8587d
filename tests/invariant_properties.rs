//! Property tests for the engine invariants

use chrono::NaiveDate;
use proptest::prelude::*;
use thien_co::core::types::Language;
use thien_co::hexagram::{identify_hexagram, CastResult, Line};
use thien_co::zodiac::calculate_zodiac_data;

fn arb_line() -> impl Strategy<Value = Line> {
    (6u8..=9).prop_map(|v| Line::from_toss_value(v).unwrap())
}

fn arb_lines() -> impl Strategy<Value = [Line; 6]> {
    prop::array::uniform6(arb_line())
}

proptest! {
    /// The transformed hexagram exists exactly when moving lines exist, and
    /// always equals identification of the settled line set.
    #[test]
    fn prop_secondary_hexagram_invariant(lines in arb_lines()) {
        let result = CastResult::from_lines(lines).unwrap();

        let has_moving = lines.iter().any(|l| l.is_changing);
        prop_assert_eq!(result.secondary_hexagram.is_some(), has_moving);
        prop_assert_eq!(result.changing_line_indices.is_empty(), !has_moving);

        if has_moving {
            let settled = lines.map(|l| l.settled());
            let expected = identify_hexagram(&settled).unwrap();
            prop_assert_eq!(result.secondary_hexagram.unwrap(), expected);
        }
    }

    /// Identification is a pure function of the six polarities.
    #[test]
    fn prop_identification_is_deterministic(lines in arb_lines()) {
        let first = identify_hexagram(&lines).unwrap();
        let second = identify_hexagram(&lines).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!((1..=64).contains(&first.number));
    }

    /// Any date in a wide range yields twelve hours, six auspicious, spaced
    /// every other slot.
    #[test]
    fn prop_auspicious_hours_evenly_spaced(days in -40_000i64..40_000) {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 7).unwrap();
        let date = epoch + chrono::Duration::days(days);
        let data = calculate_zodiac_data(date, Language::Vietnamese);

        prop_assert_eq!(data.hours.len(), 12);
        let slots: Vec<usize> = data
            .hours
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_auspicious)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(slots.len(), 6);
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], 2);
        }
    }

    /// Sixty days apart always shares a day name.
    #[test]
    fn prop_sixty_day_period(days in -20_000i64..20_000) {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 7).unwrap();
        let date = epoch + chrono::Duration::days(days);
        let shifted = date + chrono::Duration::days(60);
        let a = calculate_zodiac_data(date, Language::English);
        let b = calculate_zodiac_data(shifted, Language::English);
        prop_assert_eq!(a.day_can_chi, b.day_can_chi);
    }
}
