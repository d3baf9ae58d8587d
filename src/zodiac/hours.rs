//! Zodiac-hour derivation for a Gregorian calendar day
//!
//! The day's place in the 60-day cycle is a whole-day offset from a fixed
//! Giáp Tý reference day, reduced modulo 10 (stem) and 12 (branch) with
//! `rem_euclid` so days before the reference resolve correctly. Hour slots
//! are fixed; only the auspicious rotation and the day name vary.

use crate::core::types::Language;
use crate::zodiac::tables::{
    AUSPICIOUS_STARS_EN, AUSPICIOUS_STARS_VI, CAN_EN, CAN_VI, CHI_EN, CHI_VI, HOUR_RANGES,
    INAUSPICIOUS_STARS_EN, INAUSPICIOUS_STARS_VI, START_HOUR_BY_DAY_CHI,
};
use chrono::NaiveDate;
use serde::Serialize;

/// One of the day's twelve two-hour periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacHour {
    /// Branch name of the period (Tý, Sửu, ...)
    pub name: &'static str,
    /// Fixed clock range, date-independent
    pub time_range: &'static str,
    /// Hoàng Đạo hour
    pub is_auspicious: bool,
    pub governing_star: &'static str,
}

/// Day name plus all twelve hours, in branch order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZodiacHourData {
    /// Combined stem + branch day name, e.g. "Giáp Tý"
    pub day_can_chi: String,
    pub hours: Vec<ZodiacHour>,
}

/// Reference Giáp Tý day. 2000-01-07 opened a 60-day cycle.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 7).expect("fixed epoch date is valid")
}

/// Stem and branch indices (0-9, 0-11) for a calendar day.
pub fn day_cycle_indices(date: NaiveDate) -> (usize, usize) {
    let day_diff = date.signed_duration_since(epoch()).num_days();
    let can = day_diff.rem_euclid(10) as usize;
    let chi = day_diff.rem_euclid(12) as usize;
    (can, chi)
}

/// Compute the Can Chi day name and the twelve classified hours for a date.
///
/// Takes a `NaiveDate`, so non-normalized input (day 32, month 13) is
/// unrepresentable; rejecting bad strings is the caller's concern.
pub fn calculate_zodiac_data(date: NaiveDate, language: Language) -> ZodiacHourData {
    let (can_index, chi_index) = day_cycle_indices(date);

    let (can_names, chi_names) = match language {
        Language::Vietnamese => (&CAN_VI, &CHI_VI),
        Language::English => (&CAN_EN, &CHI_EN),
    };
    let (auspicious_stars, inauspicious_stars) = match language {
        Language::Vietnamese => (&AUSPICIOUS_STARS_VI, &INAUSPICIOUS_STARS_VI),
        Language::English => (&AUSPICIOUS_STARS_EN, &INAUSPICIOUS_STARS_EN),
    };

    let day_can_chi = format!("{} {}", can_names[can_index], chi_names[chi_index]);

    let start = START_HOUR_BY_DAY_CHI[chi_index];
    let mut auspicious = [false; 12];
    for k in 0..6 {
        auspicious[(start + 2 * k) % 12] = true;
    }

    // Each star list is consumed in order as the slots are walked, so a
    // star's slot depends on where the day's rotation starts.
    let mut auspicious_iter = auspicious_stars.iter();
    let mut inauspicious_iter = inauspicious_stars.iter();
    let hours = (0..12)
        .map(|slot| {
            let is_auspicious = auspicious[slot];
            let governing_star = if is_auspicious {
                *auspicious_iter.next().expect("six auspicious slots")
            } else {
                *inauspicious_iter.next().expect("six inauspicious slots")
            };
            ZodiacHour {
                name: chi_names[slot],
                time_range: HOUR_RANGES[slot],
                is_auspicious,
                governing_star,
            }
        })
        .collect();

    ZodiacHourData { day_can_chi, hours }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch_is_giap_ty() {
        let vi = calculate_zodiac_data(date(2000, 1, 7), Language::Vietnamese);
        assert_eq!(vi.day_can_chi, "Giáp Tý");
        let en = calculate_zodiac_data(date(2000, 1, 7), Language::English);
        assert_eq!(en.day_can_chi, "Jia Zi");
    }

    #[test]
    fn test_known_day_names() {
        // 2000-01-01 was a Mậu Ngọ day, six days before the cycle opened.
        let data = calculate_zodiac_data(date(2000, 1, 1), Language::Vietnamese);
        assert_eq!(data.day_can_chi, "Mậu Ngọ");
    }

    #[test]
    fn test_pre_epoch_dates_resolve() {
        // One day before the epoch closes the previous cycle: Quý Hợi.
        let data = calculate_zodiac_data(date(2000, 1, 6), Language::Vietnamese);
        assert_eq!(data.day_can_chi, "Quý Hợi");

        // Far in the past, still well-defined.
        let (can, chi) = day_cycle_indices(date(1900, 3, 1));
        assert!(can < 10);
        assert!(chi < 12);
    }

    #[test]
    fn test_sixty_day_cycle_repeats() {
        let base = date(2024, 5, 21);
        let later = base + chrono::Duration::days(60);
        let a = calculate_zodiac_data(base, Language::Vietnamese);
        let b = calculate_zodiac_data(later, Language::Vietnamese);
        assert_eq!(a.day_can_chi, b.day_can_chi);
    }

    #[test]
    fn test_adjacent_days_advance_both_cycles() {
        let today = date(2024, 5, 21);
        let tomorrow = today + chrono::Duration::days(1);
        let (can_a, chi_a) = day_cycle_indices(today);
        let (can_b, chi_b) = day_cycle_indices(tomorrow);
        assert_eq!((can_a + 1) % 10, can_b);
        assert_eq!((chi_a + 1) % 12, chi_b);
    }

    #[test]
    fn test_exactly_six_auspicious_hours_evenly_spaced() {
        for offset in 0..60 {
            let day = date(2024, 1, 1) + chrono::Duration::days(offset);
            let data = calculate_zodiac_data(day, Language::Vietnamese);
            assert_eq!(data.hours.len(), 12);

            let auspicious: Vec<usize> = data
                .hours
                .iter()
                .enumerate()
                .filter(|(_, h)| h.is_auspicious)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(auspicious.len(), 6);

            // Every other slot from the first auspicious one.
            for pair in auspicious.windows(2) {
                assert_eq!(pair[1] - pair[0], 2);
            }
        }
    }

    #[test]
    fn test_auspicious_set_follows_day_branch_rotation() {
        for offset in 0..12 {
            let day = date(2024, 1, 1) + chrono::Duration::days(offset);
            let (_, chi) = day_cycle_indices(day);
            let start = START_HOUR_BY_DAY_CHI[chi];
            let expected: Vec<usize> = {
                let mut slots: Vec<usize> = (0..6).map(|k| (start + 2 * k) % 12).collect();
                slots.sort_unstable();
                slots
            };

            let data = calculate_zodiac_data(day, Language::Vietnamese);
            let auspicious: Vec<usize> = data
                .hours
                .iter()
                .enumerate()
                .filter(|(_, h)| h.is_auspicious)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(auspicious, expected);
            assert!(data.hours[start].is_auspicious);
        }
    }

    #[test]
    fn test_governing_stars_assigned_in_list_order() {
        let data = calculate_zodiac_data(date(2024, 5, 21), Language::Vietnamese);

        let assigned_auspicious: Vec<&str> = data
            .hours
            .iter()
            .filter(|h| h.is_auspicious)
            .map(|h| h.governing_star)
            .collect();
        assert_eq!(assigned_auspicious, AUSPICIOUS_STARS_VI);

        let assigned_inauspicious: Vec<&str> = data
            .hours
            .iter()
            .filter(|h| !h.is_auspicious)
            .map(|h| h.governing_star)
            .collect();
        assert_eq!(assigned_inauspicious, INAUSPICIOUS_STARS_VI);
    }

    #[test]
    fn test_hour_names_and_ranges_are_fixed() {
        let a = calculate_zodiac_data(date(2020, 2, 2), Language::Vietnamese);
        let b = calculate_zodiac_data(date(2025, 11, 9), Language::Vietnamese);
        for (x, y) in a.hours.iter().zip(b.hours.iter()) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.time_range, y.time_range);
        }
        assert_eq!(a.hours[0].name, "Tý");
        assert_eq!(a.hours[0].time_range, "23:00-01:00");
        assert_eq!(a.hours[11].name, "Hợi");
        assert_eq!(a.hours[11].time_range, "21:00-23:00");
    }
}
