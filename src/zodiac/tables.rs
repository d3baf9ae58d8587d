//! Static sexagenary-cycle reference data

/// The ten heavenly stems (Can), Vietnamese
pub static CAN_VI: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// The ten heavenly stems, romanized
pub static CAN_EN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

/// The twelve earthly branches (Chi), Vietnamese
pub static CHI_VI: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// The twelve earthly branches, romanized
pub static CHI_EN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

/// Fixed two-hour clock ranges, in branch order starting at Tý.
/// The Tý hour straddles midnight; the mapping never depends on the date.
pub static HOUR_RANGES: [&str; 12] = [
    "23:00-01:00",
    "01:00-03:00",
    "03:00-05:00",
    "05:00-07:00",
    "07:00-09:00",
    "09:00-11:00",
    "11:00-13:00",
    "13:00-15:00",
    "15:00-17:00",
    "17:00-19:00",
    "19:00-21:00",
    "21:00-23:00",
];

/// First auspicious hour slot for each day branch.
///
/// Traditional rotation: Dần/Thân days open at Tý, Mão/Dậu at Dần,
/// Thìn/Tuất at Thìn, Tỵ/Hợi at Ngọ, Tý/Ngọ at Thân, Sửu/Mùi at Tuất.
/// Branches six apart share a start, so only `chi mod 6` matters.
pub static START_HOUR_BY_DAY_CHI: [usize; 12] = [8, 10, 0, 2, 4, 6, 8, 10, 0, 2, 4, 6];

/// The six auspicious (Hoàng Đạo) governing stars, in the order they are
/// assigned while walking the hour slots from Tý to Hợi.
pub static AUSPICIOUS_STARS_VI: [&str; 6] = [
    "Thanh Long", "Minh Đường", "Kim Quỹ", "Bảo Quang", "Ngọc Đường", "Tư Mệnh",
];

pub static AUSPICIOUS_STARS_EN: [&str; 6] = [
    "Azure Dragon", "Bright Hall", "Golden Casket", "Precious Light", "Jade Hall", "Controller of Fate",
];

/// The six inauspicious (Hắc Đạo) governing stars, same assignment order.
pub static INAUSPICIOUS_STARS_VI: [&str; 6] = [
    "Thiên Hình", "Chu Tước", "Bạch Hổ", "Thiên Lao", "Huyền Vũ", "Câu Trần",
];

pub static INAUSPICIOUS_STARS_EN: [&str; 6] = [
    "Heavenly Punishment", "Vermilion Bird", "White Tiger", "Heavenly Prison", "Black Tortoise", "Hooked Array",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_hours_repeat_every_six_branches() {
        for chi in 0..6 {
            assert_eq!(START_HOUR_BY_DAY_CHI[chi], START_HOUR_BY_DAY_CHI[chi + 6]);
        }
    }

    #[test]
    fn test_start_hours_are_even_slots() {
        // Auspicious hours sit on every other slot, so each start is even.
        for &start in START_HOUR_BY_DAY_CHI.iter() {
            assert!(start < 12);
            assert_eq!(start % 2, 0);
        }
    }

    #[test]
    fn test_hour_ranges_cover_the_day() {
        // Each range spans two hours and chains into the next.
        for (i, range) in HOUR_RANGES.iter().enumerate() {
            let (from, to) = range.split_once('-').unwrap();
            let next = HOUR_RANGES[(i + 1) % 12].split_once('-').unwrap().0;
            assert_eq!(to, next, "range {} does not chain", from);
        }
    }
}
