//! Pythagorean numerology derived from the birth date digits.

use serde::{Deserialize, Serialize};

use crate::date::BirthDate;
use crate::language::Language;

/// Sum of the decimal digits of `n`.
fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit-sum `n` down to a single digit, preserving the master numbers
/// 11 and 22 unreduced.
///
/// 33 is deliberately not treated as a master here: preserving it would
/// let component triples like 11+11+11 (e.g. 1910-11-11) escape the
/// documented {1..9, 11, 22} result range, so it reduces to 6 like any
/// other composite.
pub fn reduce_keeping_masters(mut n: u32) -> u32 {
    while n > 9 && n != 11 && n != 22 {
        n = digit_sum(n);
    }
    n
}

/// Digit-sum `n` down to a single digit with no master-number exception.
fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Life path number: each of day, month, and year is digit-sum reduced
/// (masters preserved), then the three are summed and reduced again.
///
/// Reachable range is {1..9, 11, 22}.
pub fn life_path(day: u32, month: u32, year: i32) -> u32 {
    let day_sum = reduce_keeping_masters(day);
    let month_sum = reduce_keeping_masters(month);
    let year_sum = reduce_keeping_masters(year.unsigned_abs());
    reduce_keeping_masters(day_sum + month_sum + year_sum)
}

/// Karma number: `day mod 9`, with 0 mapped to 9. Always in 1..=9.
pub fn karma(day: u32) -> u32 {
    match day % 9 {
        0 => 9,
        r => r,
    }
}

/// Soul urge number: the karma rule applied to `month + day`.
pub fn soul_urge(month: u32, day: u32) -> u32 {
    karma(month + day)
}

/// Personality number: the karma rule applied to the birth day.
pub fn personality(day: u32) -> u32 {
    karma(day)
}

/// Penta number: the `day`-th pentagonal number `day*(3*day - 1)/2`,
/// digit-sum reduced to a single digit (no master exception).
pub fn penta_number(day: u32) -> u32 {
    reduce_to_digit(day * (3 * day - 1) / 2)
}

/// Compass directions for the lucky-direction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// North.
    North,
}

impl Direction {
    /// The English direction name.
    pub fn name(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::North => "North",
        }
    }

    /// The direction name in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (_, Language::English) => self.name(),
            (Self::East, Language::Thai) => "ตะวันออก",
            (Self::South, Language::Thai) => "ใต้",
            (Self::West, Language::Thai) => "ตะวันตก",
            (Self::North, Language::Thai) => "เหนือ",
            (Self::East, Language::Chinese) => "东",
            (Self::South, Language::Chinese) => "南",
            (Self::West, Language::Chinese) => "西",
            (Self::North, Language::Chinese) => "北",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lucky direction: the birth day cycled through east/south/west/north.
pub fn lucky_direction(day: u32) -> Direction {
    match day % 4 {
        0 => Direction::East,
        1 => Direction::South,
        2 => Direction::West,
        _ => Direction::North,
    }
}

/// The numerology bundle computed from one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numerology {
    /// Life path number ({1..9, 11, 22}).
    pub life_path: u32,
    /// Karma number (1..=9).
    pub karma: u32,
    /// Soul urge number (1..=9).
    pub soul_urge: u32,
    /// Personality number (1..=9).
    pub personality: u32,
    /// Penta number (1..=9).
    pub penta: u32,
}

impl Numerology {
    /// Compute the full numerology set for a birth date.
    pub fn for_date(date: BirthDate) -> Self {
        let (day, month, year) = (date.day(), date.month(), date.year());
        Self {
            life_path: life_path(day, month, year),
            karma: karma(day),
            soul_urge: soul_urge(month, day),
            personality: personality(day),
            penta: penta_number(day),
        }
    }
}

/// Trait name and Thai description for each reachable life path number,
/// including the master numbers 11 and 22.
pub fn life_path_trait(life_path: u32) -> Option<(&'static str, &'static str)> {
    match life_path {
        1 => Some(("Independence", "ความเป็นผู้นำ, สร้างสรรค์, กล้าหาญ")),
        2 => Some(("Cooperation", "ความสมดุล, ร่วมมือได้ดี, อ่อนโยน")),
        3 => Some(("Expression", "การสื่อสาร, ความสร้างสรรค์, มีเสน่ห์")),
        4 => Some(("Foundation", "ความมั่นคง, ปฏิบัติได้จริง, ซื่อสัตย์")),
        5 => Some(("Change", "ความเป็นอิสระ, ผจญภัย, ปรับตัวเก่ง")),
        6 => Some(("Harmony", "ความรับผิดชอบ, รักครอบครัว, เมตตา")),
        7 => Some(("Spirituality", "การวิเคราะห์, ลึกลับ, สงบ")),
        8 => Some(("Power", "ความสำเร็จ, อำนาจ, ความมั่งคั่ง")),
        9 => Some(("Humanitarianism", "เมตตากรุณา, ใจกว้าง, เสียสละ")),
        11 => Some(("Intuition", "ญาณหยั่งรู้, แรงบันดาลใจ, จิตวิญญาณ")),
        22 => Some(("Master Builder", "วิสัยทัศน์, นักสร้าง, ความสำเร็จใหญ่")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digit_reduction_preserves_masters() {
        assert_eq!(reduce_keeping_masters(11), 11);
        assert_eq!(reduce_keeping_masters(22), 22);
        assert_eq!(reduce_keeping_masters(33), 6); // not a master here
        assert_eq!(reduce_keeping_masters(29), 11); // 2+9
        assert_eq!(reduce_keeping_masters(1990), 1); // 19 -> 10 -> 1
    }

    #[test]
    fn life_path_concrete_scenario() {
        // 1990-01-01: 1990 -> 19 -> 10 -> 1; 01 -> 1; 01 -> 1; total 3.
        assert_eq!(life_path(1, 1, 1990), 3);
    }

    #[test]
    fn life_path_master_component_handling() {
        // 1992-02-29: day 29 -> 11 (master), month 2, year 1992 -> 21 -> 3.
        // Total 11 + 2 + 3 = 16 -> 7.
        assert_eq!(life_path(29, 2, 1992), 7);
        // 1910-11-11: all three components reduce to 11; the 33 total is
        // not preserved and reduces to 6.
        assert_eq!(life_path(11, 11, 1910), 6);
        // 1910-09-02: 2 + 9 + 11 = 22, preserved as a master.
        assert_eq!(life_path(2, 9, 1910), 22);
    }

    #[test]
    fn karma_never_zero() {
        assert_eq!(karma(9), 9);
        assert_eq!(karma(18), 9);
        assert_eq!(karma(27), 9);
        assert_eq!(karma(1), 1);
        assert_eq!(karma(31), 4);
    }

    #[test]
    fn penta_number_samples() {
        // day 1 -> 1; day 5 -> 35 -> 8; day 31 -> 1426 -> 13 -> 4.
        assert_eq!(penta_number(1), 1);
        assert_eq!(penta_number(5), 8);
        assert_eq!(penta_number(31), 4);
    }

    #[test]
    fn lucky_direction_cycles() {
        assert_eq!(lucky_direction(1), Direction::South);
        assert_eq!(lucky_direction(2), Direction::West);
        assert_eq!(lucky_direction(3), Direction::North);
        assert_eq!(lucky_direction(4), Direction::East);
        assert_eq!(lucky_direction(5), Direction::South);
    }

    #[test]
    fn traits_cover_reachable_life_paths() {
        for n in (1..=9).chain([11, 22]) {
            assert!(life_path_trait(n).is_some(), "missing trait for {n}");
        }
        assert!(life_path_trait(10).is_none());
        assert!(life_path_trait(0).is_none());
    }

    #[test]
    fn exhaustive_life_path_range_over_valid_dates() {
        // Every real date between 1900 and 2100 lands in {1..9, 11, 22};
        // 33 never arises.
        let mut seen_master = false;
        for year in 1900..=2100 {
            for month in 1..=12u32 {
                for day in 1..=31u32 {
                    if BirthDate::new(year, month, day).is_err() {
                        continue;
                    }
                    let lp = life_path(day, month, year);
                    assert!(
                        (1..=9).contains(&lp) || lp == 11 || lp == 22,
                        "{year}-{month}-{day} gave life path {lp}"
                    );
                    seen_master |= lp == 11 || lp == 22;
                }
            }
        }
        assert!(seen_master, "master numbers should be reachable");
    }

    proptest! {
        #[test]
        fn karma_and_soul_urge_in_range(month in 1u32..=12, day in 1u32..=31) {
            let k = karma(day);
            prop_assert!((1..=9).contains(&k));
            let s = soul_urge(month, day);
            prop_assert!((1..=9).contains(&s));
            let p = personality(day);
            prop_assert!((1..=9).contains(&p));
        }

        #[test]
        fn penta_in_single_digit_range(day in 1u32..=31) {
            let p = penta_number(day);
            prop_assert!((1..=9).contains(&p));
        }
    }
}
