//! Zodiac sign tables across traditions: Western, Chinese, moon, and Vedic.
//!
//! Every lookup here is a calendar bucket, not an ephemeris computation.
//! The moon and Vedic signs in particular are bucketed by the 30-day-month
//! day-of-year approximation (see [`crate::date::BirthDate::approx_day_of_year`]).

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// The twelve tropical zodiac signs, in calendar order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WesternSign {
    /// The Ram (ends Apr 20).
    Aries,
    /// The Bull (ends May 21).
    Taurus,
    /// The Twins (ends Jun 21).
    Gemini,
    /// The Crab (ends Jul 23).
    Cancer,
    /// The Lion (ends Aug 23).
    Leo,
    /// The Maiden (ends Sep 23).
    Virgo,
    /// The Scales (ends Oct 23).
    Libra,
    /// The Scorpion (ends Nov 22).
    Scorpio,
    /// The Archer (ends Dec 22).
    Sagittarius,
    /// The Goat (ends Jan 20).
    Capricorn,
    /// The Water Bearer (ends Feb 19).
    Aquarius,
    /// The Fish (ends Mar 20).
    Pisces,
}

/// Thai sign names, indexed in Aries-first order.
const SIGN_LABELS_TH: [&str; 12] = [
    "เมษะ",
    "พฤษภะ",
    "มิถุนะ",
    "กรกฏะ",
    "สิงหะ",
    "กันยะ",
    "ตุลยะ",
    "พิจิกะ",
    "ธนุ",
    "มู่คัส",
    "วัวป่า",
    "มีนะ",
];

/// Chinese sign names, indexed in Aries-first order.
const SIGN_LABELS_ZH: [&str; 12] = [
    "白羊座",
    "金牛座",
    "双子座",
    "巨蟹座",
    "狮子座",
    "处女座",
    "天秤座",
    "天蝎座",
    "射手座",
    "摩羯座",
    "水瓶座",
    "双鱼座",
];

/// Sign end-date cutoffs: a date on or before `(month, day)` since the
/// previous cutoff belongs to that entry's sign. Dec 23-31 wraps to the
/// Capricorn of the next cycle via the final sentinel row.
const SIGN_ENDS: [(u32, u32, WesternSign); 13] = [
    (1, 20, WesternSign::Capricorn),
    (2, 19, WesternSign::Aquarius),
    (3, 20, WesternSign::Pisces),
    (4, 20, WesternSign::Aries),
    (5, 21, WesternSign::Taurus),
    (6, 21, WesternSign::Gemini),
    (7, 23, WesternSign::Cancer),
    (8, 23, WesternSign::Leo),
    (9, 23, WesternSign::Virgo),
    (10, 23, WesternSign::Libra),
    (11, 22, WesternSign::Scorpio),
    (12, 22, WesternSign::Sagittarius),
    (12, 31, WesternSign::Capricorn),
];

impl WesternSign {
    /// All signs in calendar order starting at Aries.
    pub fn all() -> &'static [Self] {
        &[
            Self::Aries,
            Self::Taurus,
            Self::Gemini,
            Self::Cancer,
            Self::Leo,
            Self::Virgo,
            Self::Libra,
            Self::Scorpio,
            Self::Sagittarius,
            Self::Capricorn,
            Self::Aquarius,
            Self::Pisces,
        ]
    }

    /// Look up the sign for a month/day pair.
    ///
    /// Boundary semantics are inclusive-upper on end dates: Dec 22 is the
    /// last day of Sagittarius, Dec 23 is Capricorn.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        for (m, d, sign) in SIGN_ENDS {
            if (month, day) <= (m, d) {
                return sign;
            }
        }
        Self::Capricorn
    }

    /// Position in Aries-first order (0-11).
    pub fn index(self) -> usize {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// The English sign name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// The sign name in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.name(),
            Language::Thai => SIGN_LABELS_TH[self.index()],
            Language::Chinese => SIGN_LABELS_ZH[self.index()],
        }
    }
}

impl std::fmt::Display for WesternSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Approximate moon sign: the moon shifts signs roughly every 2.5 days, so
/// the 30-day-month day-of-year is bucketed at that cadence.
pub fn moon_sign(month: u32, day: u32) -> WesternSign {
    let day_of_year = (month - 1) * 30 + day;
    let index = (f64::from(day_of_year) / 2.5) as usize % 12;
    WesternSign::all()[index]
}

/// The twelve-year cycle of Chinese zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    /// 鼠 — first animal of the cycle.
    Rat,
    /// 牛.
    Ox,
    /// 虎.
    Tiger,
    /// 兔.
    Rabbit,
    /// 龙.
    Dragon,
    /// 蛇.
    Snake,
    /// 马.
    Horse,
    /// 羊.
    Goat,
    /// 猴.
    Monkey,
    /// 鸡.
    Rooster,
    /// 狗.
    Dog,
    /// 猪.
    Pig,
}

const ANIMAL_LABELS_TH: [&str; 12] = [
    "หนู",
    "วัว",
    "เสือ",
    "กระต่าย",
    "มังกร",
    "งู",
    "ม้า",
    "แพะ",
    "ลิง",
    "ไก่",
    "สุนัข",
    "หมู",
];

const ANIMAL_LABELS_ZH: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl ChineseAnimal {
    /// All animals in cycle order starting at Rat.
    pub fn all() -> &'static [Self] {
        &[
            Self::Rat,
            Self::Ox,
            Self::Tiger,
            Self::Rabbit,
            Self::Dragon,
            Self::Snake,
            Self::Horse,
            Self::Goat,
            Self::Monkey,
            Self::Rooster,
            Self::Dog,
            Self::Pig,
        ]
    }

    /// The animal for a given calendar year: `(year - 4) mod 12`.
    pub fn from_year(year: i32) -> Self {
        let index = (year - 4).rem_euclid(12) as usize;
        Self::all()[index]
    }

    /// Position in cycle order (0-11).
    pub fn index(self) -> usize {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// The English animal name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// The animal name in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.name(),
            Language::Thai => ANIMAL_LABELS_TH[self.index()],
            Language::Chinese => ANIMAL_LABELS_ZH[self.index()],
        }
    }
}

impl std::fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The five Chinese elements in two-year cadence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    /// 金.
    Metal,
    /// 水.
    Water,
    /// 木.
    Wood,
    /// 火.
    Fire,
    /// 土.
    Earth,
}

impl ChineseElement {
    /// All elements in cadence order starting at Metal.
    pub fn all() -> &'static [Self] {
        &[Self::Metal, Self::Water, Self::Wood, Self::Fire, Self::Earth]
    }

    /// The element for a given calendar year: `floor((year - 4) / 2) mod 5`.
    ///
    /// Each element governs two consecutive years, giving the traditional
    /// ten-year cadence.
    pub fn from_year(year: i32) -> Self {
        let index = (year - 4).div_euclid(2).rem_euclid(5) as usize;
        Self::all()[index]
    }

    /// The English element name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Water => "Water",
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// The element name in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (_, Language::English) => self.name(),
            (Self::Metal, Language::Thai) => "ทอง",
            (Self::Water, Language::Thai) => "น้ำ",
            (Self::Wood, Language::Thai) => "ไม้",
            (Self::Fire, Language::Thai) => "ไฟ",
            (Self::Earth, Language::Thai) => "ดิน",
            (Self::Metal, Language::Chinese) => "金",
            (Self::Water, Language::Chinese) => "水",
            (Self::Wood, Language::Chinese) => "木",
            (Self::Fire, Language::Chinese) => "火",
            (Self::Earth, Language::Chinese) => "土",
        }
    }
}

impl std::fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A Chinese zodiac reading: birth-year animal plus governing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseZodiac {
    /// The birth-year animal.
    pub animal: ChineseAnimal,
    /// The governing element.
    pub element: ChineseElement,
}

impl ChineseZodiac {
    /// Derive the full Chinese zodiac reading for a calendar year.
    pub fn from_year(year: i32) -> Self {
        Self {
            animal: ChineseAnimal::from_year(year),
            element: ChineseElement::from_year(year),
        }
    }
}

/// The twelve Vedic (Jyotish) signs, parallel to the Western order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VedicSign {
    /// Mesha (Aries).
    Mesha,
    /// Vrishabha (Taurus).
    Vrishabha,
    /// Mithuna (Gemini).
    Mithuna,
    /// Karka (Cancer).
    Karka,
    /// Simha (Leo).
    Simha,
    /// Kanya (Virgo).
    Kanya,
    /// Tula (Libra).
    Tula,
    /// Vrishchika (Scorpio).
    Vrishchika,
    /// Dhanus (Sagittarius).
    Dhanus,
    /// Makara (Capricorn).
    Makara,
    /// Kumbha (Aquarius).
    Kumbha,
    /// Meena (Pisces).
    Meena,
}

impl VedicSign {
    /// All Vedic signs in Mesha-first order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Mesha,
            Self::Vrishabha,
            Self::Mithuna,
            Self::Karka,
            Self::Simha,
            Self::Kanya,
            Self::Tula,
            Self::Vrishchika,
            Self::Dhanus,
            Self::Makara,
            Self::Kumbha,
            Self::Meena,
        ]
    }

    /// Look up the Vedic sign for a month/day pair.
    ///
    /// Buckets the 30-day-month day-of-year into twelve ~30.4-day slices,
    /// offset from the Western boundaries.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        let day_of_year = (month - 1) * 30 + day;
        let index = (f64::from(day_of_year) / 30.4) as usize % 12;
        Self::all()[index]
    }

    /// Position in Mesha-first order (0-11).
    pub fn index(self) -> usize {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanus => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// The Sanskrit sign name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanus => "Dhanus",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// The Western sign occupying the same slot in the parallel order.
    pub fn western_equivalent(self) -> WesternSign {
        WesternSign::all()[self.index()]
    }

    /// The sign name in the given display language.
    ///
    /// Thai and Chinese reuse the shared sign label tables via the Western
    /// equivalent; English shows the Sanskrit name.
    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.name(),
            Language::Thai | Language::Chinese => self.western_equivalent().label(lang),
        }
    }
}

impl std::fmt::Display for VedicSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn western_boundary_at_december() {
        assert_eq!(
            WesternSign::from_month_day(12, 22),
            WesternSign::Sagittarius
        );
        assert_eq!(WesternSign::from_month_day(12, 23), WesternSign::Capricorn);
        assert_eq!(WesternSign::from_month_day(12, 31), WesternSign::Capricorn);
    }

    #[test]
    fn western_boundary_at_january() {
        assert_eq!(WesternSign::from_month_day(1, 1), WesternSign::Capricorn);
        assert_eq!(WesternSign::from_month_day(1, 20), WesternSign::Capricorn);
        assert_eq!(WesternSign::from_month_day(1, 21), WesternSign::Aquarius);
    }

    #[test]
    fn western_mid_year_samples() {
        assert_eq!(WesternSign::from_month_day(4, 21), WesternSign::Taurus);
        assert_eq!(WesternSign::from_month_day(8, 1), WesternSign::Leo);
        assert_eq!(WesternSign::from_month_day(11, 22), WesternSign::Scorpio);
        assert_eq!(WesternSign::from_month_day(11, 23), WesternSign::Sagittarius);
    }

    #[test]
    fn western_total_over_all_month_days() {
        // Every month/day pair maps to a sign without panicking, even pairs
        // that are not valid calendar dates.
        for month in 1..=12 {
            for day in 1..=31 {
                let _ = WesternSign::from_month_day(month, day);
            }
        }
    }

    #[test]
    fn chinese_animal_cycle() {
        assert_eq!(ChineseAnimal::from_year(1990), ChineseAnimal::Horse);
        assert_eq!(ChineseAnimal::from_year(2000), ChineseAnimal::Dragon);
        assert_eq!(ChineseAnimal::from_year(2008), ChineseAnimal::Rat);
        // 12-year period
        assert_eq!(
            ChineseAnimal::from_year(1990),
            ChineseAnimal::from_year(2002)
        );
    }

    #[test]
    fn chinese_element_two_year_cadence() {
        assert_eq!(ChineseElement::from_year(1990), ChineseElement::Fire);
        assert_eq!(ChineseElement::from_year(1991), ChineseElement::Fire);
        assert_eq!(ChineseElement::from_year(1992), ChineseElement::Earth);
        // 10-year period
        assert_eq!(
            ChineseElement::from_year(1990),
            ChineseElement::from_year(2000)
        );
    }

    #[test]
    fn chinese_zodiac_bundle() {
        let z = ChineseZodiac::from_year(1990);
        assert_eq!(z.animal, ChineseAnimal::Horse);
        assert_eq!(z.element, ChineseElement::Fire);
    }

    #[test]
    fn moon_sign_cadence() {
        // Jan 1 buckets to index 0 (Aries); ~2.5 days later shifts.
        assert_eq!(moon_sign(1, 1), WesternSign::Aries);
        assert_eq!(moon_sign(1, 3), WesternSign::Taurus);
        // Always a valid sign across the approximate year.
        for month in 1..=12 {
            for day in 1..=31 {
                let _ = moon_sign(month, day);
            }
        }
    }

    #[test]
    fn vedic_sign_buckets() {
        assert_eq!(VedicSign::from_month_day(1, 1), VedicSign::Mesha);
        assert_eq!(VedicSign::from_month_day(12, 31), VedicSign::Meena);
        for month in 1..=12 {
            for day in 1..=31 {
                let _ = VedicSign::from_month_day(month, day);
            }
        }
    }

    #[test]
    fn vedic_western_parallel() {
        assert_eq!(VedicSign::Mesha.western_equivalent(), WesternSign::Aries);
        assert_eq!(VedicSign::Meena.western_equivalent(), WesternSign::Pisces);
        for sign in VedicSign::all() {
            assert_eq!(sign.index(), sign.western_equivalent().index());
        }
    }

    #[test]
    fn labels_nonempty_in_all_languages() {
        for lang in Language::all() {
            for sign in WesternSign::all() {
                assert!(!sign.label(*lang).is_empty());
            }
            for animal in ChineseAnimal::all() {
                assert!(!animal.label(*lang).is_empty());
            }
            for element in ChineseElement::all() {
                assert!(!element.label(*lang).is_empty());
            }
            for sign in VedicSign::all() {
                assert!(!sign.label(*lang).is_empty());
            }
        }
    }
}
