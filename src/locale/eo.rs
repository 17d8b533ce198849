use super::{DayPeriod, Distance, LocaleData, NameSet, OrdinalUnit, Plural, Tense};
use crate::calendar::WeekConfig;
use crate::types::Weekday;

/// Esperanto.
pub const EO: &LocaleData = &LocaleData {
    code: "eo",
    eras: NameSet {
        narrow: ["aK", "pK"],
        abbreviated: ["a.K.E.", "p.K.E."],
        wide: ["antaŭ Komuna Erao", "Komuna Erao"],
    },
    quarters: NameSet {
        narrow: ["1", "2", "3", "4"],
        abbreviated: ["K1", "K2", "K3", "K4"],
        wide: [
            "1-a kvaronjaro",
            "2-a kvaronjaro",
            "3-a kvaronjaro",
            "4-a kvaronjaro",
        ],
    },
    months: NameSet {
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
        abbreviated: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aŭg", "sep", "okt", "nov", "dec",
        ],
        wide: [
            "januaro",
            "februaro",
            "marto",
            "aprilo",
            "majo",
            "junio",
            "julio",
            "aŭgusto",
            "septembro",
            "oktobro",
            "novembro",
            "decembro",
        ],
    },
    months_formatting: None,
    weekdays: NameSet {
        narrow: ["di", "lu", "ma", "me", "ĵa", "ve", "sa"],
        abbreviated: ["dim", "lun", "mar", "mer", "ĵaŭ", "ven", "sab"],
        wide: [
            "dimanĉo", "lundo", "mardo", "merkredo", "ĵaŭdo", "vendredo", "sabato",
        ],
    },
    day_periods: &[
        DayPeriod {
            start_hour: 0,
            end_hour: 11,
            names: ["a.t.m.", "A.T.M.", "antaŭtagmeze"],
        },
        DayPeriod {
            start_hour: 12,
            end_hour: 23,
            names: ["p.t.m.", "P.T.M.", "posttagmeze"],
        },
    ],
    aliases: &[],
    ordinal,
    distance,
    week: WeekConfig {
        week_starts_on: Weekday::Monday,
        first_week_contains_date: 4,
    },
};

fn ordinal(n: i64, _unit: OrdinalUnit) -> String {
    format!("{n}-a")
}

fn distance(distance: Distance, count: i64, tense: Tense) -> String {
    let phrase = match distance {
        Distance::LessThanSeconds => Plural::new("malpli ol sekundo", "malpli ol {count} sekundoj"),
        Distance::Seconds => Plural::new("1 sekundo", "{count} sekundoj"),
        Distance::HalfMinute => Plural::new("duonminuto", "duonminuto"),
        Distance::LessThanMinutes => Plural::new("malpli ol minuto", "malpli ol {count} minutoj"),
        Distance::Minutes => Plural::new("1 minuto", "{count} minutoj"),
        Distance::AboutHours => Plural::new("proksimume 1 horo", "proksimume {count} horoj"),
        Distance::Hours => Plural::new("1 horo", "{count} horoj"),
        Distance::Days => Plural::new("1 tago", "{count} tagoj"),
        Distance::AboutMonths => Plural::new("proksimume 1 monato", "proksimume {count} monatoj"),
        Distance::Months => Plural::new("1 monato", "{count} monatoj"),
        Distance::AboutYears => Plural::new("proksimume 1 jaro", "proksimume {count} jaroj"),
        Distance::Years => Plural::new("1 jaro", "{count} jaroj"),
        Distance::OverYears => Plural::new("pli ol 1 jaro", "pli ol {count} jaroj"),
        Distance::AlmostYears => Plural::new("preskaŭ 1 jaro", "preskaŭ {count} jaroj"),
    }
    .pick(count);
    match tense {
        Tense::Neutral => phrase,
        Tense::Past => format!("antaŭ {phrase}"),
        Tense::Future => format!("post {phrase}"),
    }
}
