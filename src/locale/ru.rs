use super::distance::fill_count;
use super::{Alias, DayPeriod, Distance, LocaleData, NameSet, NameUnit, OrdinalUnit, Tense};
use crate::calendar::WeekConfig;
use crate::types::Weekday;

/// Russian.
///
/// The day is split four ways (night, morning, afternoon, evening) and
/// ordinal suffixes agree with the gender of the counted unit. A month name
/// after a day of month takes the genitive ("4-е апреля").
pub const RU: &LocaleData = &LocaleData {
    code: "ru",
    eras: NameSet {
        narrow: ["до н.э.", "н.э."],
        abbreviated: ["до н. э.", "н. э."],
        wide: ["до нашей эры", "нашей эры"],
    },
    quarters: NameSet {
        narrow: ["1", "2", "3", "4"],
        abbreviated: ["1-й кв.", "2-й кв.", "3-й кв.", "4-й кв."],
        wide: ["1-й квартал", "2-й квартал", "3-й квартал", "4-й квартал"],
    },
    months: NameSet {
        narrow: ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"],
        abbreviated: [
            "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        wide: [
            "январь",
            "февраль",
            "март",
            "апрель",
            "май",
            "июнь",
            "июль",
            "август",
            "сентябрь",
            "октябрь",
            "ноябрь",
            "декабрь",
        ],
    },
    months_formatting: Some(NameSet {
        narrow: ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"],
        abbreviated: [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        wide: [
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ],
    }),
    weekdays: NameSet {
        narrow: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
        abbreviated: ["вск", "пнд", "втр", "срд", "чтв", "птн", "суб"],
        wide: [
            "воскресенье",
            "понедельник",
            "вторник",
            "среда",
            "четверг",
            "пятница",
            "суббота",
        ],
    },
    day_periods: &[
        DayPeriod {
            start_hour: 0,
            end_hour: 3,
            names: ["ночи", "ночи", "ночи"],
        },
        DayPeriod {
            start_hour: 4,
            end_hour: 11,
            names: ["утра", "утра", "утра"],
        },
        DayPeriod {
            start_hour: 12,
            end_hour: 16,
            names: ["дня", "дня", "дня"],
        },
        DayPeriod {
            start_hour: 17,
            end_hour: 23,
            names: ["вечера", "вечера", "вечера"],
        },
    ],
    aliases: &[
        Alias {
            unit: NameUnit::Month,
            index: 0,
            text: "янв",
        },
        Alias {
            unit: NameUnit::Month,
            index: 1,
            text: "фев",
        },
        Alias {
            unit: NameUnit::Month,
            index: 2,
            text: "мар",
        },
        Alias {
            unit: NameUnit::Month,
            index: 3,
            text: "апр",
        },
        Alias {
            unit: NameUnit::Month,
            index: 5,
            text: "июн",
        },
        Alias {
            unit: NameUnit::Month,
            index: 6,
            text: "июл",
        },
        Alias {
            unit: NameUnit::Month,
            index: 7,
            text: "авг",
        },
        Alias {
            unit: NameUnit::Month,
            index: 8,
            text: "сен",
        },
        Alias {
            unit: NameUnit::Month,
            index: 9,
            text: "окт",
        },
        Alias {
            unit: NameUnit::Month,
            index: 10,
            text: "ноя",
        },
        Alias {
            unit: NameUnit::Month,
            index: 11,
            text: "дек",
        },
    ],
    ordinal,
    distance,
    week: WeekConfig {
        week_starts_on: Weekday::Monday,
        first_week_contains_date: 4,
    },
};

/// Masculine `-й` for months, quarters and days counted within a year or
/// week; neuter `-е` for the day of the month (число); feminine `-я` for
/// weeks (неделя).
fn ordinal(n: i64, unit: OrdinalUnit) -> String {
    let suffix = match unit {
        OrdinalUnit::DayOfMonth => "е",
        OrdinalUnit::Week => "я",
        OrdinalUnit::Quarter
        | OrdinalUnit::Month
        | OrdinalUnit::DayOfYear
        | OrdinalUnit::DayOfWeek => "й",
    };
    format!("{n}-{suffix}")
}

/// Forms chosen by the count's last digits: ending in 1 but not 11, in
/// 2-4 but not 12-14, and the rest. `exactly_one` replaces the first for a
/// count of exactly 1 ("меньше минуты").
#[derive(Debug, Clone, Copy)]
struct Declension {
    exactly_one: Option<&'static str>,
    ends_in_one: &'static str,
    ends_in_few: &'static str,
    many: &'static str,
}

const fn forms(
    ends_in_one: &'static str,
    ends_in_few: &'static str,
    many: &'static str,
) -> Declension {
    Declension {
        exactly_one: None,
        ends_in_one,
        ends_in_few,
        many,
    }
}

impl Declension {
    const fn or_one(self, exactly_one: &'static str) -> Self {
        Self {
            exactly_one: Some(exactly_one),
            ..self
        }
    }

    fn pick(&self, count: i64) -> String {
        let n = count.unsigned_abs();
        let text = match (self.exactly_one, n % 10, n % 100) {
            (Some(one), ..) if count == 1 => one,
            (_, 1, rem100) if rem100 != 11 => self.ends_in_one,
            (_, 2..=4, rem100) if !(10..=20).contains(&rem100) => self.ends_in_few,
            _ => self.many,
        };
        fill_count(text, count)
    }
}

/// Neutral forms, and the past and future forms where the phrase is not
/// just the neutral one with `назад` or `через`.
struct Scheme {
    regular: Declension,
    past: Option<Declension>,
    future: Option<Declension>,
}

const fn regular(regular: Declension) -> Scheme {
    Scheme {
        regular,
        past: None,
        future: None,
    }
}

const fn scheme(distance: Distance) -> Scheme {
    match distance {
        Distance::LessThanSeconds => Scheme {
            future: Some(
                forms(
                    "меньше, чем через {count} секунду",
                    "меньше, чем через {count} секунды",
                    "меньше, чем через {count} секунд",
                )
                .or_one("меньше, чем через секунду"),
            ),
            ..regular(
                forms("меньше {count} секунды", "меньше {count} секунд", "меньше {count} секунд")
                    .or_one("меньше секунды"),
            )
        },
        Distance::Seconds => Scheme {
            regular: forms("{count} секунда", "{count} секунды", "{count} секунд"),
            past: Some(forms(
                "{count} секунду назад",
                "{count} секунды назад",
                "{count} секунд назад",
            )),
            future: Some(forms(
                "через {count} секунду",
                "через {count} секунды",
                "через {count} секунд",
            )),
        },
        Distance::HalfMinute => regular(forms("полминуты", "полминуты", "полминуты")),
        Distance::LessThanMinutes => Scheme {
            future: Some(
                forms(
                    "меньше, чем через {count} минуту",
                    "меньше, чем через {count} минуты",
                    "меньше, чем через {count} минут",
                )
                .or_one("меньше, чем через минуту"),
            ),
            ..regular(
                forms("меньше {count} минуты", "меньше {count} минут", "меньше {count} минут")
                    .or_one("меньше минуты"),
            )
        },
        Distance::Minutes => Scheme {
            regular: forms("{count} минута", "{count} минуты", "{count} минут"),
            past: Some(forms(
                "{count} минуту назад",
                "{count} минуты назад",
                "{count} минут назад",
            )),
            future: Some(forms(
                "через {count} минуту",
                "через {count} минуты",
                "через {count} минут",
            )),
        },
        Distance::AboutHours => Scheme {
            future: Some(forms(
                "приблизительно через {count} час",
                "приблизительно через {count} часа",
                "приблизительно через {count} часов",
            )),
            ..regular(forms(
                "около {count} часа",
                "около {count} часов",
                "около {count} часов",
            ))
        },
        Distance::Hours => regular(forms("{count} час", "{count} часа", "{count} часов")),
        Distance::Days => regular(forms("{count} день", "{count} дня", "{count} дней")),
        Distance::AboutMonths => Scheme {
            future: Some(forms(
                "приблизительно через {count} месяц",
                "приблизительно через {count} месяца",
                "приблизительно через {count} месяцев",
            )),
            ..regular(forms(
                "около {count} месяца",
                "около {count} месяцев",
                "около {count} месяцев",
            ))
        },
        Distance::Months => regular(forms("{count} месяц", "{count} месяца", "{count} месяцев")),
        Distance::AboutYears => Scheme {
            future: Some(forms(
                "приблизительно через {count} год",
                "приблизительно через {count} года",
                "приблизительно через {count} лет",
            )),
            ..regular(forms("около {count} года", "около {count} лет", "около {count} лет"))
        },
        Distance::Years => regular(forms("{count} год", "{count} года", "{count} лет")),
        Distance::OverYears => Scheme {
            future: Some(forms(
                "больше, чем через {count} год",
                "больше, чем через {count} года",
                "больше, чем через {count} лет",
            )),
            ..regular(forms("больше {count} года", "больше {count} лет", "больше {count} лет"))
        },
        Distance::AlmostYears => Scheme {
            future: Some(forms(
                "почти через {count} год",
                "почти через {count} года",
                "почти через {count} лет",
            )),
            ..regular(forms("почти {count} год", "почти {count} года", "почти {count} лет"))
        },
    }
}

fn distance(distance: Distance, count: i64, tense: Tense) -> String {
    let scheme = scheme(distance);
    match tense {
        Tense::Neutral => scheme.regular.pick(count),
        Tense::Past => match scheme.past {
            Some(past) => past.pick(count),
            None => format!("{} назад", scheme.regular.pick(count)),
        },
        Tense::Future => match scheme.future {
            Some(future) => future.pick(count),
            None => format!("через {}", scheme.regular.pick(count)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Width};

    #[test]
    fn test_ordinals_agree_with_unit() {
        assert_eq!(RU.ordinal(4, OrdinalUnit::Month), "4-й");
        assert_eq!(RU.ordinal(2, OrdinalUnit::Quarter), "2-й");
        assert_eq!(RU.ordinal(4, OrdinalUnit::DayOfMonth), "4-е");
        assert_eq!(RU.ordinal(1, OrdinalUnit::DayOfYear), "1-й");
        assert_eq!(RU.ordinal(5, OrdinalUnit::DayOfWeek), "5-й");
        assert_eq!(RU.ordinal(14, OrdinalUnit::Week), "14-я");
    }

    #[test]
    fn test_distance() {
        let cases = [
            (Distance::HalfMinute, 0, Tense::Neutral, "полминуты"),
            (Distance::LessThanSeconds, 10, Tense::Past, "меньше 10 секунд назад"),
            (Distance::AboutHours, 1, Tense::Future, "приблизительно через 1 час"),
            (Distance::Minutes, 120, Tense::Neutral, "120 минут"),
            (Distance::Seconds, 25, Tense::Past, "25 секунд назад"),
            (Distance::Hours, 1, Tense::Future, "через 1 час"),
            (Distance::LessThanMinutes, 1, Tense::Neutral, "меньше минуты"),
            (Distance::LessThanSeconds, 1, Tense::Future, "меньше, чем через секунду"),
            (Distance::Minutes, 1, Tense::Past, "1 минуту назад"),
            (Distance::AboutYears, 3, Tense::Neutral, "около 3 лет"),
            (Distance::OverYears, 2, Tense::Future, "больше, чем через 2 года"),
            (Distance::HalfMinute, 5, Tense::Past, "полминуты назад"),
        ];
        for (distance, count, tense, expected) in cases {
            assert_eq!(RU.distance(distance, count, tense), expected, "{distance:?} {count}");
        }
    }

    #[test]
    fn test_distance_plural_classes() {
        let days: Vec<String> = [1, 2, 5, 11, 12, 14, 21, 22, 25, 101, 111, 112]
            .into_iter()
            .map(|n| RU.distance(Distance::Days, n, Tense::Neutral))
            .collect();
        assert_eq!(
            days,
            [
                "1 день", "2 дня", "5 дней", "11 дней", "12 дней", "14 дней", "21 день",
                "22 дня", "25 дней", "101 день", "111 дней", "112 дней"
            ]
        );
        // the special singular is only for exactly 1
        assert_eq!(
            RU.distance(Distance::LessThanMinutes, 21, Tense::Neutral),
            "меньше 21 минуты"
        );
    }

    #[test]
    fn test_four_day_periods() {
        let names: Vec<&str> = (0..24)
            .map(|hour| {
                let index = RU.day_period_of(hour).unwrap();
                RU.name(NameUnit::DayPeriod, index, Width::Abbreviated)
            })
            .collect();
        assert_eq!(names[0..4], ["ночи"; 4]);
        assert_eq!(names[4..12], ["утра"; 8]);
        assert_eq!(names[12..17], ["дня"; 5]);
        assert_eq!(names[17..24], ["вечера"; 7]);
    }

    #[test]
    fn test_genitive_months() {
        assert_eq!(RU.name(NameUnit::Month, 3, Width::Wide), "апрель");
        assert_eq!(RU.formatting_name(NameUnit::Month, 3, Width::Wide), "апреля");
        assert_eq!(RU.formatting_name(NameUnit::Month, 2, Width::Abbreviated), "мар.");
        assert_eq!(RU.formatting_name(NameUnit::Month, 4, Width::Narrow), "М");
        // other units have a single form
        assert_eq!(RU.formatting_name(NameUnit::Weekday, 5, Width::Wide), "пятница");
    }

    #[test]
    fn test_parse_either_month_form() {
        let cases = [
            ("апреля 1986", Width::Abbreviated, 3),
            ("апрель 1986", Width::Wide, 3),
            ("марта 1986", Width::Wide, 2),
            ("март 1986", Width::Wide, 2),
            ("мая 1986", Width::Abbreviated, 4),
            ("мар. 1986", Width::Abbreviated, 2),
            ("апр 1986", Width::Abbreviated, 3),
        ];
        for (input, width, index) in cases {
            assert_eq!(
                RU.parse_name(NameUnit::Month, input, width),
                Some((index, " 1986")),
                "{input}"
            );
        }
    }

    #[test]
    fn test_weekday_widths() {
        assert_eq!(RU.name(NameUnit::Weekday, 5, Width::Narrow), "пт");
        assert_eq!(RU.name(NameUnit::Weekday, 5, Width::Abbreviated), "птн");
        assert_eq!(RU.name(NameUnit::Weekday, 5, Width::Wide), "пятница");
    }
}
