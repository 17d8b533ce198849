use super::{DayPeriod, Distance, LocaleData, NameSet, OrdinalUnit, Plural, Tense};
use crate::calendar::WeekConfig;
use crate::types::Weekday;

/// English (United States).
pub const EN_US: &LocaleData = &LocaleData {
    code: "en-US",
    eras: NameSet {
        narrow: ["B", "A"],
        abbreviated: ["BC", "AD"],
        wide: ["Before Christ", "Anno Domini"],
    },
    quarters: NameSet {
        narrow: ["1", "2", "3", "4"],
        abbreviated: ["Q1", "Q2", "Q3", "Q4"],
        wide: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
    },
    months: NameSet {
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
        abbreviated: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        wide: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
    },
    months_formatting: None,
    weekdays: NameSet {
        narrow: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        abbreviated: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        wide: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
    },
    day_periods: &[
        DayPeriod {
            start_hour: 0,
            end_hour: 11,
            names: ["am", "AM", "a.m."],
        },
        DayPeriod {
            start_hour: 12,
            end_hour: 23,
            names: ["pm", "PM", "p.m."],
        },
    ],
    aliases: &[],
    ordinal,
    distance,
    week: WeekConfig {
        week_starts_on: Weekday::Sunday,
        first_week_contains_date: 1,
    },
};

/// 1st, 2nd, 3rd, 4th ... 11th, 12th, 13th ... 21st.
fn ordinal(n: i64, _unit: OrdinalUnit) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn distance(distance: Distance, count: i64, tense: Tense) -> String {
    let phrase = match distance {
        Distance::LessThanSeconds => Plural::new("less than a second", "less than {count} seconds"),
        Distance::Seconds => Plural::new("1 second", "{count} seconds"),
        Distance::HalfMinute => Plural::new("half a minute", "half a minute"),
        Distance::LessThanMinutes => Plural::new("less than a minute", "less than {count} minutes"),
        Distance::Minutes => Plural::new("1 minute", "{count} minutes"),
        Distance::AboutHours => Plural::new("about 1 hour", "about {count} hours"),
        Distance::Hours => Plural::new("1 hour", "{count} hours"),
        Distance::Days => Plural::new("1 day", "{count} days"),
        Distance::AboutMonths => Plural::new("about 1 month", "about {count} months"),
        Distance::Months => Plural::new("1 month", "{count} months"),
        Distance::AboutYears => Plural::new("about 1 year", "about {count} years"),
        Distance::Years => Plural::new("1 year", "{count} years"),
        Distance::OverYears => Plural::new("over 1 year", "over {count} years"),
        Distance::AlmostYears => Plural::new("almost 1 year", "almost {count} years"),
    }
    .pick(count);
    match tense {
        Tense::Neutral => phrase,
        Tense::Past => format!("{phrase} ago"),
        Tense::Future => format!("in {phrase}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, NameUnit, Width};

    #[test]
    fn test_ordinals() {
        let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111, 112]
            .into_iter()
            .map(|n| EN_US.ordinal(n, OrdinalUnit::DayOfMonth))
            .collect();
        assert_eq!(
            rendered,
            [
                "1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st",
                "111th", "112th"
            ]
        );
    }

    #[test]
    fn test_distance() {
        assert_eq!(
            EN_US.distance(Distance::LessThanSeconds, 1, Tense::Neutral),
            "less than a second"
        );
        assert_eq!(
            EN_US.distance(Distance::LessThanSeconds, 10, Tense::Past),
            "less than 10 seconds ago"
        );
        assert_eq!(EN_US.distance(Distance::HalfMinute, 123, Tense::Neutral), "half a minute");
        assert_eq!(EN_US.distance(Distance::Minutes, 120, Tense::Neutral), "120 minutes");
        assert_eq!(EN_US.distance(Distance::AboutHours, 1, Tense::Future), "in about 1 hour");
        assert_eq!(EN_US.distance(Distance::Seconds, 25, Tense::Past), "25 seconds ago");
        assert_eq!(EN_US.distance(Distance::OverYears, 2, Tense::Neutral), "over 2 years");
    }

    #[test]
    fn test_names() {
        assert_eq!(EN_US.name(NameUnit::Month, 3, Width::Wide), "April");
        assert_eq!(EN_US.name(NameUnit::Weekday, 5, Width::Abbreviated), "Fri");
        assert_eq!(EN_US.name(NameUnit::Era, 1, Width::Abbreviated), "AD");
        assert_eq!(EN_US.name(NameUnit::Quarter, 1, Width::Wide), "2nd quarter");
        assert_eq!(EN_US.name(NameUnit::DayPeriod, 0, Width::Wide), "a.m.");
    }
}
