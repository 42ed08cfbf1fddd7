//! Header text built from caller-supplied, opaque name arrays.

use shiftcal_calendar::{Weekday, YearMonth};

/// Rotates seven weekday names, given Saturday first, so that they match
/// the columns of a grid whose first column is `week_start`.
///
/// ```
/// use shiftcal_calendar::Weekday;
/// use shiftcal_layout::weekday_header;
///
/// let names = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
/// assert_eq!(weekday_header(&names, Weekday::Saturday), names);
/// assert_eq!(weekday_header(&names, Weekday::Monday)[0], "Mon");
/// ```
pub fn weekday_header<S: AsRef<str>>(names: &[S; 7], week_start: Weekday) -> [&str; 7] {
    std::array::from_fn(|col| names[(week_start.index() + col) % 7].as_ref())
}

/// Title of a month header: the month's name followed by its year.
pub fn month_title<S: AsRef<str>>(names: &[S; 12], month: YearMonth) -> String {
    format!("{} {}", names[usize::from(month.month())].as_ref(), month.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS: [&str; 7] = ["Sa", "Su", "Mo", "Tu", "We", "Th", "Fr"];

    #[test]
    fn sunday_start_rotates_saturday_to_end() {
        assert_eq!(
            weekday_header(&DAYS, Weekday::Sunday),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
    }

    #[test]
    fn header_column_matches_weekday_offset() {
        for start in Weekday::ALL {
            let header = weekday_header(&DAYS, start);
            for day in Weekday::ALL {
                assert_eq!(header[day.offset_from(start)], DAYS[day.index()]);
            }
        }
    }

    #[test]
    fn month_title_uses_zero_based_month() {
        let names: Vec<String> = (1..=12).map(|m| format!("M{m}")).collect();
        let names: [String; 12] = names.try_into().unwrap();
        assert_eq!(month_title(&names, YearMonth::new(2024, 2).unwrap()), "M3 2024");
    }
}
