//! Day distances by whole-month span summation.

use shiftcal_calendar::{CivilDate, days_in_year};

/// Signed number of days from `from` to `to`, counted month by month.
///
/// The count is the rest of `from`'s month, plus every month strictly
/// between the two months, plus the days of `to`'s month up to `to`.
/// Whole calendar years inside the span are added in a single step, so the
/// cost grows with the number of years covered, never with the number of
/// days. The result always equals [`shiftcal_calendar::days_between`].
///
/// ```
/// use shiftcal_calendar::CivilDate;
/// use shiftcal_pattern::month_span_days;
///
/// let mar15 = CivilDate::new(2024, 2, 15).unwrap();
/// let apr1 = CivilDate::new(2024, 3, 1).unwrap();
/// assert_eq!(month_span_days(mar15, apr1), 17);
/// assert_eq!(month_span_days(apr1, mar15), -17);
/// ```
pub fn month_span_days(from: CivilDate, to: CivilDate) -> i64 {
    if to < from {
        return -month_span_days(to, from);
    }
    let (from_ym, to_ym) = (from.year_month(), to.year_month());
    if from_ym == to_ym {
        return i64::from(to.day()) - i64::from(from.day());
    }

    let mut total = i64::from(from_ym.days()) - i64::from(from.day());

    let mut months = from_ym.iter_until(to_ym);
    months.next(); // `from`'s own month, counted above
    while let Some(month) = months.next() {
        if month.month() == 0 && month.year() < to_ym.year() {
            total += i64::from(days_in_year(month.year()));
            months.nth(10); // February through December
        } else {
            total += i64::from(month.days());
        }
    }

    total + i64::from(to.day())
}
