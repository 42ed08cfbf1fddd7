//! Days of the week in Saturday-first order.

/// A day of the week.
///
/// Discriminants follow the calendar's week convention: the week starts on
/// Saturday (index 0) and ends on Friday (index 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All weekdays in week order, starting with Saturday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the weekday for an index, wrapping modulo 7.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Returns the 0-based position within the Saturday-first week.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column of this weekday in a grid whose first column is `week_start`.
    ///
    /// ```
    /// use shiftcal_calendar::Weekday;
    ///
    /// assert_eq!(Weekday::Monday.offset_from(Weekday::Saturday), 2);
    /// assert_eq!(Weekday::Saturday.offset_from(Weekday::Monday), 5);
    /// ```
    pub fn offset_from(self, week_start: Weekday) -> usize {
        (self.index() + 7 - week_start.index()) % 7
    }

    /// Returns the following weekday.
    pub fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lowercase English name, as accepted by [`Weekday::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Parses an English weekday name or its three-letter abbreviation,
    /// ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| w.name() == lower || (lower.len() == 3 && w.name().starts_with(&lower)))
    }
}
