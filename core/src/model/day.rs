use serde::{Deserialize, Serialize};
use chrono::Weekday;

/// Day of the week, Monday first. Ordering follows the discriminant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayType {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl DayType {
    pub const ALL: [DayType; 7] = [
        DayType::Monday,
        DayType::Tuesday,
        DayType::Wednesday,
        DayType::Thursday,
        DayType::Friday,
        DayType::Saturday,
        DayType::Sunday,
    ];

    /// Days to add to the week's Monday to reach this day.
    pub fn offset(&self) -> u64 {
        *self as u64
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        DayType::ALL[weekday.num_days_from_monday() as usize]
    }
}
