// Weekday buckets keyed by Spanish day names, Monday first.

use chrono::Weekday;
use serde::ser::{Serialize, SerializeMap, Serializer};

static WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn spanish_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Per-weekday totals. Only days that received a value are present.
/// Serializes as a JSON object in Monday to Sunday order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayTotals<T> {
    slots: [Option<T>; 7],
}

impl<T> Default for WeekdayTotals<T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> WeekdayTotals<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, day: Weekday, value: T)
    where
        T: std::ops::AddAssign,
    {
        match &mut self.slots[day.num_days_from_monday() as usize] {
            Some(total) => *total += value,
            slot => *slot = Some(value),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> WeekdayTotals<U> {
        WeekdayTotals {
            slots: self.slots.map(|slot| slot.map(&mut f)),
        }
    }

    pub fn get(&self, day: Weekday) -> Option<&T> {
        self.slots[day.num_days_from_monday() as usize].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present days as `(name, value)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
        WEEK.iter()
            .zip(self.slots.iter())
            .filter_map(|(day, slot)| slot.as_ref().map(|value| (spanish_name(*day), value)))
    }
}

impl<T: Serialize> Serialize for WeekdayTotals<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
