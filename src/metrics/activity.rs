//! Messages per hour of day and per weekday.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike, Weekday};
use serde::Serialize;

use crate::Message;

/// Message count for one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourCount {
    /// Hour, 0-23
    pub hour: u32,
    /// Messages sent during that hour
    pub messages: usize,
}

/// Message count for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    /// Short weekday name, `Mon` to `Sun`
    pub day: &'static str,
    /// Messages sent on that weekday
    pub messages: usize,
}

/// Activity histograms. Only hours and days with messages are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Ascending by hour
    pub by_hour: Vec<HourCount>,
    /// Monday first
    pub by_day: Vec<DayCount>,
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Builds the hourly and weekday histograms.
pub fn activity(messages: &[Message]) -> Activity {
    let mut hours: BTreeMap<u32, usize> = BTreeMap::new();
    let mut days: BTreeMap<u32, (Weekday, usize)> = BTreeMap::new();

    for msg in messages {
        *hours.entry(msg.timestamp.hour()).or_default() += 1;
        let weekday = msg.timestamp.weekday();
        days.entry(weekday.num_days_from_monday())
            .or_insert((weekday, 0))
            .1 += 1;
    }

    Activity {
        by_hour: hours
            .into_iter()
            .map(|(hour, messages)| HourCount { hour, messages })
            .collect(),
        by_day: days
            .into_values()
            .map(|(weekday, messages)| DayCount {
                day: day_name(weekday),
                messages,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(day: u32, hour: u32) -> Message {
        // 2024-01-01 was a Monday
        let ts = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Message::new(ts, "Alice", "hi")
    }

    #[test]
    fn test_hours_sorted() {
        let result = activity(&[msg(1, 22), msg(1, 3), msg(2, 22), msg(3, 10)]);
        assert_eq!(
            result.by_hour,
            vec![
                HourCount { hour: 3, messages: 1 },
                HourCount { hour: 10, messages: 1 },
                HourCount { hour: 22, messages: 2 },
            ]
        );
    }

    #[test]
    fn test_days_monday_first() {
        // Sun 7th, Mon 1st, Wed 3rd, Mon 8th
        let result = activity(&[msg(7, 9), msg(1, 9), msg(3, 9), msg(8, 9)]);
        let days: Vec<_> = result.by_day.iter().map(|d| (d.day, d.messages)).collect();
        assert_eq!(days, vec![("Mon", 2), ("Wed", 1), ("Sun", 1)]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(activity(&[]), Activity::default());
    }
}
