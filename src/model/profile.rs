use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The signed-in user's profile, including the workshop opening schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub company: String,
    pub email: String,
    #[serde(default)]
    pub schedule: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    pub day: Weekday,
    /// `None` means closed all day.
    pub hours: Option<(NaiveTime, NaiveTime)>,
}

impl OpeningHours {
    pub fn open(day: Weekday, from: (u32, u32), to: (u32, u32)) -> Self {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        Self {
            day,
            hours: Some((at(from), at(to))),
        }
    }

    pub fn closed(day: Weekday) -> Self {
        Self { day, hours: None }
    }

    pub fn describe(&self) -> String {
        match self.hours {
            Some((from, to)) => format!("{} - {}", from.format("%H:%M"), to.format("%H:%M")),
            None => "closed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_open_and_closed() {
        assert_eq!(
            OpeningHours::open(Weekday::Mon, (8, 0), (18, 30)).describe(),
            "08:00 - 18:30"
        );
        assert_eq!(OpeningHours::closed(Weekday::Sun).describe(), "closed");
    }
}
