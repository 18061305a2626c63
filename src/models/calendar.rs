use crate::utils::constants::{DAYS_IN_MONTH, EVENT_DAYS};

/// Celda del calendario (valor derivado, no hay modelo de eventos detrás)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u8,
    pub has_event: bool,
}

impl CalendarDay {
    pub fn new(day: u8) -> Self {
        Self {
            day,
            has_event: EVENT_DAYS.contains(&day),
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.has_event {
            "calendar-day has-event"
        } else {
            "calendar-day"
        }
    }
}

/// Días 1..=31 del mes fijo
pub fn calendar_days() -> Vec<CalendarDay> {
    (1..=DAYS_IN_MONTH).map(CalendarDay::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_one_days_in_order() {
        let days = calendar_days();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first().map(|d| d.day), Some(1));
        assert_eq!(days.last().map(|d| d.day), Some(31));
    }

    #[test]
    fn only_fixed_days_carry_event_marker() {
        let marked: Vec<u8> = calendar_days()
            .into_iter()
            .filter(|d| d.has_event)
            .map(|d| d.day)
            .collect();
        assert_eq!(marked, vec![1, 2, 3, 6, 15, 17, 19, 20, 26]);
    }

    #[test]
    fn css_class_follows_marker() {
        assert_eq!(CalendarDay::new(15).css_class(), "calendar-day has-event");
        assert_eq!(CalendarDay::new(16).css_class(), "calendar-day");
    }
}
