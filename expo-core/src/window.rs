//! Publishing window for filtering events.

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;

/// Length of the forward window. Fixed policy.
pub const WINDOW_DAYS: i64 = 92;

/// Inclusive UTC range `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl Window {
    /// `[now, now + WINDOW_DAYS]`
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Window {
            from: now,
            to: now + Duration::days(WINDOW_DAYS),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant <= self.to
    }

    /// Whether the event's start falls in the window. Unparseable starts
    /// never match.
    pub fn includes(&self, event: &Event) -> bool {
        match event.start_utc() {
            Ok(start) => self.contains(start),
            Err(e) => {
                log::warn!("Skipping '{}': {}", event.title, e);
                false
            }
        }
    }
}

/// Events starting within `WINDOW_DAYS` of `now`, in input order.
pub fn filter_window(events: &[Event], now: DateTime<Utc>) -> Vec<&Event> {
    let window = Window::starting_at(now);
    events.iter().filter(|e| window.includes(e)).collect()
}

/// Owned variant of [`filter_window`].
pub fn into_window(events: Vec<Event>, now: DateTime<Utc>) -> Vec<Event> {
    let window = Window::starting_at(now);
    events.into_iter().filter(|e| window.includes(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{SecondsFormat, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn event_at(title: &str, start: DateTime<Utc>) -> Event {
        let start = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        Event::new(title, start.clone(), start)
    }

    fn titles<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn window_spans_92_days() {
        let window = Window::starting_at(now());
        assert_eq!(window.to - window.from, Duration::days(92));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let events = vec![
            event_at("at-now", now()),
            event_at("at-end", now() + Duration::days(WINDOW_DAYS)),
        ];
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["at-now", "at-end"]);
    }

    #[test]
    fn outside_window_is_excluded() {
        let events = vec![
            event_at("just-before", now() - Duration::seconds(1)),
            event_at("inside", now() + Duration::days(10)),
            event_at("just-after", now() + Duration::days(WINDOW_DAYS) + Duration::seconds(1)),
            event_at("last-year", now() - Duration::days(365)),
        ];
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["inside"]);
    }

    #[test]
    fn order_is_preserved() {
        let events = vec![
            event_at("late", now() + Duration::days(60)),
            event_at("early", now() + Duration::days(2)),
            event_at("middle", now() + Duration::days(30)),
        ];
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["late", "early", "middle"]);
    }

    #[test]
    fn unparseable_start_is_skipped_not_fatal() {
        let events = vec![
            Event::new("broken", "sometime in spring", "2025-03-10T10:00:00Z"),
            event_at("fine", now() + Duration::days(1)),
        ];
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["fine"]);
    }

    #[test]
    fn offset_is_applied_before_comparing() {
        // 12:30+01:00 is 11:30Z, half an hour before now
        let events = vec![Event::new(
            "early-bst",
            "2025-03-01T12:30:00+01:00",
            "2025-03-01T18:00:00+01:00",
        )];
        assert!(filter_window(&events, now()).is_empty());
    }

    #[test]
    fn minute_precision_zulu_start_is_kept() {
        let events = vec![
            Event::new("short-form", "2025-03-20T15:00Z", "2025-03-20T18:00Z"),
            Event::new("hour-offset", "2025-03-20T15:00:00+01", "2025-03-20T18:00:00+01"),
            Event::new("basic", "20250320T150000Z", "20250320T180000Z"),
        ];
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["short-form", "hour-offset", "basic"]);
    }

    #[test]
    fn missing_start_is_skipped() {
        let events = crate::loader::parse_events(
            r#"[{"title": "undated"}, {"title": "dated", "start": "2025-03-02T10:00Z"}]"#,
        )
        .unwrap();
        let window = filter_window(&events, now());
        assert_eq!(titles(&window), vec!["dated"]);
    }

    #[test]
    fn into_window_matches_borrowed_variant() {
        let events = vec![
            event_at("past", now() - Duration::days(1)),
            event_at("soon", now() + Duration::days(1)),
        ];
        let borrowed: Vec<Event> = filter_window(&events, now()).into_iter().cloned().collect();
        assert_eq!(into_window(events, now()), borrowed);
    }
}
