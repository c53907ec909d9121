//! Time-ordered views of an event list.

use crate::event::Event;

/// Return a new list ordered by ascending `time`, leaving the input as-is.
///
/// Events without a `time` sort as the empty string, i.e. before every timed
/// event. The sort is stable, so events with equal keys keep their relative
/// order. Not wired into [`CalendarStore`](crate::store::CalendarStore);
/// callers apply it on demand.
pub fn sorted_events(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventId;

    fn ids(events: &[Event]) -> Vec<EventId> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn orders_by_time_ascending() {
        let events = vec![
            Event::new("late").with_time("17:00"),
            Event::new("early").with_time("08:15"),
            Event::new("mid").with_time("12:00"),
        ];

        let sorted = sorted_events(&events);
        assert_eq!(
            ids(&sorted),
            vec![
                EventId::from("early"),
                EventId::from("mid"),
                EventId::from("late")
            ]
        );
    }

    #[test]
    fn missing_time_sorts_first_and_equal_keys_are_stable() {
        let events = vec![
            Event::new(1).with_time("10:00"),
            Event::new(2),
            Event::new(3).with_time("09:00"),
            Event::new(4),
        ];

        let sorted = sorted_events(&events);

        // The two untimed events come first, in their original relative order;
        // 09:00 before 10:00.
        assert_eq!(
            ids(&sorted),
            vec![
                EventId::Number(2),
                EventId::Number(4),
                EventId::Number(3),
                EventId::Number(1)
            ]
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let events = vec![
            Event::new("b").with_time("12:00"),
            Event::new("a").with_time("09:00"),
        ];

        let _ = sorted_events(&events);

        assert_eq!(ids(&events), vec![EventId::from("b"), EventId::from("a")]);
    }

    #[test]
    fn empty_list_is_fine() {
        assert!(sorted_events(&[]).is_empty());
    }
}
