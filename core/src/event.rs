// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::ScheduleItem;

/// An event owning an ordered schedule of agenda items.
///
/// The schedule is only ever replaced wholesale: `with_item` and
/// `without_item` return updated copies and leave `self` untouched, so a
/// render pass never observes a partially updated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The calendar date the event takes place on.
    pub date: NaiveDate,

    /// The agenda items of the event, in insertion order.
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

impl Event {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            schedule: Vec::new(),
        }
    }

    /// Copy of the event with `item` appended to the schedule.
    #[must_use]
    pub fn with_item(&self, item: ScheduleItem) -> Self {
        let mut schedule = self.schedule.clone();
        schedule.push(item);
        Self {
            date: self.date,
            schedule,
        }
    }

    /// Copy of the event without the item carrying `id`.
    ///
    /// The relative order of the remaining items is preserved; an unknown id
    /// yields a schedule equal to the original.
    #[must_use]
    pub fn without_item(&self, id: Uuid) -> Self {
        let schedule = self
            .schedule
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self {
            date: self.date,
            schedule,
        }
    }

    pub fn find_item(&self, id: Uuid) -> Option<&ScheduleItem> {
        self.schedule.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::build_schedule_item;
    use crate::time_state::TimeState;

    fn event_with_items(count: usize) -> Event {
        let mut event = Event::new(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
        for i in 0..count {
            let item = build_schedule_item(&TimeState::default(), event.date, format!("item {i}"));
            event = event.with_item(item);
        }
        event
    }

    #[test]
    fn test_with_item_leaves_original_untouched() {
        let event = event_with_items(1);
        let item = build_schedule_item(&TimeState::default(), event.date, "extra");
        let updated = event.with_item(item);

        assert_eq!(event.schedule.len(), 1);
        assert_eq!(updated.schedule.len(), 2);
        assert_eq!(updated.schedule[0], event.schedule[0]);
    }

    #[test]
    fn test_without_item_removes_exactly_one_preserving_order() {
        let event = event_with_items(4);
        let removed_id = event.schedule[1].id;
        let updated = event.without_item(removed_id);

        assert_eq!(updated.schedule.len(), 3);
        assert!(updated.find_item(removed_id).is_none());

        let expected: Vec<_> = event
            .schedule
            .iter()
            .filter(|item| item.id != removed_id)
            .cloned()
            .collect();
        assert_eq!(updated.schedule, expected);

        // the original collection is untouched
        assert_eq!(event.schedule.len(), 4);
    }

    #[test]
    fn test_without_unknown_id_is_a_noop_copy() {
        let event = event_with_items(3);
        let updated = event.without_item(Uuid::new_v4());
        assert_eq!(updated, event);
    }

    #[test]
    fn test_find_item() {
        let event = event_with_items(2);
        let id = event.schedule[1].id;
        assert_eq!(event.find_item(id).map(|i| i.name.as_str()), Some("item 1"));
        assert!(event.find_item(Uuid::new_v4()).is_none());
    }
}
