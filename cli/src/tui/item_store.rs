// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, ops::Deref, rc::Rc};

use agenda_core::{ScheduleItem, TimeState, build_schedule_item};
use chrono::NaiveDate;

use crate::tui::dispatcher::{Action, Dispatcher};

pub trait ItemStoreLike {
    type Output<'a>: Deref<Target = ItemStore>
    where
        Self: 'a;

    fn item<'a>(&'a self) -> Self::Output<'a>;
}

/// Session state of the add-item editor. One store per editing session,
/// dropped when the editor closes.
#[derive(Debug, Default)]
pub struct ItemStore {
    pub data: ItemDraft,

    /// Whether the user submitted the draft
    pub submit: bool,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the schedule item from the submitted draft.
    pub fn submit_item(self, event_date: NaiveDate) -> ScheduleItem {
        let name = if self.data.name.is_empty() {
            "New item".to_string()
        } else {
            self.data.name
        };
        build_schedule_item(&self.data.time, event_date, name)
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::UpdateItemName(v) => that.data.name = v.clone(),
                Action::UpdateStartHour(v) => that.data.time.set_start_hour(v.clone()),
                Action::UpdateStartMinute(v) => that.data.time.set_start_minute(v.clone()),
                Action::UpdateStartTimeOfDay(v) => that.data.time.set_start_time_of_day(*v),
                Action::UpdateEndHour(v) => that.data.time.set_end_hour(v.clone()),
                Action::UpdateEndMinute(v) => that.data.time.set_end_minute(v.clone()),
                Action::UpdateEndTimeOfDay(v) => that.data.time.set_end_time_of_day(*v),
                Action::SetHasEndTime(v) => that.data.time.set_has_end_time(*v),
                Action::SubmitChanges => that.submit = true,
            }
        }));
        dispatcher.register(callback);
    }
}

impl ItemStoreLike for ItemStore {
    type Output<'a> = &'a ItemStore;

    fn item(&self) -> &ItemStore {
        self
    }
}

/// The draft being edited: a name plus the picker state.
#[derive(Debug, Default)]
pub struct ItemDraft {
    pub name: String,
    pub time: TimeState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::TimeOfDay;

    fn dispatch_all(actions: &[Action]) -> ItemStore {
        let store = Rc::new(RefCell::new(ItemStore::new()));
        let mut dispatcher = Dispatcher::new();
        ItemStore::register_to(store.clone(), &mut dispatcher);
        for action in actions {
            dispatcher.dispatch(action);
        }
        drop(dispatcher);
        Rc::try_unwrap(store).unwrap().into_inner()
    }

    #[test]
    fn test_actions_update_the_draft() {
        let store = dispatch_all(&[
            Action::UpdateItemName("Lunch".to_string()),
            Action::UpdateStartHour("1".to_string()),
            Action::UpdateStartMinute("30".to_string()),
            Action::UpdateStartTimeOfDay(TimeOfDay::Pm),
            Action::SetHasEndTime(true),
            Action::UpdateEndHour("2".to_string()),
        ]);

        assert_eq!(store.data.name, "Lunch");
        assert_eq!(store.data.time.start.display(), "1:30 pm");
        assert!(store.data.time.has_end_time);
        assert_eq!(store.data.time.end.hour, "2");
        assert!(!store.submit);
    }

    #[test]
    fn test_submit_changes_marks_the_store() {
        let store = dispatch_all(&[Action::SubmitChanges]);
        assert!(store.submit);
    }

    #[test]
    fn test_submit_item_defaults_the_name() {
        let store = dispatch_all(&[Action::SubmitChanges]);
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let item = store.submit_item(date);
        assert_eq!(item.name, "New item");
        assert_eq!(item.time.start, "12:00 pm");
        assert!(item.time.end.is_none());
    }

    #[test]
    fn test_submit_item_carries_the_end_time_only_when_toggled() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        let store = dispatch_all(&[
            Action::UpdateItemName("Panel".to_string()),
            Action::UpdateEndHour("3".to_string()),
            Action::SubmitChanges,
        ]);
        assert!(store.submit_item(date).time.end.is_none());

        let store = dispatch_all(&[
            Action::UpdateItemName("Panel".to_string()),
            Action::UpdateEndHour("3".to_string()),
            Action::SetHasEndTime(true),
            Action::SubmitChanges,
        ]);
        assert_eq!(store.submit_item(date).time.end.as_deref(), Some("3:00 pm"));
    }
}
