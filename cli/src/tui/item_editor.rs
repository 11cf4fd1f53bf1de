// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{TimeOfDay, hour_choices, minute_choices};
use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, Input, RadioGroup, Select, Toggle};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::item_store::ItemStoreLike;

pub struct ItemEditor<S: ItemStoreLike>(SinglePage<S, ItemForm<S>>);

impl<S: ItemStoreLike + 'static> ItemEditor<S> {
    pub fn new() -> Self {
        Self(SinglePage::new("Add Schedule Item".to_owned(), ItemForm::new()))
    }
}

impl<S: ItemStoreLike> Component<S> for ItemEditor<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.deactivate(dispatcher, store);
    }
}

pub struct ItemForm<S: ItemStoreLike>(Form<S>);

impl<S: ItemStoreLike + 'static> ItemForm<S> {
    pub fn new() -> Self {
        Self(Form::new(vec![
            Box::new(new_name()),
            Box::new(new_start_hour()),
            Box::new(new_start_minute()),
            Box::new(new_start_time_of_day()),
            Box::new(new_has_end_time()),
            Box::new(new_end_hour().visible_when(has_end_time::<S>)),
            Box::new(new_end_minute().visible_when(has_end_time::<S>)),
            Box::new(new_end_time_of_day().visible_when(has_end_time::<S>)),
        ]))
    }
}

impl<S: ItemStoreLike> Component<S> for ItemForm<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn has_end_time<S: ItemStoreLike>(store: &RefCell<S>) -> bool {
    store.borrow().item().data.time.has_end_time
}

fn new_name<S: ItemStoreLike>() -> Input<S, NameAccess> {
    Input::new("Name".to_string())
}

struct NameAccess;

impl<S: ItemStoreLike> Access<S, String> for NameAccess {
    fn get(store: &RefCell<S>) -> String {
        store.borrow().item().data.name.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(&Action::UpdateItemName(value));
        true
    }
}

macro_rules! new_select {
    ($fn:ident, $title:expr, $choices:expr, $acc:ident, $field:ident . $part:ident, $action:ident) => {
        fn $fn<S: ItemStoreLike>() -> Select<S, $acc> {
            Select::new($title.to_string(), $choices)
        }

        struct $acc;

        impl<S: ItemStoreLike> Access<S, String> for $acc {
            fn get(store: &RefCell<S>) -> String {
                store.borrow().item().data.time.$field.$part.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(&Action::$action(value));
                true
            }
        }
    };
}

new_select!(
    new_start_hour,
    "Hour",
    hour_choices(),
    StartHourAccess,
    start.hour,
    UpdateStartHour
);
new_select!(
    new_start_minute,
    "Minute",
    minute_choices(),
    StartMinuteAccess,
    start.minute,
    UpdateStartMinute
);
new_select!(
    new_end_hour,
    "End hour",
    hour_choices(),
    EndHourAccess,
    end.hour,
    UpdateEndHour
);
new_select!(
    new_end_minute,
    "End minute",
    minute_choices(),
    EndMinuteAccess,
    end.minute,
    UpdateEndMinute
);

macro_rules! new_time_of_day {
    ($fn:ident, $title:expr, $acc:ident, $field:ident, $action:ident) => {
        fn $fn<S: ItemStoreLike>() -> RadioGroup<S, TimeOfDay, $acc> {
            use TimeOfDay::*;
            let values = vec![Am, Pm];
            let options = values.iter().map(ToString::to_string).collect();
            RadioGroup::new($title.to_string(), values, options)
        }

        struct $acc;

        impl<S: ItemStoreLike> Access<S, TimeOfDay> for $acc {
            fn get(store: &RefCell<S>) -> TimeOfDay {
                store.borrow().item().data.time.$field.time_of_day
            }

            fn set(dispatcher: &mut Dispatcher, value: TimeOfDay) -> bool {
                dispatcher.dispatch(&Action::$action(value));
                true
            }
        }
    };
}

new_time_of_day!(
    new_start_time_of_day,
    "Am/pm",
    StartTimeOfDayAccess,
    start,
    UpdateStartTimeOfDay
);
new_time_of_day!(
    new_end_time_of_day,
    "End am/pm",
    EndTimeOfDayAccess,
    end,
    UpdateEndTimeOfDay
);

fn new_has_end_time<S: ItemStoreLike>() -> Toggle<S, HasEndTimeAccess> {
    Toggle::new(
        "Ending time".to_string(),
        "remove ending time",
        "add ending time",
    )
}

struct HasEndTimeAccess;

impl<S: ItemStoreLike> Access<S, bool> for HasEndTimeAccess {
    fn get(store: &RefCell<S>) -> bool {
        store.borrow().item().data.time.has_end_time
    }

    fn set(dispatcher: &mut Dispatcher, value: bool) -> bool {
        dispatcher.dispatch(&Action::SetHasEndTime(value));
        true
    }
}
