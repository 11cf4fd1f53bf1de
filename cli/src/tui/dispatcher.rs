// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::TimeOfDay;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    UpdateItemName(String),
    UpdateStartHour(String),
    UpdateStartMinute(String),
    UpdateStartTimeOfDay(TimeOfDay),
    UpdateEndHour(String),
    UpdateEndMinute(String),
    UpdateEndTimeOfDay(TimeOfDay),
    SetHasEndTime(bool),
    SubmitChanges,
}
