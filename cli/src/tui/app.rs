// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use agenda_core::{Event, ScheduleItem};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event as TermEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::item_editor::ItemEditor;
use crate::tui::item_store::ItemStore;

/// Runs the interactive editor and returns the drafted schedule item,
/// or `None` when the user cancels without submitting.
pub fn add_schedule_item(event: &Event) -> Result<Option<ScheduleItem>, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(ItemStore::new()));

    let mut terminal = ratatui::init();
    let result = run_editor(&store, &mut terminal);
    ratatui::restore();
    result?;

    let store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    match store.submit {
        true => Ok(Some(store.submit_item(event.date))),
        false => Ok(None),
    }
}

fn run_editor(
    store: &Rc<RefCell<ItemStore>>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    // the dispatcher holds a reference to the store, drop it before unwrapping
    let mut dispatcher = Dispatcher::new();
    ItemStore::register_to(store.clone(), &mut dispatcher);

    let mut editor = ItemEditor::<ItemStore>::new();
    editor.activate(&mut dispatcher, store);

    let mut area = Rect::default();
    loop {
        terminal.draw(|frame| {
            area = frame.area();
            editor.render(store, area, frame.buffer_mut());
            if let Some(position) = editor.get_cursor_position(store, area) {
                frame.set_cursor_position(position);
            }
        })?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(Message::Exit) = editor.on_key(&mut dispatcher, store, area, key)
        {
            return Ok(());
        }
    }
}
