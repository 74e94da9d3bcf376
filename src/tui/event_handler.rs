use super::app::App;
use crate::fs::FsAccess;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

pub(super) fn handle_events(app: &mut App, fs: &dyn FsAccess) -> Result<()> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                app.handle_key(fs, key_event);
            }
        }
    }
    Ok(())
}
