//! Main loop
//!
//! Every iteration:
//!
//! ```text
//! loop {
//!     apply backend results            // jobs finished since the last frame
//!     terminal.draw(view::render)      // draw the model
//!     if app.should_quit { break }
//!     poll_event(100ms)                // key press -> AppMessage, or Tick
//!     update::update(app, msg)
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the main loop until the user quits.
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        update::apply_jobs(app);

        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        let msg = match event::poll_event(POLL_INTERVAL)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };
        update::update(app, msg);
    }

    Ok(())
}
