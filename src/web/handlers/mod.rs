//! HTML template rendering handlers for the calendar pages.

mod calendar;

pub use calendar::calendar_handler;
