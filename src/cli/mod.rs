mod console;
mod entry_form;
mod errors;
mod menu;

pub use console::Console;
pub use menu::{load_or_start_fresh, Menu};
