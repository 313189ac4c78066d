mod errors;
mod render;
mod summary;
#[cfg(test)]
mod tests;

pub use errors::ReportError;
pub use render::show_report;
pub use summary::{calculate_totals, CategoryShare, Totals};
