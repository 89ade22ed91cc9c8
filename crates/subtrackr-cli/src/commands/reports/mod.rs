pub mod totals;
pub mod upcoming;

pub use totals::handle_totals;
pub use upcoming::handle_upcoming;
