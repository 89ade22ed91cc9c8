pub mod export;
pub mod import;

pub use export::handle_export;
pub use import::handle_import;
