//! UI primitives for the SubTrackr CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, color styles, symbols
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Money, ids, categories, truncation
//! - **Prompt**: Interactive input for `add`
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, hint, print, table, Column, TableStyle};
//!
//! let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
//!
//! if ui_ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! print(&ui_ctx, &header(&ui_ctx, "list", None));
//! print(&ui_ctx, &table(&ui_ctx, TableStyle::Boxed, &columns, &rows));
//! print(&ui_ctx, &hint(&ui_ctx, "subtrackr upcoming"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::{check_format, OutputMode};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, table, Column, TableStyle,
};

// Re-export commonly used format functions
pub use format::{category_label, format_cost, format_money, short_id, single_line, truncate};
