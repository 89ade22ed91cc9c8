//! Text building blocks shared by every command's output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, DOT};

/// Title line above a report, e.g. `SubTrackr · upcoming (next 10d)`.
///
/// Scripts get the bare `subtrackr <command>`; JSON gets nothing.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("SubTrackr", styles::bold(), ctx.color);
            let dot = DOT.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, dot, command, c),
                None => format!("{} {} {}", title, dot, command),
            }
        }
        OutputMode::Plain => format!("subtrackr {}", command),
        OutputMode::Json => String::new(),
    }
}

/// `[OK] message` style status line.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// `Monthly: $19.98` for people, `monthly=19.98` for scripts.
///
/// Plain keys are lower-cased with spaces turned into underscores.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Suggested next command.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary printed after `add`, `delete`, `export` and `import`.
///
/// Plain output starts with `status=ok` followed by one `key=value` per item.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        lines.extend(items.iter().map(|(key, value)| format!("  {}", kv(ctx, key, value))));
    } else {
        lines.push("status=ok".to_string());
        lines.extend(items.iter().map(|(key, value)| kv(ctx, key, value)));
    }
    lines.join("\n")
}

/// Table column heading and alignment.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    /// A right-aligned column, for amounts.
    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// How a pretty table is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Rounded borders (ASCII under `--ascii`), sized to the terminal
    Boxed,
    /// No borders, dim headings
    Bare,
}

/// Render rows under `columns`.
///
/// Outside pretty mode this is tab-separated values with no heading row.
pub fn table(ctx: &UiContext, style: TableStyle, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    match style {
        TableStyle::Boxed if ctx.unicode => {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        }
        TableStyle::Boxed => {
            table.load_preset(ASCII_MARKDOWN);
        }
        TableStyle::Bare => {
            table.load_preset(NOTHING);
        }
    }
    if style == TableStyle::Boxed {
        table.set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));
    }

    let dim_headings = style == TableStyle::Bare && ctx.color;
    table.set_header(columns.iter().map(|c| {
        let cell = Cell::new(c.header);
        if dim_headings {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    }));
    for row in rows {
        table.add_row(row);
    }
    for (i, col) in columns.iter().enumerate() {
        if let Some(column) = table.column_mut(i) {
            if style == TableStyle::Bare {
                column.set_padding((0, 2));
            }
            if col.align_right {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }
    table.to_string()
}

/// Write to stdout; JSON mode prints its document separately.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer between blocks; scripts never see it.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Report a failure on stderr: `error=...` and `hint=...` lines when plain,
/// an `[ERR]` badge otherwise.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_block(ctx, message, error_hint));
}

fn error_block(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = if ctx.mode.is_pretty() {
        vec![badge(ctx, Badge::Err, message)]
    } else {
        vec![format!("error={}", message)]
    };
    lines.extend(error_hint.map(|h| hint(ctx, h)));
    lines.join("\n")
}
