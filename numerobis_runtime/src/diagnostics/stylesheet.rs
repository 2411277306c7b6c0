//! Styles used by diagnostic rendering

use owo_colors::Style;

/// Error headings, highlighted source, and underlines.
pub const ERROR: Style = Style::new().red().bold();

/// Line-number gutters and location trails.
pub const GUTTER: Style = Style::new().dimmed();
