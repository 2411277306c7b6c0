//! Runtime diagnostics
//!
//! User-facing runtime errors are reported here: a colored heading with the
//! error kind and source location, the code and message, and a preview of
//! the offending source with the span underlined. Reporting terminates the
//! process; the language has no in-program exceptions.

pub mod messages;
mod stylesheet;

use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;

use anstream::eprintln;
use indexmap::IndexMap;
use numerobis_shared::source::SourceModule;
use numerobis_shared::span::SourceSpan;
use owo_colors::OwoColorize;

use crate::value::RuntimeError;

/// Columns of context shown on each side of the highlighted span.
const PREVIEW_WINDOW: i32 = 30;

static MODULES: OnceLock<ModuleRegistry> = OnceLock::new();

struct ModuleRegistry {
    modules: IndexMap<PathBuf, SourceModule>,
    active: PathBuf,
}

/// Installs the per-module source registry, selecting the module that
/// emitted code reports spans against.
///
/// # Panics
///
/// Panics when called twice, or when `active` is out of range; the
/// compiled program installs the registry exactly once during startup.
pub fn install_modules(modules: Vec<SourceModule>, active: usize) {
    let map: IndexMap<PathBuf, SourceModule> = modules
        .into_iter()
        .map(|module| (module.path().clone(), module))
        .collect();

    let active = map
        .get_index(active)
        .map(|(path, _)| path.clone())
        .expect("active module index is in range");

    assert!(
        MODULES.set(ModuleRegistry { modules: map, active }).is_ok(),
        "module registry is already installed"
    );
}

fn active_module() -> Option<&'static SourceModule> {
    MODULES.get().map(|registry| &registry.modules[&registry.active])
}

/// Reports an error by code and span, then terminates the process.
pub fn throw(code: i32, span: SourceSpan) -> ! {
    fail(&RuntimeError::new(code).with_span(span))
}

/// Reports a runtime error and terminates the process with a non-zero
/// status.
pub fn fail(error: &RuntimeError) -> ! {
    eprintln!("{}", render_report(error));
    process::exit(1);
}

/// Builds the full diagnostic text for an error.
#[must_use]
pub fn render_report(error: &RuntimeError) -> String {
    let message = messages::lookup(error.code());
    let span = error.span();
    let module = active_module();

    let mut out = String::new();

    let location = module.map_or_else(
        || String::from("at <unknown>"),
        |m| format!("at {}:{}:{}", m.path().display(), span.line, span.col),
    );
    out.push_str(&format!(
        "{} {}\n",
        message.kind.style(stylesheet::ERROR),
        location.style(stylesheet::GUTTER),
    ));
    out.push_str(&format!("  [E{}] {}\n", error.code(), message.message));

    if let Some(module) = module {
        if !span.is_unset() {
            out.push('\n');
            let lines = span.split_lines();
            for (i, line_span) in lines.iter().enumerate() {
                render_preview_line(
                    module,
                    line_span,
                    i == 0,
                    i == lines.len() - 1,
                    &mut out,
                );
            }
        }
    }

    out
}

/// Renders one source line of the preview: the clamped source window with
/// the span highlighted, then an underline row.
fn render_preview_line(
    module: &SourceModule,
    line_span: &SourceSpan,
    first: bool,
    last: bool,
    out: &mut String,
) {
    let Some(source) = module.line(line_span.line) else {
        return;
    };
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len() as i32;

    let end_col = if line_span.end_col > 0 {
        line_span.end_col
    } else {
        len + 1
    };
    let col_start = line_span.col.clamp(1, len + 1);
    let col_end = end_col.clamp(col_start, len + 1) + 1;

    let window_start = (col_start - 1 - PREVIEW_WINDOW).max(0);
    let window_end = (col_end - 1 + PREVIEW_WINDOW).min(len);

    let highlight_start = (col_start - 1).min(len);
    let highlight_end = (col_end - 1).min(len);

    let text = |from: i32, to: i32| -> String {
        chars[from as usize..to.max(from) as usize].iter().collect()
    };
    let before = text(window_start, highlight_start);
    let highlight = text(highlight_start, highlight_end);
    let after = text(highlight_end, window_end);

    let prefix = if window_start > 0 { "..." } else { "" };
    let suffix = if window_end < len { "..." } else { "" };

    let gutter = format!("{:>5} │", line_span.line);
    out.push_str(&format!(
        "{}   {prefix}{before}{}{after}{suffix}\n",
        gutter.style(stylesheet::GUTTER),
        highlight.style(stylesheet::ERROR),
    ));

    if highlight.is_empty() {
        return;
    }

    let mut underline = String::new();
    let highlight_len = highlight.chars().count();
    for i in 0..highlight_len {
        if first && i == 0 {
            underline.push('╰');
        } else if last && i == highlight_len - 1 {
            underline.push('╯');
        } else {
            underline.push('─');
        }
    }

    let pad = " ".repeat(prefix.len() + before.chars().count());
    out.push_str(&format!(
        "{}   {pad}{}\n",
        "      │".style(stylesheet::GUTTER),
        underline.style(stylesheet::ERROR),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::error::codes;

    #[test]
    fn reports_carry_code_message_and_source_preview() {
        install_modules(
            vec![SourceModule::new("main.nrb", "let xs = [1, 2, 3]\necho(xs[5])")],
            0,
        );

        let error = RuntimeError::new(codes::LIST_INDEX)
            .with_span(SourceSpan::new(2, 9, 2, 9));
        let report = render_report(&error);

        assert!(report.contains("[E901] list index out of range"));
        assert!(report.contains("main.nrb:2:9"));
        assert!(report.contains("echo(xs["));
        assert!(report.contains('╰'));
    }

    #[test]
    fn unset_spans_skip_the_preview() {
        let error = RuntimeError::new(codes::INT_PARSE);
        let report = render_report(&error);

        assert!(report.contains("[E301]"));
        assert!(!report.contains('│'));
    }
}
