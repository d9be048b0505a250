//! Terminal rendering of parse errors.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use weave_parse::ParseError;

/// Name shown in the report header for an expression given on the command line.
pub const EXPRESSION_SOURCE: &str = "<expr>";

/// Render `error` against the expression it came from.
///
/// Offsets in [`ParseError`] are byte offsets; the label is placed on the
/// character at that offset, or on the end of the text if the parser ran out
/// of input.
pub fn render_parse_error(text: &str, error: &ParseError, color: bool) -> String {
    let start = char_offset(text, error.offset);
    let end = (start + 1).min(text.chars().count()).max(start);

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, EXPRESSION_SOURCE, start)
        .with_config(Config::default().with_color(color))
        .with_code(error.code())
        .with_message(error.kind.to_string())
        .with_label(
            Label::new((EXPRESSION_SOURCE, start..end))
                .with_message(label_message(error))
                .with_color(Color::Red),
        )
        .with_note(format!("run `weave explain {}` for details", error.code()))
        .finish()
        .write((EXPRESSION_SOURCE, Source::from(text)), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // Writing into a Vec cannot fail, but keep a plain fallback.
        Err(_) => format!("error[{}]: {error}", error.code()),
    }
}

/// Print a rendered parse error to stderr.
pub fn emit_parse_error(text: &str, error: &ParseError) {
    eprint!("{}", render_parse_error(text, error, true));
}

fn label_message(error: &ParseError) -> String {
    format!("{} here", error.kind)
}

fn char_offset(text: &str, byte_offset: usize) -> usize {
    let mut boundary = byte_offset.min(text.len());
    while !text.is_char_boundary(boundary) {
        boundary -= 1;
    }
    text[..boundary].chars().count()
}
