use owo_colors::{OwoColorize, Style};
use crate::report::segment::{Segment, TextColor, TextStyle};

fn ansi_style(style: TextStyle) -> Style {
    let mut ansi = Style::new();
    if style.bold {
        ansi = ansi.bold();
    }
    if style.underline {
        ansi = ansi.underline();
    }
    match style.color {
        TextColor::Default => ansi,
        TextColor::Blue => ansi.blue(),
        TextColor::Green => ansi.green(),
        TextColor::Red => ansi.red(),
        TextColor::Yellow => ansi.yellow(),
    }
}

/// Renders segments with ANSI escapes for a terminal.
///
/// Styling is applied per line so a newline never sits inside an escape sequence.
pub fn render_ansi(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.style.is_plain() {
            out.push_str(&segment.text);
            continue;
        }
        let style = ansi_style(segment.style);
        for piece in segment.text.split_inclusive('\n') {
            let (line, newline) = match piece.strip_suffix('\n') {
                Some(line) => (line, "\n"),
                None => (piece, ""),
            };
            if !line.is_empty() {
                out.push_str(&line.style(style).to_string());
            }
            out.push_str(newline);
        }
    }
    out
}

pub fn render_plain(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, style: TextStyle) -> Segment {
        Segment { text: text.to_string(), style }
    }

    #[test]
    fn plain_rendering_drops_styles() {
        let segments = vec![segment("Healer\n", TextStyle::NAME_HEADER), segment("row\n", TextStyle::PLAIN)];
        assert_eq!(render_plain(&segments), "Healer\nrow\n");
    }

    #[test]
    fn ansi_rendering_keeps_newlines_outside_escapes() {
        let segments = vec![segment("Healer\n", TextStyle::NAME_HEADER)];
        let rendered = render_ansi(&segments);

        assert!(rendered.starts_with('\u{1b}'));
        assert!(rendered.ends_with("m\n"));
        assert!(rendered.contains("Healer"));
    }
}
