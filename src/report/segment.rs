use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextColor {
    #[default]
    Default,
    Blue,
    Green,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub color: TextColor,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle { bold: false, underline: false, color: TextColor::Default };
    pub const NAME_HEADER: TextStyle = TextStyle { bold: true, underline: false, color: TextColor::Blue };
    pub const COLUMN_HEADER: TextStyle = TextStyle { bold: true, underline: true, color: TextColor::Default };
    pub const TOTAL_HEADER: TextStyle = TextStyle { bold: true, underline: false, color: TextColor::Red };
    pub const TOTAL_ROW: TextStyle = TextStyle { bold: false, underline: false, color: TextColor::Green };
    pub const NOTICE: TextStyle = TextStyle { bold: false, underline: false, color: TextColor::Yellow };

    pub fn is_plain(&self) -> bool {
        *self == TextStyle::PLAIN
    }
}

/// A run of text rendered with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(title: &'static str, width: usize) -> Self {
        Self { title, width, align: Align::Left }
    }

    pub fn right(title: &'static str, width: usize) -> Self {
        Self { title, width, align: Align::Right }
    }
}

/// Fixed-width column layout shared by the header and body rows of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn header(&self) -> String {
        let titles: Vec<&str> = self.columns.iter().map(|column| column.title).collect();
        self.format(&titles)
    }

    /// Lays out one row; missing cells are blank and long cells are cut to the column width.
    pub fn format<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let mut line = String::new();
        for (idx, column) in self.columns.iter().enumerate() {
            let cell = cells.get(idx).map(AsRef::as_ref).unwrap_or("");
            let cell: String = cell.chars().take(column.width).collect();
            if idx > 0 {
                line.push(' ');
            }
            let padded = match column.align {
                Align::Left => format!("{:<width$}", cell, width = column.width),
                Align::Right => format!("{:>width$}", cell, width = column.width),
            };
            line.push_str(&padded);
        }
        line.trim_end().to_string()
    }
}

#[derive(Debug, Default)]
pub struct SegmentWriter {
    segments: Vec<Segment>,
}

impl SegmentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        // Consecutive runs with the same style collapse into one segment.
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.segments.push(Segment { text, style }),
        }
    }

    pub fn line(&mut self, text: impl Into<String>, style: TextStyle) {
        let mut text = text.into();
        text.push('\n');
        self.push(text, style);
    }

    pub fn name_header(&mut self, name: &str) {
        self.line(name, TextStyle::NAME_HEADER);
    }

    pub fn column_header(&mut self, table: &Table) {
        self.line(table.header(), TextStyle::COLUMN_HEADER);
    }

    pub fn row<S: AsRef<str>>(&mut self, table: &Table, cells: &[S], style: TextStyle) {
        self.line(table.format(cells), style);
    }

    pub fn blank_line(&mut self) {
        self.push("\n", TextStyle::PLAIN);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_and_truncates_cells() {
        let table = Table::new(vec![Column::left("Buff", 6), Column::right("Casts", 5)]);

        assert_eq!(table.header(), "Buff   Casts");
        assert_eq!(table.format(&["Protect II", "3"]), "Protec     3");
        assert_eq!(table.format(&["Haste"]), "Haste");
    }

    #[test]
    fn right_aligned_cells_pad_on_the_left() {
        let table = Table::new(vec![Column::right("Min", 9), Column::right("Max", 9)]);

        assert_eq!(table.header(), "      Min       Max");
        assert_eq!(table.format(&["-", "1m:05.0s"]), "        -  1m:05.0s");
    }

    #[test]
    fn writer_merges_runs_of_the_same_style() {
        let mut writer = SegmentWriter::new();
        writer.line("a", TextStyle::PLAIN);
        writer.line("b", TextStyle::PLAIN);
        writer.name_header("Healer");
        writer.push("", TextStyle::COLUMN_HEADER);

        let segments = writer.into_segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "a\nb\n");
        assert_eq!(segments[1].style, TextStyle::NAME_HEADER);
    }
}
