//! Text rendering of a grid for logs and diagnostics.
//!
//! [`GridDebug`] draws the cells of a [`GridModel`] or a [`GridSnapshot`] as
//! a plain-text table. It is meant for trace output and test failure
//! messages, not for presenting data to users.
//!
//! ```
//! use dyntable::model::{GridDebug, GridFormatOptions, GridModel, GridStyle, TableConfig};
//!
//! let model = GridModel::new(2, 2, TableConfig::default());
//! let debug = GridDebug::with_options(GridFormatOptions {
//!     style: GridStyle::Ascii,
//!     ..GridFormatOptions::default()
//! });
//!
//! assert_eq!(
//!     debug.format(&model),
//!     "Grid (2 x 2, version 0):\n\
//!      +-------+-------+\n\
//!      |       | Col 1 |\n\
//!      +-------+-------+\n\
//!      | Row 1 |       |\n\
//!      +-------+-------+\n"
//! );
//! ```

use super::grid_model::GridModel;
use super::selection::Selection;
use super::snapshot::GridSnapshot;

/// Drawing style for grid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// ASCII characters for borders.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// No borders, columns separated by spaces.
    Compact,
}

/// Configuration for grid debug output.
#[derive(Debug, Clone)]
pub struct GridFormatOptions {
    /// The style of the table.
    pub style: GridStyle,
    /// Whether to label rows and columns with their indices.
    pub show_indices: bool,
    /// Whether to prefix cells of the selected row or column with `*`.
    pub mark_selection: bool,
    /// Maximum characters per cell before truncation (None for unlimited).
    pub max_cell_width: Option<usize>,
}

impl Default for GridFormatOptions {
    fn default() -> Self {
        Self {
            style: GridStyle::default(),
            show_indices: false,
            mark_selection: true,
            max_cell_width: Some(24),
        }
    }
}

impl GridFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_indices: true,
            max_cell_width: None,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            style: GridStyle::Compact,
            mark_selection: false,
            ..Default::default()
        }
    }
}

/// Border characters: left, middle, right, horizontal.
type Rule = (&'static str, &'static str, &'static str, &'static str);

/// Debug utility for rendering grids as text tables.
#[derive(Debug, Clone, Default)]
pub struct GridDebug {
    options: GridFormatOptions,
}

impl GridDebug {
    /// Create a new renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: GridFormatOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &GridFormatOptions {
        &self.options
    }

    /// Render the current state of a model.
    pub fn format(&self, model: &GridModel) -> String {
        self.render(model.rows(), model.selection(), model.version())
    }

    /// Render a snapshot.
    pub fn format_snapshot(&self, snapshot: &GridSnapshot) -> String {
        self.render(&snapshot.cells, snapshot.selection, snapshot.version)
    }

    fn render(&self, cells: &[Vec<String>], selection: Selection, version: u64) -> String {
        // Ragged rows are padded to the widest row.
        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let mut lines = vec![format!(
            "Grid ({} x {}, version {}):",
            cells.len(),
            columns,
            version
        )];

        if columns == 0 {
            lines.push("  (empty)".to_string());
            return join_lines(lines);
        }

        if self.options.mark_selection {
            match selection {
                Selection::Row(row) => lines.push(format!("selection: row {row}")),
                Selection::Column(column) => lines.push(format!("selection: column {column}")),
                Selection::None => {}
            }
        }

        let table = self.build_table(cells, columns, selection);
        let widths = column_widths(&table);

        let (top, separator, bottom, vertical) = match self.options.style {
            GridStyle::Unicode => (
                Some(("\u{250c}", "\u{252c}", "\u{2510}", "\u{2500}")),
                Some(("\u{251c}", "\u{253c}", "\u{2524}", "\u{2500}")),
                Some(("\u{2514}", "\u{2534}", "\u{2518}", "\u{2500}")),
                Some("\u{2502}"),
            ),
            GridStyle::Ascii => (
                Some(("+", "+", "+", "-")),
                Some(("+", "+", "+", "-")),
                Some(("+", "+", "+", "-")),
                Some("|"),
            ),
            GridStyle::Compact => (None, None, None, None),
        };

        // The header band row sits below the index row when indices are shown.
        let header_line = usize::from(self.options.show_indices);

        if let Some(rule) = top {
            lines.push(draw_rule(&widths, rule));
        }
        for (i, row) in table.iter().enumerate() {
            lines.push(draw_row(row, &widths, vertical));
            if i == header_line && i + 1 < table.len() {
                if let Some(rule) = separator {
                    lines.push(draw_rule(&widths, rule));
                }
            }
        }
        if let Some(rule) = bottom {
            lines.push(draw_rule(&widths, rule));
        }

        join_lines(lines)
    }

    /// Produces the rendered cell texts, including index labels.
    fn build_table(
        &self,
        cells: &[Vec<String>],
        columns: usize,
        selection: Selection,
    ) -> Vec<Vec<String>> {
        let mut table = Vec::with_capacity(cells.len() + 1);

        if self.options.show_indices {
            let mut index_row = Vec::with_capacity(columns + 1);
            index_row.push("#".to_string());
            index_row.extend((0..columns).map(|column| column.to_string()));
            table.push(index_row);
        }

        for (r, row) in cells.iter().enumerate() {
            let mut line = Vec::with_capacity(columns + 1);
            if self.options.show_indices {
                line.push(r.to_string());
            }
            for c in 0..columns {
                let text = row.get(c).map_or("", String::as_str);
                let text = self.truncate(text);
                if self.options.mark_selection && selection.highlights(r, c) {
                    line.push(format!("*{text}"));
                } else {
                    line.push(text);
                }
            }
            table.push(line);
        }

        table
    }

    fn truncate(&self, text: &str) -> String {
        let Some(max) = self.options.max_cell_width else {
            return text.to_string();
        };
        if text.chars().count() <= max {
            return text.to_string();
        }
        if max == 0 {
            return String::new();
        }
        let ellipsis = match self.options.style {
            GridStyle::Unicode => '\u{2026}',
            GridStyle::Ascii | GridStyle::Compact => '~',
        };
        let mut truncated: String = text.chars().take(max - 1).collect();
        truncated.push(ellipsis);
        truncated
    }
}

fn column_widths(table: &[Vec<String>]) -> Vec<usize> {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|c| {
            table
                .iter()
                .filter_map(|row| row.get(c))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn draw_rule(widths: &[usize], (left, middle, right, horizontal): Rule) -> String {
    let segments: Vec<String> = widths.iter().map(|w| horizontal.repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(middle))
}

fn draw_row(row: &[String], widths: &[usize], vertical: Option<&str>) -> String {
    let padded = row
        .iter()
        .zip(widths)
        .map(|(text, &width)| format!("{text:<width$}"));
    match vertical {
        Some(v) => {
            let inner: Vec<String> = padded.map(|cell| format!(" {cell} ")).collect();
            format!("{v}{}{v}", inner.join(v))
        }
        None => padded.collect::<Vec<_>>().join("  ").trim_end().to_string(),
    }
}

fn join_lines(lines: Vec<String>) -> String {
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableConfig;

    fn options(style: GridStyle) -> GridFormatOptions {
        GridFormatOptions {
            style,
            ..GridFormatOptions::default()
        }
    }

    #[test]
    fn test_unicode_table() {
        let model = GridModel::new(2, 2, TableConfig::default());
        let output = GridDebug::new().format(&model);
        let expected = "Grid (2 x 2, version 0):\n\
                        \u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{252c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}\n\
                        \u{2502}       \u{2502} Col 1 \u{2502}\n\
                        \u{251c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{253c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2524}\n\
                        \u{2502} Row 1 \u{2502}       \u{2502}\n\
                        \u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2534}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_compact_marks_selection() {
        let mut model = GridModel::new(2, 2, TableConfig::default());
        model.select_row(1).unwrap();

        let output = GridDebug::with_options(options(GridStyle::Compact)).format(&model);
        assert_eq!(
            output,
            "Grid (2 x 2, version 1):\n\
             selection: row 1\n        \
             Col 1\n\
             *Row 1  *\n"
        );
    }

    #[test]
    fn test_minimal_hides_selection() {
        let mut model = GridModel::new(2, 2, TableConfig::default());
        model.select_column(1).unwrap();

        let output = GridDebug::with_options(GridFormatOptions::minimal()).format(&model);
        assert!(!output.contains('*'));
        assert!(!output.contains("selection"));
    }

    #[test]
    fn test_indices() {
        let model = GridModel::new(3, 2, TableConfig::default());
        let output = GridDebug::with_options(GridFormatOptions {
            style: GridStyle::Compact,
            ..GridFormatOptions::detailed()
        })
        .format(&model);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "#  0      1");
        assert_eq!(lines[2], "0         Col 1");
        assert_eq!(lines[4], "2  Row 2");
    }

    #[test]
    fn test_truncation() {
        let model = GridModel::from_data(
            vec![vec!["".into(), "Quarterly revenue".into()]],
            TableConfig::default(),
        );
        let narrow = |style| GridFormatOptions {
            max_cell_width: Some(4),
            ..options(style)
        };

        let unicode = GridDebug::with_options(narrow(GridStyle::Unicode)).format(&model);
        assert!(unicode.contains("Qua\u{2026}"));

        let ascii = GridDebug::with_options(narrow(GridStyle::Ascii)).format(&model);
        assert!(ascii.contains("| Qua~ |"));
        assert!(!ascii.contains("revenue"));
    }

    #[test]
    fn test_empty_grid() {
        let model = GridModel::new(0, 0, TableConfig::default());
        assert_eq!(
            GridDebug::new().format(&model),
            "Grid (0 x 0, version 0):\n  (empty)\n"
        );
    }

    #[test]
    fn test_snapshot_matches_model() {
        let mut model = GridModel::new(3, 3, TableConfig::default());
        model.handle_selection(0, 2).unwrap();
        let debug = GridDebug::with_options(GridFormatOptions::detailed());
        assert_eq!(debug.format(&model), debug.format_snapshot(&model.snapshot()));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let model = GridModel::from_data(
            vec![
                vec!["".into(), "Col 1".into()],
                vec!["Row 1".into()],
            ],
            TableConfig::default(),
        );
        let output = GridDebug::with_options(options(GridStyle::Ascii)).format(&model);
        assert!(output.contains("| Row 1 |       |"));
    }
}
