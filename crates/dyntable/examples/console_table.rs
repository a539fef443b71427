//! Console Table Example
//!
//! Drives a grid model the way a table widget would: taps on header labels
//! select rows and columns, buttons add, move and delete them, text edits are
//! committed cell by cell, and Save hands the grid to the listener.
//!
//! Run with: cargo run -p dyntable --example console_table
//!
//! Set `RUST_LOG=dyntable=debug` to see the model's own logging.

use dyntable::model::{GridDebug, GridFormatOptions, KeyboardKind};
use dyntable::prelude::*;

/// Listener standing in for the screen that owns the table.
struct Screen;

impl UpdateListener for Screen {
    fn on_table_updated(&mut self, rows: &[Vec<String>]) {
        println!("saved {} rows", rows.len());
    }

    fn on_row_selected(&mut self, row: usize) {
        println!("row {row} selected");
    }

    fn on_column_selected(&mut self, column: usize) {
        println!("column {column} selected");
    }

    fn on_row_moved(&mut self, from: usize, to: usize) {
        println!("row moved {from} -> {to}");
    }

    fn on_column_deleted(&mut self, column: usize) {
        println!("column {column} deleted");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dyntable=info")),
        )
        .init();

    let config = TableConfig::from_toml_str(r#"keyboard = "decimal_pad""#)?;
    assert_eq!(config.keyboard, KeyboardKind::DecimalPad);

    let mut model = GridModel::new(4, 4, config).with_listener(Screen);
    let debug = GridDebug::new();

    let _redraw = model
        .signals()
        .version_changed
        .connect(|version| dyntable::dyntable_info!(version, "redraw"));

    // Fill in the interior cells.
    for row in 1..model.row_count() {
        for column in 1..model.column_count() {
            model.set_cell(row, column, format!("{}", row * 10 + column))?;
        }
    }
    print!("{}", debug.format(&model));

    // Tap "Row 3", then press Move Up twice.
    model.handle_selection(3, 0)?;
    model.move_selected_row_up()?;
    model.move_selected_row_up()?;

    // A third Move Up would land on the header row.
    if let Err(err) = model.move_selected_row_up() {
        println!("refused: {err}");
    }

    // Tap "Col 2" and delete it, then grow the table.
    model.handle_selection(0, 2)?;
    model.delete_selected_column()?;
    model.add_row()?;
    model.add_column()?;

    print!(
        "{}",
        GridDebug::with_options(GridFormatOptions::detailed()).format(&model)
    );

    model.save();
    Ok(())
}
