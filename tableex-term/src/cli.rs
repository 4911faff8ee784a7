use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Spreadsheet-style selection and column reordering for a table in the terminal.", long_about = None)]
pub struct Cli {
    /// Number of body rows in the sample table.
    #[arg(long, short = 'r', default_value_t = 256)]
    pub rows: usize,

    /// Number of columns in the sample table.
    #[arg(long, short = 'c', default_value_t = 16)]
    pub cols: usize,

    /// Turn off rectangular cell selection.
    #[arg(long)]
    pub no_box_select: bool,

    /// Turn off header drag-and-drop.
    #[arg(long)]
    pub no_column_resort: bool,

    /// Always copy with an OSC 52 escape sequence instead of a clipboard program.
    #[arg(long)]
    pub osc52: bool,

    /// Autoscroll timer period in milliseconds.
    #[arg(long, default_value_t = 50)]
    pub scroll_tick_ms: u64,

    /// Rows/columns moved by a single edge step.
    #[arg(long, default_value_t = 1.0)]
    pub scroll_speed: f64,

    /// Factor applied to the step on every continuous-scroll tick.
    #[arg(long, default_value_t = 1.0)]
    pub scroll_multiplier: f64,

    /// Fraction of the screen, from each edge, where a drag steps the view once.
    #[arg(long, default_value_t = 0.2)]
    pub outer_threshold: f64,

    /// Fraction of the screen, from each edge, where a drag scrolls continuously.
    #[arg(long, default_value_t = 0.1)]
    pub inner_threshold: f64,

    /// Where to write the debug log (the terminal itself is taken).
    #[arg(long, default_value = "tableex-term.log")]
    pub log_file: PathBuf,
}
