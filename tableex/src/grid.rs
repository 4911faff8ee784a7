//! In-memory table surface.

use crate::cell::CellRef;
use crate::surface::{CellKind, TableSurface};

/// One cell of a [`GridSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub kind: CellKind,
    /// Raw content; may carry inline markup such as `<b>..</b>`.
    pub content: String,
    pub selected: bool,
}

impl GridCell {
    pub fn header(content: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Header,
            content: content.into(),
            selected: false,
        }
    }

    pub fn data(content: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Data,
            content: content.into(),
            selected: false,
        }
    }
}

/// A table held entirely in memory: one header row followed by body rows.
#[derive(Debug, Clone, Default)]
pub struct GridSurface {
    rows: Vec<Vec<GridCell>>,
    native_selection_disabled: bool,
    native_selection_clears: usize,
}

impl GridSurface {
    /// Create a grid from a header row and body rows.
    pub fn new<H, S>(header: impl IntoIterator<Item = H>, body: impl IntoIterator<Item = Vec<S>>) -> Self
    where
        H: Into<String>,
        S: Into<String>,
    {
        let mut rows = vec![header.into_iter().map(GridCell::header).collect::<Vec<_>>()];
        rows.extend(
            body.into_iter()
                .map(|row| row.into_iter().map(GridCell::data).collect::<Vec<_>>()),
        );
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Create a grid from raw rows, for shapes `new` cannot express.
    pub fn from_cells(rows: Vec<Vec<GridCell>>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Sample table with `header{c}` headers and `data[{r},{c}]` cells.
    pub fn demo(rows: usize, cols: usize) -> Self {
        let header = (0..cols).map(|c| format!("header{c}"));
        let body = (0..rows).map(|r| (0..cols).map(|c| format!("data[{r},{c}]")).collect::<Vec<_>>());
        Self::new(header, body)
    }

    pub fn cell(&self, cell: CellRef) -> Option<&GridCell> {
        self.rows.get(cell.row).and_then(|r| r.get(cell.col))
    }

    pub fn row(&self, row: usize) -> Option<&[GridCell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Raw contents of a row, in column order.
    pub fn row_contents(&self, row: usize) -> Vec<String> {
        self.row(row)
            .map(|cells| cells.iter().map(|c| c.content.clone()).collect())
            .unwrap_or_default()
    }

    /// All cells currently carrying the selected marker, row-major.
    pub fn selected_cells(&self) -> Vec<CellRef> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.selected)
                    .map(move |(c, _)| CellRef::new(r, c))
            })
            .collect()
    }

    /// Widest cell count across all rows.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn native_selection_disabled(&self) -> bool {
        self.native_selection_disabled
    }

    /// How many times the native text selection was cleared.
    pub fn native_selection_clears(&self) -> usize {
        self.native_selection_clears
    }
}

impl TableSurface for GridSurface {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    fn cell_kind(&self, cell: CellRef) -> Option<CellKind> {
        self.cell(cell).map(|c| c.kind)
    }

    fn text(&self, cell: CellRef) -> Option<String> {
        self.cell(cell).map(|c| strip_markup(&c.content))
    }

    fn content(&self, cell: CellRef) -> Option<String> {
        self.cell(cell).map(|c| c.content.clone())
    }

    fn set_content(&mut self, cell: CellRef, content: String) {
        if let Some(c) = self.rows.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
            c.content = content;
        }
    }

    fn set_selected(&mut self, cell: CellRef, selected: bool) {
        if let Some(c) = self.rows.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
            c.selected = selected;
        }
    }

    fn clear_native_selection(&mut self) {
        self.native_selection_clears += 1;
    }

    fn disable_native_selection(&mut self) {
        self.native_selection_disabled = true;
    }
}

/// Drop `<...>` tags, keeping the text between them.
fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
