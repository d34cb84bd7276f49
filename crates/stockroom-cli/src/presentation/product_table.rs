//! Terminal table renderer for product rows.

use std::io::{self, Write};

use stockroom_core::{ProductRenderer, ProductRow};
use tracing::debug;

use super::tables::{or_placeholder, truncate_string};

const TABLE_WIDTH: usize = 100;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Draws each frame of rows as a plain-text table on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    clear_screen: bool,
}

impl TableRenderer {
    /// Renderer that appends each frame below the previous output.
    pub const fn new() -> Self {
        Self {
            clear_screen: false,
        }
    }

    /// Renderer that redraws from a cleared screen, for live views.
    pub const fn live() -> Self {
        Self { clear_screen: true }
    }

    /// Write one frame to `out`, stopping at the first failed write.
    pub fn write_frame(self, out: &mut impl Write, rows: &[ProductRow]) -> io::Result<()> {
        if self.clear_screen {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(format_table(rows).as_bytes())?;
        out.flush()
    }
}

impl ProductRenderer for TableRenderer {
    fn render(&self, rows: &[ProductRow]) {
        if let Err(err) = self.write_frame(&mut io::stdout().lock(), rows) {
            debug!(error = %err, "Failed to draw product table");
        }
    }
}

/// Format rows as a table. An empty slice yields a single notice line.
pub fn format_table(rows: &[ProductRow]) -> String {
    if rows.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut table = String::new();
    table.push_str(&format!(
        "{:<36} {:<25} {:>8} {:<5} {:>10} Image\n",
        "ID", "Name", "Qty", "Stock", "Price"
    ));
    table.push_str(&"-".repeat(TABLE_WIDTH));
    table.push('\n');

    for row in rows {
        table.push_str(&format!(
            "{:<36} {:<25} {:>8} {:<5} {:>10} {}\n",
            row.id,
            truncate_string(&row.name, 24),
            row.quantity,
            row.stock_level,
            row.price,
            or_placeholder(&row.image_url, "--"),
        ));
    }
    table
}
