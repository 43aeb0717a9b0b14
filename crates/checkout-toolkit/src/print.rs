use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use checkout::ResultSet;
use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};
use itertools::Itertools;

use crate::Result;

pub trait PrintExt {
    fn table(&self) -> String;

    fn write_csv<W>(&self, out: W) -> std::io::Result<()>
    where
        W: Write;

    fn print_table(&self) {
        print!("{}", self.table());
    }

    fn save_csv<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_csv(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl PrintExt for ResultSet {
    fn table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(self.header().into_iter().map(Cell::new));
        for row in self.rows() {
            table.add_row(
                std::iter::once(Cell::new(row.remaining))
                    .chain(row.solutions.iter().map(Cell::new)),
            );
        }

        format!(
            "Starting points: {} | Checkouts: {}\n\n{table}\n",
            self.rows().len(),
            self.total()
        )
    }

    /// One line per starting value; short rows are padded with empty cells.
    fn write_csv<W>(&self, mut out: W) -> std::io::Result<()>
    where
        W: Write,
    {
        let width = self.width();
        writeln!(out, "{}", self.header().iter().map(|h| escape(h)).join(","))?;
        for row in self.rows() {
            let cells = row
                .solutions
                .iter()
                .map(|s| escape(s))
                .chain(std::iter::repeat(String::new()))
                .take(width);
            writeln!(
                out,
                "{}",
                std::iter::once(row.remaining.to_string()).chain(cells).join(",")
            )?;
        }
        Ok(())
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
