//!
//! The plain text table rendering.
//!

use std::io::Write;

use crate::stats::table::Table;

///
/// Writes `tables` as aligned plain text, separated by empty lines.
///
/// A `pkg:` line precedes the rows of each package.
///
pub fn write(writer: &mut dyn Write, tables: &[Table]) -> std::io::Result<()> {
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let header = table.header();
        let cells: Vec<[String; 4]> = table.rows.iter().map(|row| table.cells(row)).collect();
        let mut widths = header.clone().map(|caption| caption.chars().count());
        for row in cells.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(writer, &header, &widths)?;
        let mut package = None;
        for (row, cells) in table.rows.iter().zip(cells.iter()) {
            if row.package.is_some() && row.package != package {
                package = row.package.clone();
                writeln!(writer, "pkg: {}", row.package.as_deref().unwrap_or_default())?;
            }
            write_line(writer, cells, &widths)?;
        }
    }
    Ok(())
}

///
/// Writes one line, left-aligning the name and right-aligning the values.
///
fn write_line(
    writer: &mut dyn Write,
    cells: &[String; 4],
    widths: &[usize; 4],
) -> std::io::Result<()> {
    let line = format!(
        "{}  {}  {}  {}",
        pad_right(cells[0].as_str(), widths[0]),
        pad_left(cells[1].as_str(), widths[1]),
        pad_left(cells[2].as_str(), widths[2]),
        cells[3],
    );
    writeln!(writer, "{}", line.trim_end())
}

/// Pads by characters, since `±` and `µ` take more than one byte.
fn pad_right(cell: &str, width: usize) -> String {
    format!("{cell}{}", " ".repeat(width.saturating_sub(cell.chars().count())))
}

fn pad_left(cell: &str, width: usize) -> String {
    format!("{}{cell}", " ".repeat(width.saturating_sub(cell.chars().count())))
}
