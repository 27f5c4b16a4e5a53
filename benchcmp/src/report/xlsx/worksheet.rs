//!
//! XLSX worksheet for comparison tables.
//!

use std::collections::BTreeSet;

use crate::stats::summary::Summary;
use crate::stats::table::Delta;
use crate::stats::table::Table;

///
/// XLSX worksheet for comparison tables.
///
pub struct Worksheet {
    /// The inner worksheet.
    worksheet: rust_xlsxwriter::Worksheet,
}

impl Worksheet {
    /// The longest worksheet name Excel accepts.
    const MAX_NAME_LENGTH: usize = 31;

    /// The name of the first worksheet.
    pub const SUMMARY_NAME: &'static str = "Summary";

    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: f64 = 14.0;

    ///
    /// Creates the first worksheet, listing the report title and its tables.
    ///
    pub fn summary(title: &str, tables: &[Table]) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(Self::SUMMARY_NAME)?;
        worksheet.set_column_width(0, 60)?;
        worksheet.set_column_width(1, Self::VALUE_COLUMN_WIDTH)?;
        worksheet.write_with_format(0, 0, title, &Self::worksheet_caption_format())?;

        for (index, table) in tables.iter().enumerate() {
            let row_index = (index as u32) + 2;
            worksheet.write_with_format(
                row_index,
                0,
                table.metric.as_str(),
                &Self::row_header_format(),
            )?;
            worksheet.write_with_format(
                row_index,
                1,
                table.rows.len() as u32,
                &Self::value_format(),
            )?;
        }

        Ok(Self { worksheet })
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns a worksheet name Excel accepts for `metric`.
    ///
    pub fn name(metric: &str) -> String {
        metric
            .replace('/', " per ")
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '\\' => '_',
                character => character,
            })
            .take(Self::MAX_NAME_LENGTH)
            .collect()
    }

    ///
    /// Returns a name for `metric` not in `used`, and records it there.
    ///
    /// Excel compares worksheet names case-insensitively, so `used` holds lowercase names.
    /// Clashes get a ` (2)`, ` (3)`, ... suffix within the length limit.
    ///
    pub fn unique_name(metric: &str, used: &mut BTreeSet<String>) -> String {
        let base = Self::name(metric);
        let mut name = base.clone();
        let mut index = 1;
        while used.contains(&name.to_lowercase()) {
            index += 1;
            let suffix = format!(" ({index})");
            name = base
                .chars()
                .take(Self::MAX_NAME_LENGTH - suffix.chars().count())
                .chain(suffix.chars())
                .collect();
        }
        used.insert(name.to_lowercase());
        name
    }

    ///
    /// Writes the mean and variation of a summary into two cells.
    ///
    fn write_summary(
        worksheet: &mut rust_xlsxwriter::Worksheet,
        row_index: u32,
        column_index: u16,
        summary: Option<&Summary>,
    ) -> anyhow::Result<()> {
        let Some(summary) = summary else {
            return Ok(());
        };
        worksheet.write_with_format(
            row_index,
            column_index,
            summary.mean,
            &Self::value_format(),
        )?;
        worksheet.write_with_format(
            row_index,
            column_index + 1,
            summary.variation,
            &Self::percent_format(),
        )?;
        Ok(())
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(16)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::Top)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_background_color("#FFFFFF")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("#,##0.00")
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("0.00%")
    }

    ///
    /// Returns the format of the delta column for a change in the given direction.
    ///
    fn delta_format(change: i8) -> rust_xlsxwriter::Format {
        let format = Self::percent_format().set_bold();
        match change {
            1 => format.set_font_color("#2B8A3E"),
            -1 => format.set_font_color("#C92A2A"),
            _ => format,
        }
    }
}

impl Worksheet {
    ///
    /// Creates the worksheet `name` holding the rows of `table`.
    ///
    pub fn comparison(name: String, table: &Table) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        let headers = [
            ("Package", 40.0),
            ("Benchmark", 40.0),
            (table.old_label.as_str(), Self::VALUE_COLUMN_WIDTH),
            ("±", 8.0),
            (table.new_label.as_str(), Self::VALUE_COLUMN_WIDTH),
            ("±", 8.0),
            ("Delta", Self::VALUE_COLUMN_WIDTH),
            ("p-value", 10.0),
        ];
        for (column_index, (caption, width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                column_index as u16,
                *caption,
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(column_index as u16, *width)?;
        }

        let is_larger_better = table.is_larger_better();
        for (index, row) in table.rows.iter().enumerate() {
            let row_index = (index as u32) + 1;
            worksheet.write_with_format(
                row_index,
                0,
                row.package.as_deref().unwrap_or_default(),
                &Self::row_header_format(),
            )?;
            worksheet.write_with_format(
                row_index,
                1,
                row.name.as_str(),
                &Self::row_header_format(),
            )?;
            Self::write_summary(&mut worksheet, row_index, 2, row.old.as_ref())?;
            Self::write_summary(&mut worksheet, row_index, 4, row.new.as_ref())?;

            match &row.delta {
                Delta::Change { percent, p_value } => {
                    worksheet.write_with_format(
                        row_index,
                        6,
                        percent / 100.0,
                        &Self::delta_format(row.change(is_larger_better)),
                    )?;
                    worksheet.write_with_format(row_index, 7, *p_value, &Self::value_format())?;
                }
                Delta::Insignificant { p_value } => {
                    worksheet.write_with_format(row_index, 6, "~", &Self::value_format())?;
                    worksheet.write_with_format(row_index, 7, *p_value, &Self::value_format())?;
                }
                Delta::Inconclusive { reason } => {
                    worksheet.write_with_format(
                        row_index,
                        6,
                        format!("~ ({reason})"),
                        &Self::value_format(),
                    )?;
                }
                Delta::Missing => {}
            }
        }

        Ok(Self { worksheet })
    }
}
