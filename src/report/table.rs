//! Console table of benchmark records

use console::{measure_text_width, pad_str, style, Alignment};

use crate::pipeline::StatsRecord;

/// Column headers, label column first
pub const HEADERS: [&str; 8] = [
    "Config",
    "Original",
    "Minified",
    "Gzip",
    "Brotli",
    "Classes",
    "Declarations",
    "Color Declarations",
];

const COLUMN_GAP: &str = "  ";

/// Renders records as an aligned plain-text table
pub struct TableReporter;

impl TableReporter {
    /// Render the header and one row per record, in the given order
    ///
    /// # Examples
    ///
    /// ```
    /// use css_bench::pipeline::{FileSizes, StatsRecord};
    /// use css_bench::report::TableReporter;
    ///
    /// let record = StatsRecord {
    ///     label: "bulma".to_string(),
    ///     sizes: FileSizes { original: 2048, minified: 1024, gzip: 512, brotli: 256 },
    ///     css: None,
    /// };
    /// let table = TableReporter::render(&[record]);
    /// assert!(table.lines().nth(2).unwrap().starts_with("bulma"));
    /// ```
    pub fn render(records: &[StatsRecord]) -> String {
        let rows: Vec<[String; 8]> = records.iter().map(Self::row).collect();

        let mut widths = HEADERS.map(measure_text_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let header = HEADERS.map(String::from);
        let separator = widths.map(|w| "-".repeat(w));

        let mut out = String::new();
        for line in std::iter::once(&header)
            .chain(std::iter::once(&separator))
            .chain(rows.iter())
        {
            out.push_str(&Self::format_line(line, &widths));
            out.push('\n');
        }
        out
    }

    /// Print the table to standard output
    pub fn display(records: &[StatsRecord]) {
        let table = Self::render(records);
        let mut lines = table.lines();
        if let Some(header) = lines.next() {
            println!("{}", style(header).bold());
        }
        for line in lines {
            println!("{line}");
        }
    }

    fn row(record: &StatsRecord) -> [String; 8] {
        let [original, minified, gzip, brotli, classes, declarations, colors] = record.fields();
        [
            record.label.clone(),
            original,
            minified,
            gzip,
            brotli,
            classes,
            declarations,
            colors,
        ]
    }

    fn format_line(cells: &[String; 8], widths: &[usize; 8]) -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                // label column reads left to right, numbers line up on the right
                let align = if i == 0 {
                    Alignment::Left
                } else {
                    Alignment::Right
                };
                pad_str(cell, *width, align, None).into_owned()
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    }
}
