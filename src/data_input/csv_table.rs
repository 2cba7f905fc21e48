// src/data_input/csv_table.rs

use csv::ReaderBuilder;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::DataError;
use crate::signal::sequence::NumericSource;
use crate::types::PreviewRow;

/// Cell texts treated as missing values (read as NaN in numeric columns).
const MISSING_TOKENS: [&str; 17] = [
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A",
    "#N/A N/A", "#NA", "<NA>", "-1.#IND", "1.#QNAN",
];

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// A named column whose cells all read as numbers (or missing values).
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    name: String,
    values: Vec<f64>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl NumericSource for NumericColumn {
    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A CSV dataset held fully in memory as trimmed cell text.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn from_path(input_file_path: &Path) -> Result<Self, DataError> {
        info!("Reading dataset '{}'", input_file_path.display());
        let file = File::open(input_file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses CSV text with a header row.
    ///
    /// Short rows are padded with empty cells, extra cells are dropped, and repeated header
    /// names get `.1`, `.2`, ... suffixes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header_record = reader.headers()?.clone();
        let headers = dedupe_headers(header_record.iter());
        debug!("Headers found in CSV: {:?}", headers);

        let width = headers.len();
        let mut rows = Vec::new();
        for (row_index, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    if record.len() > width {
                        warn!(
                            "Row {} has {} cells, expected {}; extra cells ignored",
                            row_index + 1,
                            record.len(),
                            width
                        );
                    }
                    let mut row: Vec<String> =
                        record.iter().take(width).map(str::to_string).collect();
                    row.resize(width, String::new());
                    rows.push(row);
                }
                Err(e) => {
                    warn!("Skipping row {} due to CSV read error: {}", row_index + 1, e);
                }
            }
        }

        info!("Finished reading {} data rows.", rows.len());
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for the dataset preview.
    pub fn head(&self, n: usize) -> Vec<PreviewRow> {
        self.rows.iter().take(n).cloned().collect()
    }

    /// Column `index` read as numbers, or `None` if any non-missing cell is not a number.
    /// A column of only missing cells is numeric (all NaN); a table without rows has none.
    fn parse_numeric(&self, index: usize) -> Option<Vec<f64>> {
        if self.rows.is_empty() {
            return None;
        }
        self.rows
            .iter()
            .map(|row| {
                let cell = row[index].as_str();
                if is_missing(cell) {
                    Some(f64::NAN)
                } else {
                    cell.parse::<f64>().ok()
                }
            })
            .collect()
    }

    /// All numeric columns, in file order.
    pub fn numeric_columns(&self) -> Vec<NumericColumn> {
        self.headers
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                self.parse_numeric(i)
                    .map(|values| NumericColumn::new(name.clone(), values))
            })
            .collect()
    }

    pub fn numeric_column_names(&self) -> Vec<String> {
        self.numeric_columns()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// The column called `name`, if it exists and is numeric.
    pub fn numeric_column(&self, name: &str) -> Option<NumericColumn> {
        let index = self.headers.iter().position(|h| h == name)?;
        self.parse_numeric(index)
            .map(|values| NumericColumn::new(name, values))
    }

    /// Dataset preview as an aligned text table (header + first `n` rows).
    pub fn preview_table(&self, n: usize) -> String {
        let head = self.head(n);
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &head {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:>w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![format_row(self.headers.as_slice())];
        lines.extend(head.iter().map(|row| format_row(row.as_slice())));
        lines.join("\n")
    }
}

fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();
    for name in raw {
        let mut candidate = name.to_string();
        while let Some(count) = seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{name}.{count}");
        }
        seen.insert(candidate.clone(), 0);
        headers.push(candidate);
    }
    headers
}

/// Picks the column to delay: the named one, or the first numeric column.
pub fn select_numeric_column(
    table: &CsvTable,
    column: Option<&str>,
) -> Result<NumericColumn, DataError> {
    let mut numeric = table.numeric_columns();
    if numeric.is_empty() {
        return Err(DataError::NoNumericColumns);
    }
    let Some(name) = column else {
        return Ok(numeric.swap_remove(0));
    };
    match numeric.iter().position(|c| c.name() == name) {
        Some(i) => Ok(numeric.swap_remove(i)),
        None => Err(DataError::UnknownColumn {
            name: name.to_string(),
            available: numeric
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> CsvTable {
        CsvTable::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_numeric_detection() {
        let t = table("day,city,parcels,late\n1,Oslo,5,true\n2,Bergen,3,false\n3,Oslo,8,true\n");
        assert_eq!(t.numeric_column_names(), vec!["day", "parcels"]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_missing_cells_become_nan() {
        let t = table("a,b\n1,\n2,NA\n,3\n");
        let a = t.numeric_column("a").unwrap();
        assert_eq!(a.values()[..2], [1.0, 2.0]);
        assert!(a.values()[2].is_nan());
        let b = t.numeric_column("b").unwrap();
        assert!(b.values()[0].is_nan());
        assert!(b.values()[1].is_nan());
        assert_eq!(b.values()[2], 3.0);
    }

    #[test]
    fn test_all_missing_column_is_numeric() {
        let t = table("a,b\n1,\n2,NA\n");
        assert_eq!(t.numeric_column_names(), vec!["a", "b"]);
        let b = t.numeric_column("b").unwrap();
        assert!(b.values().iter().all(|v| v.is_nan()));

        let t = table("a,b\n,x\n,y\n");
        let col = select_numeric_column(&t, None).unwrap();
        assert_eq!(col.name(), "a");
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = table("a,b,c\n1,2,3\n4,5\n");
        let c = t.numeric_column("c").unwrap();
        assert_eq!(c.values()[0], 3.0);
        assert!(c.values()[1].is_nan());
    }

    #[test]
    fn test_duplicate_headers() {
        let t = table("v,v,v\n1,2,3\n");
        assert_eq!(t.headers(), &["v", "v.1", "v.2"]);
        assert_eq!(t.numeric_column("v.1").unwrap().values(), &[2.0]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let t = table(" qty , note \n 4 , x \n");
        assert_eq!(t.numeric_column("qty").unwrap().values(), &[4.0]);
    }

    #[test]
    fn test_select_first_numeric_by_default() {
        let t = table("name,qty,weight\nA,5,1.5\nB,3,2.5\n");
        let col = select_numeric_column(&t, None).unwrap();
        assert_eq!(col.name(), "qty");
        let col = select_numeric_column(&t, Some("weight")).unwrap();
        assert_eq!(col.values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_select_unknown_column() {
        let t = table("name,qty\nA,5\n");
        match select_numeric_column(&t, Some("name")) {
            Err(DataError::UnknownColumn { name, available }) => {
                assert_eq!(name, "name");
                assert_eq!(available, "qty");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_no_numeric_columns() {
        let t = table("name,city\nA,Oslo\nB,Rome\n");
        assert!(matches!(
            select_numeric_column(&t, None),
            Err(DataError::NoNumericColumns)
        ));
        let empty = table("qty,weight\n");
        assert!(matches!(
            select_numeric_column(&empty, None),
            Err(DataError::NoNumericColumns)
        ));
    }

    #[test]
    fn test_preview_table() {
        let t = table("id,qty\n1,5\n2,30\n3,8\n4,1\n5,9\n6,2\n");
        assert_eq!(t.head(5).len(), 5);
        let preview = t.preview_table(2);
        assert_eq!(preview, "id  qty\n 1    5\n 2   30");
    }
}
