//! Pipe-delimited table extraction.

use crate::lines::TABLE_DELIMITER;
use crate::types::Table;

/// Collects pipe-delimited rows from a block of content lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExtractor;

impl TableExtractor {
    /// Create a new table extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a table, or `None` if fewer than two rows were found.
    ///
    /// Lines without a delimiter, rows with no text and dash-only separator
    /// rows are ignored.
    /// Empty cells produced by leading or trailing pipes are dropped;
    /// interior empty cells are kept.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> Option<Table> {
        let rows: Vec<Vec<String>> = lines
            .iter()
            .map(|line| AsRef::<str>::as_ref(line))
            .filter(|line| line.contains(TABLE_DELIMITER))
            .map(split_row)
            .filter(|cells| cells.iter().any(|c| !c.is_empty()) && !is_separator_row(cells))
            .collect();

        if rows.len() < 2 {
            log::debug!("Not a table: {} row(s)", rows.len());
            return None;
        }

        Some(Table::new(rows))
    }
}

/// Split a row on the delimiter, trimming cells and dropping the empty
/// edge cells left by leading and trailing pipes.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line
        .split(TABLE_DELIMITER)
        .map(|cell| cell.trim().to_string())
        .collect();

    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }

    cells
}

/// A row whose cells, taken together, contain only dashes.
fn is_separator_row(cells: &[String]) -> bool {
    let joined: String = cells.concat();
    !joined.is_empty() && joined.chars().all(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> Option<Table> {
        TableExtractor::new().extract(lines)
    }

    #[test]
    fn test_basic_table() {
        let table = extract(&[
            "| Name | Score |",
            "|------|-------|",
            "| Ada  | 10    |",
            "| Bob  | 7     |",
        ])
        .unwrap();

        assert_eq!(table.header().unwrap(), &["Name", "Score"]);
        assert_eq!(table.rows[1], vec!["Ada", "10"]);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_header_only_is_not_a_table() {
        assert!(extract(&["| Name | Score |", "|---|---|"]).is_none());
    }

    #[test]
    fn test_no_pipes_is_not_a_table() {
        assert!(extract(&["- a bullet", "some prose"]).is_none());
        assert!(extract(&[]).is_none());
    }

    #[test]
    fn test_rows_without_edge_pipes() {
        let table = extract(&["a | b", "c | d"]).unwrap();
        assert_eq!(table.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_interior_empty_cells_kept() {
        let table = extract(&["| a | b | c |", "| 1 |   | 3 |"]).unwrap();
        assert_eq!(table.rows[1], vec!["1", "", "3"]);
    }

    #[test]
    fn test_short_trailing_rows_allowed() {
        let table = extract(&["| a | b | c |", "| 1 |"]).unwrap();
        assert_eq!(table.rows[1], vec!["1"]);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_non_table_lines_ignored() {
        let table = extract(&["Intro text", "| h1 | h2 |", "- bullet", "| x | y |"]).unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_lone_pipe_lines_ignored() {
        assert!(extract(&["|", "| |", "| only |"]).is_none());
    }

    #[test]
    fn test_never_fewer_than_two_rows() {
        let inputs: [&[&str]; 4] = [
            &[],
            &["| a |"],
            &["|---|", "| a |"],
            &["| a |", "| b |"],
        ];
        for lines in inputs {
            if let Some(table) = extract(lines) {
                assert!(table.row_count() >= 2);
            }
        }
    }
}
