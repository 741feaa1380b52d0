use super::ExportTable;

/// Comma separated, UTF-8 with BOM so spreadsheet apps detect the encoding
pub fn render(table: &ExportTable) -> String {
    let mut out = String::from('\u{FEFF}');
    push_line(&mut out, &table.headers);
    for row in &table.rows {
        push_line(&mut out, row);
    }
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    let line: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<&str>>) -> ExportTable {
        ExportTable {
            title: "Trades".into(),
            headers: vec!["Symbol".into(), "Note".into()],
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_one_line_per_row_and_one_cell_per_column() {
        let csv = render(&table(vec![vec!["EURUSD", "a"], vec!["GBPUSD", ""], vec!["XAUUSD", "c"]]));
        let body = csv.trim_start_matches('\u{FEFF}');
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Symbol,Note");
        assert!(lines.iter().all(|l| l.split(',').count() == 2));
        assert_eq!(lines[2], "GBPUSD,");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_cell("plain"), "plain");
        assert_eq!(escape_cell("1,5"), "\"1,5\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_starts_with_bom() {
        assert!(render(&table(vec![])).starts_with('\u{FEFF}'));
    }
}
