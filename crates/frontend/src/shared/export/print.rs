//! Standalone HTML page that opens the print dialog when loaded

use super::excel::escape_xml as escape_html;
use super::ExportTable;

const STYLE: &str = "body{font-family:Arial,sans-serif;font-size:12px;margin:16px}\
h1{font-size:16px}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #999;padding:4px 6px;text-align:left}\
th{background:#eee}";

pub fn render(table: &ExportTable) -> String {
    let title = escape_html(&table.title);
    let mut out = format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head>\n<body>\n<h1>{}</h1>\n<table>\n<thead><tr>",
        title, STYLE, title
    );
    for header in &table.headers {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n<script>window.onload = function () { window.print(); };</script>\n</body></html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_page() {
        let table = ExportTable {
            title: "Trades".into(),
            headers: vec!["Symbol".into(), "Side".into()],
            rows: vec![vec!["<b>EURUSD</b>".into(), "Buy".into()]],
        };
        let html = render(&table);
        assert!(html.contains("<title>Trades</title>"));
        assert!(html.contains("<th>Symbol</th><th>Side</th>"));
        assert!(html.contains("<td>&lt;b&gt;EURUSD&lt;/b&gt;</td>"));
        assert!(html.contains("window.print()"));
    }
}
