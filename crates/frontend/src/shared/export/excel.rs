//! SpreadsheetML 2003 workbook, opened natively by Excel and LibreOffice

use super::ExportTable;

pub fn render(table: &ExportTable) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<?mso-application progid=\"Excel.Sheet\"?>\n");
    out.push_str(
        "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
         xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n",
    );
    out.push_str("<Styles><Style ss:ID=\"header\"><Font ss:Bold=\"1\"/></Style></Styles>\n");
    out.push_str(&format!(
        "<Worksheet ss:Name=\"{}\">\n<Table>\n",
        escape_xml(&sheet_name(&table.title))
    ));

    push_row(&mut out, &table.headers, Some("header"));
    for row in &table.rows {
        push_row(&mut out, row, None);
    }

    out.push_str("</Table>\n</Worksheet>\n</Workbook>\n");
    out
}

fn push_row(out: &mut String, cells: &[String], style: Option<&str>) {
    out.push_str("<Row>");
    for cell in cells {
        match style {
            Some(style) => out.push_str(&format!("<Cell ss:StyleID=\"{}\">", style)),
            None => out.push_str("<Cell>"),
        }
        out.push_str(&format!(
            "<Data ss:Type=\"String\">{}</Data></Cell>",
            escape_xml(cell)
        ));
    }
    out.push_str("</Row>\n");
}

/// Worksheet names are limited to 31 characters and a few forbidden ones
fn sheet_name(title: &str) -> String {
    let name: String = title
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '?' | '*' | '[' | ']' | ':'))
        .take(31)
        .collect();
    if name.is_empty() {
        "Sheet1".to_string()
    } else {
        name
    }
}

pub(super) fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
