//! Minimal PDF 1.4 writer: landscape A4 pages of monospaced-width cells in the
//! built-in Helvetica font, so no font data has to be embedded.
//!
//! Text is limited to printable ASCII; anything else is written as `?`. This
//! keeps every byte offset in the xref table equal to the string offset.

use super::ExportTable;

const PAGE_WIDTH: f32 = 842.0;
const PAGE_HEIGHT: f32 = 595.0;
const MARGIN: f32 = 36.0;
const FONT_SIZE: f32 = 8.0;
const TITLE_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 12.0;
/// Average Helvetica glyph width relative to the font size
const CHAR_WIDTH: f32 = 0.5;

fn rows_per_page() -> usize {
    let usable = PAGE_HEIGHT - 2.0 * MARGIN - TITLE_SIZE - 2.0 * LINE_HEIGHT;
    (usable / LINE_HEIGHT).floor().max(1.0) as usize
}

pub fn render(table: &ExportTable) -> String {
    let columns = table.headers.len().max(1);
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / columns as f32;
    let max_chars = ((column_width - 4.0) / (FONT_SIZE * CHAR_WIDTH)).floor().max(1.0) as usize;

    let chunks: Vec<&[Vec<String>]> = if table.rows.is_empty() {
        vec![&table.rows[..]]
    } else {
        table.rows.chunks(rows_per_page()).collect()
    };
    let page_count = chunks.len();

    let contents: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(index, rows)| {
            page_content(table, rows, column_width, max_chars, index + 1, page_count)
        })
        .collect();

    // 1 catalog, 2 page tree, 3 font, then a page and its content stream per page
    let page_ids: Vec<usize> = (0..page_count).map(|i| 4 + i * 2).collect();
    let mut objects: Vec<String> = Vec::with_capacity(3 + page_count * 2);
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        page_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" "),
        page_count
    ));
    objects.push(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    );
    for (page_id, content) in page_ids.iter().zip(&contents) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    out
}

fn page_content(
    table: &ExportTable,
    rows: &[Vec<String>],
    column_width: f32,
    max_chars: usize,
    page: usize,
    page_count: usize,
) -> String {
    let mut stream = String::from("BT\n");
    let mut y = PAGE_HEIGHT - MARGIN - TITLE_SIZE;

    stream.push_str(&format!("/F1 {} Tf\n", TITLE_SIZE));
    let title = format!("{} ({}/{})", table.title, page, page_count);
    push_text(&mut stream, MARGIN, y, &title);
    y -= 2.0 * LINE_HEIGHT;

    stream.push_str(&format!("/F1 {} Tf\n", FONT_SIZE));
    push_line(&mut stream, &table.headers, y, column_width, max_chars);
    y -= LINE_HEIGHT;

    for row in rows {
        push_line(&mut stream, row, y, column_width, max_chars);
        y -= LINE_HEIGHT;
    }
    stream.push_str("ET");
    stream
}

fn push_line(stream: &mut String, cells: &[String], y: f32, column_width: f32, max_chars: usize) {
    for (index, cell) in cells.iter().enumerate() {
        let x = MARGIN + index as f32 * column_width;
        push_text(stream, x, y, &truncate(cell, max_chars));
    }
}

fn push_text(stream: &mut String, x: f32, y: f32, text: &str) {
    stream.push_str(&format!("1 0 0 1 {:.1} {:.1} Tm ({}) Tj\n", x, y, escape_text(text)));
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    format!("{}..", kept)
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> ExportTable {
        ExportTable {
            title: "Brokers".into(),
            headers: vec!["Code".into(), "Name".into()],
            rows: (0..rows)
                .map(|i| vec![format!("B{}", i), format!("Broker ({})", i)])
                .collect(),
        }
    }

    #[test]
    fn test_document_structure() {
        let pdf = render(&table(3));
        assert!(pdf.starts_with("%PDF-1.4\n"));
        assert!(pdf.ends_with("%%EOF\n"));
        assert!(pdf.contains("/Count 1"));
        assert!(pdf.contains("(Broker \\(2\\)) Tj"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = render(&table(5));
        let xref_start: usize = pdf
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(pdf[xref_start..].starts_with("xref\n"));

        let entries: Vec<usize> = pdf[xref_start..]
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with(" n "))
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 5);
        for (index, offset) in entries.iter().enumerate() {
            assert!(pdf[*offset..].starts_with(&format!("{} 0 obj", index + 1)));
        }
    }

    #[test]
    fn test_paginates_long_tables() {
        let per_page = rows_per_page();
        let pdf = render(&table(per_page * 2 + 1));
        assert!(pdf.contains("/Count 3"));
        assert!(pdf.contains("(Brokers \\(3/3\\)) Tj"));
    }

    #[test]
    fn test_text_is_escaped_and_truncated() {
        assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape_text("Zürich"), "Z?rich");
        assert_eq!(truncate("abcdefgh", 5), "abc..");
        assert_eq!(truncate("abc", 5), "abc");
    }
}
