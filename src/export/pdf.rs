//! Single-page PDF text listing of a report.
//!
//! The document is written by hand: one page, the built-in Helvetica font,
//! one text line per metric. Nothing else is needed from a PDF library.

use crate::domain::model::CapacityReport;

pub const TITLE: &str = "Data Capacity Requirements";

const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;
const MARGIN_LEFT: u32 = 72;
const TITLE_Y: u32 = 720;
const LINE_HEIGHT: u32 = 18;

/// The text lines the PDF body carries, after the title.
pub fn report_lines(report: &CapacityReport) -> Vec<String> {
    report
        .result
        .metrics()
        .map(|(metric, value)| format!("{}: {:.2} GB", metric.label(), value))
        .collect()
}

pub fn to_pdf(report: &CapacityReport) -> Vec<u8> {
    let content = content_stream(report);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>",
            PAGE_WIDTH, PAGE_HEIGHT
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        format!(
            "<< /Title ({}) /Producer (capacity-estimator) /CreationDate (D:{}Z) >>",
            escape_text(TITLE),
            report.generated_at.format("%Y%m%d%H%M%S")
        ),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            objects.len(),
            xref_offset
        )
        .as_bytes(),
    );
    out
}

fn content_stream(report: &CapacityReport) -> String {
    let mut stream = format!(
        "BT\n/F1 16 Tf\n{} {} Td\n({}) Tj\nET\n",
        MARGIN_LEFT,
        TITLE_Y,
        escape_text(TITLE)
    );

    let mut y = TITLE_Y - 2 * LINE_HEIGHT;
    for line in report_lines(report) {
        stream.push_str(&format!(
            "BT\n/F1 11 Tf\n{} {} Td\n({}) Tj\nET\n",
            MARGIN_LEFT,
            y,
            escape_text(&line)
        ));
        y -= LINE_HEIGHT;
    }
    stream
}

/// Escapes a PDF literal string. Non-ASCII characters are replaced since the
/// content is written as single bytes.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}
