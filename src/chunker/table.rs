use crate::element::{Element, ElementId, ElementType};
use scraper::{ElementRef, Html};
use tracing::warn;

const TABLE_OPEN: &str = "<table>";
const TABLE_CLOSE: &str = "</table>";
const THEAD_OPEN: &str = "<thead>";
const THEAD_CLOSE: &str = "</thead>";
const TBODY_OPEN: &str = "<tbody>";
const TBODY_CLOSE: &str = "</tbody>";

/// One serialized `<tr>` and its cell text
#[derive(Debug, Clone)]
struct Row {
    html: String,
    text: String,
}

impl Row {
    fn html_len(&self) -> usize {
        self.html.chars().count()
    }
}

#[derive(Debug)]
struct ParsedTable {
    header: Vec<Row>,
    body: Vec<Row>,
}

/// Split an oversized table into row-aligned fragments.
///
/// Fragments are tables themselves: each fragment's `text_as_html` is a
/// complete `<table>` holding a contiguous run of rows, with the header rows
/// repeated when they take no more than half the budget. A row is never
/// split; a row that alone exceeds `max_characters` becomes an oversized
/// fragment. A table made only of header rows is split like a body. Without
/// usable HTML the plain text is split on line breaks.
pub fn split_table(table: &Element, max_characters: usize) -> Vec<Element> {
    let parsed = table
        .metadata
        .text_as_html
        .as_deref()
        .and_then(parse_table)
        .filter(|parsed| !parsed.body.is_empty());

    let fragments = match parsed {
        Some(parsed) => split_rows(parsed, max_characters),
        None => {
            warn!(
                table = %table.id(),
                "Table has no usable HTML, splitting plain text by lines"
            );
            split_lines(&table.text, max_characters)
        }
    };

    fragments
        .into_iter()
        .enumerate()
        .map(|(n, (text, html))| make_fragment(table, n, text, html))
        .collect()
}

fn make_fragment(table: &Element, n: usize, text: String, html: Option<String>) -> Element {
    let id = ElementId::new(format!("{}-{}", table.id(), n));
    let mut metadata = table.metadata.clone();
    metadata.text_as_html = html;
    metadata.is_continuation = Some(n > 0);
    Element::with_id(id, ElementType::Table, text).with_metadata(metadata)
}

/// Pack rows greedily into fragments whose HTML fits the budget
fn split_rows(parsed: ParsedTable, max_characters: usize) -> Vec<(String, Option<String>)> {
    let ParsedTable { header, body } = parsed;

    let bare_overhead = TABLE_OPEN.len() + TBODY_OPEN.len() + TBODY_CLOSE.len() + TABLE_CLOSE.len();
    let header_len: usize = header.iter().map(Row::html_len).sum();
    let header_overhead = THEAD_OPEN.len() + THEAD_CLOSE.len() + header_len;

    let repeat_header = !header.is_empty() && bare_overhead + header_overhead <= max_characters / 2;
    let (repeated, rows, overhead): (&[Row], Vec<Row>, usize) = if repeat_header {
        (header.as_slice(), body, bare_overhead + header_overhead)
    } else {
        // Header stays at the top of the first fragment as ordinary rows
        (&[][..], header.iter().cloned().chain(body).collect(), bare_overhead)
    };

    let mut fragments = Vec::new();
    let mut current: Vec<&Row> = Vec::new();
    let mut current_len = 0;

    for row in &rows {
        let row_len = row.html_len();

        // A row that cannot fit even alone goes out bare
        if overhead + row_len > max_characters {
            if !current.is_empty() {
                fragments.push(render_fragment(repeated, &current));
                current.clear();
                current_len = 0;
            }
            fragments.push(render_fragment(&[], &[row]));
            continue;
        }

        if overhead + current_len + row_len > max_characters && !current.is_empty() {
            fragments.push(render_fragment(repeated, &current));
            current.clear();
            current_len = 0;
        }

        current_len += row_len;
        current.push(row);
    }

    if !current.is_empty() {
        fragments.push(render_fragment(repeated, &current));
    }

    fragments
}

fn render_fragment(header: &[Row], rows: &[&Row]) -> (String, Option<String>) {
    let mut html = String::from(TABLE_OPEN);
    if !header.is_empty() {
        html.push_str(THEAD_OPEN);
        header.iter().for_each(|row| html.push_str(&row.html));
        html.push_str(THEAD_CLOSE);
    }
    html.push_str(TBODY_OPEN);
    rows.iter().for_each(|row| html.push_str(&row.html));
    html.push_str(TBODY_CLOSE);
    html.push_str(TABLE_CLOSE);

    let text = header
        .iter()
        .chain(rows.iter().copied())
        .map(|row| row.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (text, Some(html))
}

/// Fallback for tables without HTML: newline-delimited rows
fn split_lines(text: &str, max_characters: usize) -> Vec<(String, Option<String>)> {
    let mut fragments = Vec::new();
    let mut current_lines: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let line_len = line.chars().count();
        let joined_len = if current_lines.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };

        if joined_len > max_characters && !current_lines.is_empty() {
            fragments.push((current_lines.join("\n"), None));
            current_lines.clear();
            current_len = line_len;
        } else {
            current_len = joined_len;
        }
        current_lines.push(line);
    }

    if !current_lines.is_empty() {
        fragments.push((current_lines.join("\n"), None));
    }

    // Nothing but whitespace: keep the table whole
    if fragments.is_empty() {
        fragments.push((text.to_string(), None));
    }

    fragments
}

/// Read the first `<table>` in `html` into header and body rows
fn parse_table(html: &str) -> Option<ParsedTable> {
    let document = Html::parse_fragment(html);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "table")?;

    let mut header = Vec::new();
    let mut body = Vec::new();

    // Direct rows only, so nested tables stay inside their cell
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => header.extend(direct_rows(child)),
            "tbody" | "tfoot" => body.extend(direct_rows(child)),
            "tr" => body.push(child),
            _ => {}
        }
    }

    // A leading row made only of <th> cells counts as the header
    if header.is_empty() {
        if let Some(first) = body.first().copied() {
            let mut first_cells = cells(first).peekable();
            if first_cells.peek().is_some() && first_cells.all(|cell| cell.value().name() == "th") {
                header.push(body.remove(0));
            }
        }
    }

    // Header-only tables still split along their rows
    if body.is_empty() {
        std::mem::swap(&mut header, &mut body);
    }

    Some(ParsedTable {
        header: header.into_iter().map(to_row).collect(),
        body: body.into_iter().map(to_row).collect(),
    })
}

fn direct_rows(section: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "tr")
}

fn cells(row: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|element| matches!(element.value().name(), "td" | "th"))
}

fn to_row(row: ElementRef<'_>) -> Row {
    let text = cells(row)
        .map(|cell| {
            cell.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Row {
        html: row.html(),
        text,
    }
}
