//! Truth table rendering.
//!
//! Every format emits one line (or `<tr>`) per row, header first, and one
//! cell per column. No other semantics are attached to the output.
//!
//! # Examples
//!
//! ```
//! use truth_table::render::TableFormat;
//! use truth_table::table::TruthTable;
//!
//! let table = TruthTable::new("a or b").unwrap();
//! let csv = table.render(TableFormat::Csv).unwrap();
//! assert_eq!(csv.lines().next(), Some("a,b,a or b"));
//! ```

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::table::TruthTable;

/// Output format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TableFormat {
    /// Aligned columns with a separator line under the header.
    #[default]
    Text,
    /// A `<table>` element with one `<tr>` per row and one `<td>` per cell.
    Html,
    /// Comma-separated values.
    Csv,
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(TableFormat::Text),
            "html" => Ok(TableFormat::Html),
            "csv" => Ok(TableFormat::Csv),
            _ => Err(format!("unknown table format: {}", s)),
        }
    }
}

/// Configuration options for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Cell text for `true` (default: "true")
    pub true_label: &'static str,
    /// Cell text for `false` (default: "false")
    pub false_label: &'static str,
    /// Column separator for [`TableFormat::Text`] (default: " | ")
    pub separator: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            true_label: "true",
            false_label: "false",
            separator: " | ",
        }
    }
}

impl RenderConfig {
    /// Spell booleans as `1` and `0`.
    pub fn numeric() -> Self {
        Self {
            true_label: "1",
            false_label: "0",
            ..Self::default()
        }
    }

    fn label(&self, value: bool) -> &'static str {
        if value {
            self.true_label
        } else {
            self.false_label
        }
    }
}

impl TruthTable {
    pub fn render(&self, format: TableFormat) -> Result<String, fmt::Error> {
        self.render_with_config(format, &RenderConfig::default())
    }

    pub fn render_with_config(&self, format: TableFormat, config: &RenderConfig) -> Result<String, fmt::Error> {
        let header = self.header();
        let body: Vec<Vec<&str>> = self
            .rows()
            .iter()
            .map(|row| row.iter().map(|&b| config.label(b)).collect())
            .collect();

        let mut out = String::new();
        match format {
            TableFormat::Text => write_text(&mut out, &header, &body, config.separator)?,
            TableFormat::Html => write_html(&mut out, &header, &body)?,
            TableFormat::Csv => write_csv(&mut out, &header, &body)?,
        }
        Ok(out)
    }
}

fn write_text(out: &mut String, header: &[&str], body: &[Vec<&str>], separator: &str) -> fmt::Result {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(header[col])
                .chain(body.iter().map(|row| row[col]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let write_row = |out: &mut String, cells: &[&str]| -> fmt::Result {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(separator);
        writeln!(out, "{}", line.trim_end())
    };

    write_row(out, header)?;
    let rule = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join(&separator.replace(' ', "-"));
    writeln!(out, "{}", rule)?;
    for row in body {
        write_row(out, row.as_slice())?;
    }
    Ok(())
}

fn write_html(out: &mut String, header: &[&str], body: &[Vec<&str>]) -> fmt::Result {
    writeln!(out, "<table>")?;
    for row in std::iter::once(header).chain(body.iter().map(Vec::as_slice)) {
        write!(out, "<tr>")?;
        for cell in row {
            write!(out, "<td>{}</td>", escape_html(cell))?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</table>")
}

fn write_csv(out: &mut String, header: &[&str], body: &[Vec<&str>]) -> fmt::Result {
    for row in std::iter::once(header).chain(body.iter().map(Vec::as_slice)) {
        let line = row.iter().map(|cell| escape_csv(cell)).collect::<Vec<_>>().join(",");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(TableFormat::Text)?)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_text() {
        let table = TruthTable::new("and a b").unwrap();
        let text = table.render(TableFormat::Text).unwrap();
        let expected = "\
a     | b     | and a b
------|-------|--------
false | false | false
false | true  | false
true  | false | false
true  | true  | true
";
        assert_eq!(text, expected);
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_text_numeric() {
        let table = TruthTable::new("not p").unwrap();
        let text = table.render_with_config(TableFormat::Text, &RenderConfig::numeric()).unwrap();
        assert_eq!(text, "p | not p\n--|------\n0 | 1\n1 | 0\n");
    }

    #[test]
    fn test_html() {
        let table = TruthTable::new("not p").unwrap();
        let html = table.render(TableFormat::Html).unwrap();
        assert_eq!(
            html,
            "<table>\n\
             <tr><td>p</td><td>not p</td></tr>\n\
             <tr><td>false</td><td>true</td></tr>\n\
             <tr><td>true</td><td>false</td></tr>\n\
             </table>\n"
        );
    }

    #[test]
    fn test_html_escapes_cells() {
        let table = TruthTable::new("a&b or c").unwrap();
        let html = table.render(TableFormat::Html).unwrap();
        assert!(html.contains("<td>a&amp;b</td>"));
        assert!(html.contains("<td>a&amp;b or c</td>"));
    }

    #[test]
    fn test_csv() {
        let table = TruthTable::new("x").unwrap();
        let csv = table.render(TableFormat::Csv).unwrap();
        assert_eq!(csv, "x,x\nfalse,false\ntrue,true\n");
    }

    #[test]
    fn test_csv_quotes() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("plain"), "plain");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<TableFormat>(), Ok(TableFormat::Text));
        assert_eq!("HTML".parse::<TableFormat>(), Ok(TableFormat::Html));
        assert_eq!("csv".parse::<TableFormat>(), Ok(TableFormat::Csv));
        assert!("xml".parse::<TableFormat>().is_err());
    }
}
