/**
 * Encodings of the generated rows.
 */

use serde::Serialize;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One `Row: i; Text: s` line per row.
    Plain,
    /// A single JSON array of `{"row", "text"}` records.
    Json,
}

#[derive(Serialize)]
struct Row<'a> {
    row: usize,
    text: &'a str,
}

impl Format {
    pub fn render(&self, texts: &[String]) -> Result<String, serde_json::Error> {
        match self {
            Format::Plain => Ok(to_plain(texts)),
            Format::Json => to_json(texts),
        }
    }
}

fn to_plain(texts: &[String]) -> String {
    texts.iter()
        .enumerate()
        .map(|(i, text)| format!("Row: {}; Text: {}\n", i, text))
        .collect()
}

fn to_json(texts: &[String]) -> Result<String, serde_json::Error> {
    let rows: Vec<Row<'_>> = texts.iter()
        .enumerate()
        .map(|(row, text)| Row{ row, text })
        .collect();
    let mut out = serde_json::to_string(&rows)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod output_tests {
    use super::*;

    fn texts() -> Vec<String> {
        vec!["QAFL-571".into(), "rqk-483".into()]
    }

    #[test]
    fn plain() {
        assert_eq!(
            Format::Plain.render(&texts()).unwrap(),
            "Row: 0; Text: QAFL-571\nRow: 1; Text: rqk-483\n");
    }

    #[test]
    fn json() {
        assert_eq!(
            Format::Json.render(&texts()).unwrap(),
            "[{\"row\":0,\"text\":\"QAFL-571\"},{\"row\":1,\"text\":\"rqk-483\"}]\n");
    }

    #[test]
    fn json_escapes_text() {
        assert_eq!(
            Format::Json.render(&["a\"\n".to_string()]).unwrap(),
            "[{\"row\":0,\"text\":\"a\\\"\\n\"}]\n");
    }
}
