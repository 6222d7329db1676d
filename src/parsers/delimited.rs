use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::{DictionaryError, Result};
use crate::services::encoding;

use super::{header_name, Table};

/// Reads a delimited export. Bytes are charset-detected first so legacy
/// Cyrillic code pages decode correctly.
pub fn read(path: &Path, delimiter: u8) -> Result<Table> {
    let bytes = fs::read(path).map_err(|e| DictionaryError::io(path, e))?;
    let decoded = encoding::decode(&bytes);

    info!(
        encoding = decoded.encoding,
        confidence = decoded.confidence,
        "decoded {}",
        path.display()
    );

    parse_str(&decoded.text, delimiter)
}

pub fn parse_str(text: &str, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| header_name(i, Some(h.to_string())))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|c| {
                    if c.is_empty() {
                        None
                    } else {
                        Some(c.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_not_data() {
        let t = parse_str("Монгол,English\nТОРМОС,BRAKE\n", b',').unwrap();
        assert_eq!(t.headers, vec!["Монгол", "English"]);
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.cell(0, 0), Some("ТОРМОС"));
        assert_eq!(t.cell(0, 1), Some("BRAKE"));
    }

    #[test]
    fn short_rows_and_empty_cells_are_missing() {
        let t = parse_str("a,b\nonly\nx,\n", b',').unwrap();
        assert_eq!(t.cell(0, 1), None);
        assert_eq!(t.cell(1, 1), None);
    }

    #[test]
    fn tab_delimited() {
        let t = parse_str("m\te\nДУГУЙ\tTIRE\n", b'\t').unwrap();
        assert_eq!(t.width(), 2);
        assert_eq!(t.cell(0, 1), Some("TIRE"));
    }

    #[test]
    fn windows_1251_file_decodes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dict.csv");
        let body = "Монгол,English\n\
                    Моторын тос,ENGINE OIL\n\
                    Тоормосны наклад,BRAKE PAD\n\
                    Урд гэрэл,HEAD LAMP\n\
                    Арын бампер,REAR BUMPER\n\
                    Хаалганы бариул,DOOR HANDLE\n";
        let (bytes, _, unmappable) = encoding_rs::WINDOWS_1251.encode(body);
        assert!(!unmappable);
        fs::write(&path, &bytes[..]).unwrap();

        let t = read(&path, b',').unwrap();
        assert_eq!(t.rows.len(), 5);
        assert_eq!(t.cell(0, 1), Some("ENGINE OIL"));
        assert_eq!(t.cell(2, 0), Some("Урд гэрэл"));
    }
}
