// Tests for the spreadsheet importer
// Test cases:
// - Rows with blank, missing or "nan" cells are skipped, order kept
// - Cells are trimmed, duplicates are not removed at this stage
// - Fewer than two columns is malformed input
// - Missing input path is reported and nothing is written
// - CSV import end to end writes the dictionary JSON

use super::*;
use std::fs;
use tempfile::TempDir;

fn table(rows: &[(&str, &str)]) -> Table {
    Table {
        headers: vec!["Монгол".into(), "English".into()],
        rows: rows
            .iter()
            .map(|(m, e)| {
                vec![
                    (!m.is_empty()).then(|| m.to_string()),
                    (!e.is_empty()).then(|| e.to_string()),
                ]
            })
            .collect(),
    }
}

#[test]
fn skips_blank_and_nan_rows() {
    let t = table(&[
        ("ТОС", "ENGINE OIL"),
        ("", "ORPHAN"),
        ("ДУГУЙ", "nan"),
        ("  ", "SPACES"),
        ("nan", "NAN"),
        ("ГЭРЭЛ", "LAMP"),
    ]);

    let entries = table_to_entries(&t).unwrap();
    assert_eq!(
        entries,
        vec![
            DictionaryEntry::new("ТОС", "ENGINE OIL"),
            DictionaryEntry::new("ГЭРЭЛ", "LAMP"),
        ]
    );
}

#[test]
fn trims_cells_and_keeps_duplicates() {
    let t = table(&[(" ТОС ", " OIL "), ("ТОС", "OIL")]);
    let entries = table_to_entries(&t).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], DictionaryEntry::new("ТОС", "OIL"));
}

#[test]
fn nan_must_be_exact() {
    let t = table(&[("NaN", "banana")]);
    assert_eq!(table_to_entries(&t).unwrap().len(), 1);
}

#[test]
fn short_rows_are_skipped() {
    let t = Table {
        headers: vec!["a".into(), "b".into()],
        rows: vec![vec![Some("ТОС".into())], vec![Some("ДУГУЙ".into()), Some("TIRE".into())]],
    };
    assert_eq!(
        table_to_entries(&t).unwrap(),
        vec![DictionaryEntry::new("ДУГУЙ", "TIRE")]
    );
}

#[test]
fn one_column_is_malformed() {
    let t = Table {
        headers: vec!["only".into()],
        rows: vec![vec![Some("ТОС".into())]],
    };
    assert!(matches!(
        table_to_entries(&t),
        Err(DictionaryError::MalformedInput(_))
    ));
}

#[test]
fn missing_spreadsheet_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let paths = JobPaths::new(dir.path().join("parts.xlsx"), dir.path().join("dictionary.json"));

    let err = run(&paths, 3).unwrap_err();
    assert!(matches!(err, DictionaryError::MissingFile(_)));
    assert!(!paths.output.exists());
}

#[test]
fn single_column_csv_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("parts.csv");
    fs::write(&input, "Монгол\nТОС\n").unwrap();
    let paths = JobPaths::new(&input, dir.path().join("dictionary.json"));

    assert!(run(&paths, 3).is_err());
    assert!(!paths.output.exists());
}

#[test]
fn csv_import_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("parts.csv");
    fs::write(
        &input,
        "Монгол,English\nТОС 5W-30,ENGINE OIL 5W-30\n,EMPTY\nFR БАМПЕР,FR BUMPER\n",
    )
    .unwrap();
    let paths = JobPaths::new(&input, dir.path().join("dictionary.json"));

    let report = run(&paths, 3).unwrap();
    assert_eq!(report.columns, vec!["Монгол", "English"]);
    assert_eq!(report.rows, 3);
    assert_eq!(report.imported(), 2);

    let written = store::load(&paths.output).unwrap();
    assert_eq!(
        written,
        vec![
            DictionaryEntry::new("ТОС 5W-30", "ENGINE OIL 5W-30"),
            DictionaryEntry::new("FR БАМПЕР", "FR BUMPER"),
        ]
    );
}
