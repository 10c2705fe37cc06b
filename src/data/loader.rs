use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef};
use arrow::util::display::array_value_to_string;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Paper, PaperDataset};
use crate::error::LoadError;

/// Columns every source must provide. Any others are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "abstract", "authors", "journal", "publish_time"];

/// Cell contents treated as missing, in addition to blank cells.
const NA_VALUES: &[&str] = &["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and clean a paper metadata file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row containing at least [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "title": ..., "abstract": ..., ... }, ...]`
/// * `.parquet` – one column per field; non-string columns are rendered as text
///
/// Rows with a blank title or abstract are dropped. Unparseable
/// `publish_time` values are kept as unknown dates.
pub fn load_file(path: &Path) -> Result<PaperDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded {} papers from {} ({} rows dropped, {} journals, {} years)",
        dataset.len(),
        path.display(),
        dataset.dropped_rows,
        dataset.journals.len(),
        dataset.years.len(),
    );
    if dataset.parse_warnings > 0 {
        log::warn!(
            "{} publish_time values could not be parsed and were treated as unknown",
            dataset.parse_warnings
        );
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row cleaning shared by all formats
// ---------------------------------------------------------------------------

/// One source row before cleaning. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    authors: Option<String>,
    journal: Option<String>,
    publish_time: Option<String>,
}

#[derive(Default)]
struct Cleaner {
    papers: Vec<Paper>,
    dropped_rows: usize,
    parse_warnings: usize,
}

impl Cleaner {
    fn push(&mut self, row: usize, raw: RawRecord) {
        let (Some(title), Some(abstract_text)) = (present(raw.title), present(raw.abstract_text))
        else {
            self.dropped_rows += 1;
            return;
        };

        let publish_time = present(raw.publish_time).and_then(|text| {
            let parsed = parse_publish_time(&text);
            if parsed.is_none() {
                self.parse_warnings += 1;
                log::debug!("row {row}: unparseable publish_time {text:?}, date set to unknown");
            }
            parsed
        });

        self.papers.push(Paper {
            title,
            abstract_text,
            authors: present(raw.authors),
            journal: present(raw.journal),
            publish_time,
        });
    }

    fn finish(self) -> PaperDataset {
        let mut dataset = PaperDataset::from_papers(self.papers);
        dataset.dropped_rows = self.dropped_rows;
        dataset.parse_warnings = self.parse_warnings;
        dataset
    }
}

/// Trimmed value, or `None` for blank / NA cells.
fn present(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || NA_VALUES.contains(&trimmed) {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

fn check_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Result<(), LoadError> {
    let columns: BTreeSet<&str> = columns.into_iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !columns.contains(*col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema { missing })
    }
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Day-precision formats seen in CORD-19 style `publish_time` columns.
/// `%B` also accepts abbreviated month names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y", "%Y %B %d", "%B %d %Y", "%d %B %Y", "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a publication date. Month- and year-only values resolve to the
/// first day of the period. Bare integers of ten or more digits are Unix
/// timestamps: seconds, or milliseconds from thirteen digits up. Every
/// other form needs a four-digit year. Returns `None` for anything
/// unrecognised.
pub fn parse_publish_time(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    parse_calendar(s)
        .filter(|date| date.year() >= 1000)
        .or_else(|| parse_epoch(s))
}

fn parse_calendar(s: &str) -> Option<NaiveDate> {
    // chrono's `%Y` takes any number of digits, so "Mar 2020" matches
    // "%B %d %Y" as year 20. Skip short years and keep trying.
    for fmt in DATE_FORMATS {
        if let Some(date) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .filter(|d| d.year() >= 1000)
        {
            return Some(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // "2020-03", "2020 Mar", "Mar 2020", "March 2020"
    if let Some((head, tail)) = s.split_once(['-', '/', ' ']) {
        if let Some(year) = parse_year(head) {
            if let Ok(month) = tail.parse::<u32>() {
                return NaiveDate::from_ymd_opt(year, month, 1);
            }
            return month_start(year, tail);
        }
        if let Some(year) = parse_year(tail) {
            return month_start(year, head);
        }
    }

    parse_year(s).and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

fn month_start(year: i32, month_name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{year} {month_name} 1"), "%Y %B %d").ok()
}

/// pandas' `to_json` writes datetimes as epoch milliseconds.
fn parse_epoch(s: &str) -> Option<NaiveDate> {
    if s.len() < 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    let dt = if s.len() >= 13 {
        DateTime::from_timestamp_millis(value)?
    } else {
        DateTime::from_timestamp(value, 0)?
    };
    Some(dt.date_naive())
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one paper per row.
/// Short rows are tolerated; their trailing fields count as missing.
fn load_csv(path: &Path) -> Result<PaperDataset, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    check_columns(headers.iter())?;
    // Decode rows as bytes so bad UTF-8 in a column we ignore (url,
    // pdf_json_files, ...) does not cost the whole row.
    let byte_headers = reader.byte_headers().map_err(|e| csv_error(path, e))?.clone();

    let mut cleaner = Cleaner::default();
    for (row_no, result) in reader.byte_records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(csv_error(path, e)),
            Err(e) => {
                log::warn!("CSV row {row_no}: {e}; row dropped");
                cleaner.dropped_rows += 1;
                continue;
            }
        };
        match record.deserialize::<RawRecord>(Some(&byte_headers)) {
            Ok(raw) => cleaner.push(row_no, raw),
            Err(e) => {
                log::warn!("CSV row {row_no}: {e}; row dropped");
                cleaner.dropped_rows += 1;
            }
        }
    }

    Ok(cleaner.finish())
}

fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    if !err.is_io_error() {
        return LoadError::malformed("CSV", err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => LoadError::unavailable(path, io),
        other => LoadError::malformed("CSV", format!("{other:?}")),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as written by `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "title": "…",
///     "abstract": "…",
///     "authors": "Doe, J.; Roe, R.",
///     "journal": "Virology",
///     "publish_time": "2020-03-15"
///   },
///   ...
/// ]
/// ```
///
/// `authors` may also be an array of names. `publish_time` may be a
/// string or an integer epoch timestamp, which is what pandas emits for
/// datetime columns by default.
fn load_json(path: &Path) -> Result<PaperDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::unavailable(path, e))?;
    let root: JsonValue =
        serde_json::from_str(&text).map_err(|e| LoadError::malformed("JSON", e))?;

    let records = root
        .as_array()
        .ok_or_else(|| LoadError::malformed("JSON", "expected a top-level array of records"))?;

    if !records.is_empty() {
        let keys = records
            .iter()
            .filter_map(JsonValue::as_object)
            .flat_map(|obj| obj.keys().map(String::as_str));
        check_columns(keys)?;
    }

    let mut cleaner = Cleaner::default();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::malformed("JSON", format!("row {i} is not an object")))?;

        cleaner.push(
            i,
            RawRecord {
                title: json_to_text(obj.get("title")),
                abstract_text: json_to_text(obj.get("abstract")),
                authors: json_to_text(obj.get("authors")),
                journal: json_to_text(obj.get("journal")),
                publish_time: json_to_text(obj.get("publish_time")),
            },
        );
    }

    Ok(cleaner.finish())
}

fn json_to_text(val: Option<&JsonValue>) -> Option<String> {
    match val? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| json_to_text(Some(item)))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per required field.
///
/// String columns are read as-is; dates, timestamps, and numbers are
/// rendered through Arrow's display formatting and parsed like CSV text.
/// Works with files written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<PaperDataset, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| LoadError::malformed("Parquet", e))?;
    check_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder
        .build()
        .map_err(|e| LoadError::malformed("Parquet", e))?;

    let mut cleaner = Cleaner::default();
    let mut row_no = 0;

    for batch_result in reader {
        let batch = batch_result.map_err(|e| LoadError::malformed("Parquet", e))?;
        let schema = batch.schema();
        let column = |name: &str| -> Result<ArrayRef, LoadError> {
            let idx = schema.index_of(name).map_err(|_| LoadError::Schema {
                missing: vec![name.to_string()],
            })?;
            Ok(batch.column(idx).clone())
        };

        let title = column("title")?;
        let abstract_col = column("abstract")?;
        let authors = column("authors")?;
        let journal = column("journal")?;
        let publish_time = column("publish_time")?;

        for row in 0..batch.num_rows() {
            cleaner.push(
                row_no,
                RawRecord {
                    title: arrow_to_text(&title, row),
                    abstract_text: arrow_to_text(&abstract_col, row),
                    authors: arrow_to_text(&authors, row),
                    journal: arrow_to_text(&journal, row),
                    publish_time: arrow_to_text(&publish_time, row),
                },
            );
            row_no += 1;
        }
    }

    Ok(cleaner.finish())
}

fn arrow_to_text(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    array_value_to_string(col.as_ref(), row).ok()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use arrow::array::StringArray;
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    fn write_temp_file(name: &str, content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const CSV: &str = "\
cord_uid,title,abstract,authors,journal,publish_time,url
a1,First paper,Short abstract here,\"Doe, J.\",Virology,2020-03-15,http://x
a2,,Abstract without title,,Virology,2020-04-01,
a3,No abstract,   ,,Lancet,2021-01-01,
a4,Undated paper,Some words,,Lancet,not-a-date,
a5,  Padded title  ,Another abstract,,,2021,
a6,NaN title,nan,,BMJ,2020,
";

    #[test]
    fn csv_drops_rows_without_title_or_abstract() {
        let (_dir, path) = write_temp_file("metadata.csv", CSV);
        let ds = load_file(&path).unwrap();

        let titles: Vec<&str> = ds.papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First paper", "Undated paper", "Padded title"]);
        assert_eq!(ds.dropped_rows, 3);
        assert!(ds
            .papers
            .iter()
            .all(|p| !p.title.trim().is_empty() && !p.abstract_text.trim().is_empty()));
    }

    #[test]
    fn csv_keeps_unparseable_dates_as_unknown() {
        let (_dir, path) = write_temp_file("metadata.csv", CSV);
        let ds = load_file(&path).unwrap();

        let undated = &ds.papers[1];
        assert_eq!(undated.title, "Undated paper");
        assert_eq!(undated.publish_time, None);
        assert_eq!(ds.parse_warnings, 1);
        assert_eq!(ds.papers[0].publish_time, Some(ymd(2020, 3, 15)));
        assert_eq!(ds.papers[2].publish_time, Some(ymd(2021, 1, 1)));
    }

    #[test]
    fn csv_blank_optional_fields_become_none() {
        let (_dir, path) = write_temp_file("metadata.csv", CSV);
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.papers[0].authors.as_deref(), Some("Doe, J."));
        assert_eq!(ds.papers[2].journal, None);
        assert_eq!(ds.papers[2].authors, None);
        assert_eq!(
            ds.journals.iter().cloned().collect::<Vec<_>>(),
            vec!["Lancet".to_string(), "Virology".to_string()]
        );
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![2020, 2021]);
    }

    #[test]
    fn csv_missing_required_column_is_schema_error() {
        let (_dir, path) = write_temp_file("metadata.csv", "title,authors,publish_time\nA,B,2020\n");
        match load_file(&path) {
            Err(LoadError::Schema { missing }) => {
                assert_eq!(missing, vec!["abstract".to_string(), "journal".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn csv_header_only_yields_empty_dataset() {
        let (_dir, path) =
            write_temp_file("metadata.csv", "title,abstract,authors,journal,publish_time\n");
        let ds = load_file(&path).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn csv_tolerates_short_rows_and_padded_headers() {
        let (_dir, path) = write_temp_file(
            "metadata.csv",
            " title , abstract ,authors,journal,publish_time\nShort,Only two fields\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.papers[0].journal, None);
        assert_eq!(ds.papers[0].publish_time, None);
        assert_eq!(ds.parse_warnings, 0);
    }

    #[test]
    fn csv_invalid_utf8_in_ignored_column_keeps_row() {
        let mut bytes = b"title,abstract,authors,journal,publish_time,url\nT,A,,J,2020,".to_vec();
        bytes.extend_from_slice(b"\xff\xfe\n");
        let (_dir, path) = write_temp_file("metadata.csv", bytes);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped_rows, 0);
        assert_eq!(ds.papers[0].journal.as_deref(), Some("J"));
    }

    #[test]
    fn csv_invalid_utf8_in_title_drops_row() {
        let mut bytes = b"title,abstract,authors,journal,publish_time\n".to_vec();
        bytes.extend_from_slice(b"\xff\xfe,A,,J,2020\nGood,B,,J,2021\n");
        let (_dir, path) = write_temp_file("metadata.csv", bytes);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.papers[0].title, "Good");
        assert_eq!(ds.dropped_rows, 1);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }), "{err:?}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let (_dir, path) = write_temp_file("metadata.xlsx", "");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn json_records_are_cleaned_like_csv() {
        let json = r#"[
            {"title": "J1", "abstract": "a b c", "authors": ["Doe", "Roe"], "journal": "Cell", "publish_time": 2019},
            {"title": "J2", "abstract": null, "authors": null, "journal": "Cell", "publish_time": "2020-01-02"},
            {"title": "J3", "abstract": "x", "authors": "Solo", "journal": null, "publish_time": "garbage"}
        ]"#;
        let (_dir, path) = write_temp_file("metadata.json", json);
        let ds = load_file(&path).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dropped_rows, 1);
        assert_eq!(ds.parse_warnings, 1);
        assert_eq!(ds.papers[0].authors.as_deref(), Some("Doe; Roe"));
        assert_eq!(ds.papers[0].publish_time, Some(ymd(2019, 1, 1)));
        assert_eq!(ds.papers[1].journal, None);
    }

    #[test]
    fn json_without_required_keys_is_schema_error() {
        let (_dir, path) = write_temp_file("metadata.json", r#"[{"title": "x"}]"#);
        assert!(matches!(load_file(&path), Err(LoadError::Schema { .. })));
    }

    #[test]
    fn json_must_be_an_array() {
        let (_dir, path) = write_temp_file("metadata.json", r#"{"title": "x"}"#);
        assert!(matches!(load_file(&path), Err(LoadError::Malformed { format: "JSON", .. })));
    }

    #[test]
    fn parquet_string_columns_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.parquet");

        let schema = Arc::new(Schema::new(
            REQUIRED_COLUMNS
                .iter()
                .map(|name| Field::new(*name, DataType::Utf8, true))
                .collect::<Vec<_>>(),
        ));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec![Some("P1"), Some("P2")])),
                Arc::new(StringArray::from(vec![Some("one two"), None])),
                Arc::new(StringArray::from(vec![Some("Doe"), None])),
                Arc::new(StringArray::from(vec![Some("Nature"), Some("Nature")])),
                Arc::new(StringArray::from(vec![Some("2020-05-06"), None])),
            ],
        )
        .unwrap();
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.dropped_rows, 1);
        assert_eq!(ds.papers[0].title, "P1");
        assert_eq!(ds.papers[0].publish_time, Some(ymd(2020, 5, 6)));
    }

    #[test]
    fn parses_common_publish_time_formats() {
        assert_eq!(parse_publish_time("2020-03-15"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("2020/03/15"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("03/15/2020"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("2020 Mar 15"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("Mar 15 2020"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("15 March 2020"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("2020-03-15T10:20:30"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("2020-03-15T10:20:30+02:00"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("2020-03"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_publish_time("2020 Mar"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_publish_time("Mar 2020"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_publish_time("March 2020"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_publish_time("2020-3-5"), Some(ymd(2020, 3, 5)));
        assert_eq!(parse_publish_time(" 2020 "), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn rejects_unparseable_publish_time() {
        assert_eq!(parse_publish_time("not-a-date"), None);
        assert_eq!(parse_publish_time("2020-13"), None);
        assert_eq!(parse_publish_time("2020-02-30"), None);
        assert_eq!(parse_publish_time("20"), None);
        assert_eq!(parse_publish_time(""), None);
    }

    #[test]
    fn two_digit_years_are_not_guessed() {
        assert_eq!(parse_publish_time("3/5/20"), None);
        assert_eq!(parse_publish_time("5 March 20"), None);
        assert_eq!(parse_publish_time("Mar 15 20"), None);
        assert_eq!(parse_publish_time("Mar 20"), None);
        assert_eq!(parse_publish_time("0020-03-20"), None);
    }

    #[test]
    fn epoch_timestamps_become_utc_dates() {
        assert_eq!(parse_publish_time("1584230400000"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("1584230400"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_publish_time("158423040"), None);
    }

    #[test]
    fn json_epoch_millis_publish_time_is_a_date() {
        let json = r#"[
            {"title": "T", "abstract": "a", "authors": null, "journal": "Cell", "publish_time": 1584230400000}
        ]"#;
        let (_dir, path) = write_temp_file("metadata.json", json);
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.papers[0].publish_time, Some(ymd(2020, 3, 15)));
        assert_eq!(ds.parse_warnings, 0);
    }
}
