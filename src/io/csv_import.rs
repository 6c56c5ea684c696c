use std::path::Path;

use crate::engine::RawRow;
use crate::error::EngineError;

/// Column slots in a canonical row:
///   0 = name, 1 = project, 2 = type, 3 = start, 4 = finish,
///   5 = completion date, 6 = status
const REQUIRED: [(usize, &str); 5] = [
    (0, "name"),
    (1, "project"),
    (2, "type"),
    (3, "start"),
    (4, "finish"),
];

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to its column slot. Accepts the Chinese headers
/// of the source sheets alongside the English equivalents.
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "task" | "taskname" | "label" | "title" | "任務" | "任務名稱" => Some(0),

        "project" | "parentproject" | "group" | "專案" | "母專案" => Some(1),

        "type" | "kind" | "taskkind" | "tasktype" | "類型" => Some(2),

        "start" | "startdate" | "from" | "begin" | "開始日" => Some(3),

        "finish" | "finishdate" | "end" | "enddate" | "due" | "duedate" | "結束日" => Some(4),

        "completiondate" | "completed" | "completedon" | "delivered" | "遞交日" => Some(5),

        "status" | "state" | "stage" | "狀態" => Some(6),

        _ => None,
    }
}

/// Read raw schedule rows from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column
/// headers flexibly. Date/status cells come back untouched; the engine owns
/// all semantic parsing so that a bad cell degrades instead of dropping the
/// row. Returns `(rows, skipped_count)` where skipped counts structurally
/// unreadable records and nameless rows. Missing any of the mandatory
/// columns (name, project, type, start, finish) is fatal.
pub fn read_rows(path: &Path) -> Result<(Vec<RawRow>, usize), EngineError> {
    // Read the whole file to detect delimiter from the first line
    let content = std::fs::read_to_string(path)?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    // Parse headers and map them to column slots
    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let missing: Vec<&'static str> = REQUIRED
        .iter()
        .filter(|(slot, _)| !col_map.contains(&Some(*slot)))
        .map(|(_, label)| *label)
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::MissingColumns {
            missing,
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Skipping CSV row {}: {}", i + 2, e);
                skipped += 1;
                continue;
            }
        };

        let mut row = RawRow::default();
        for (col_idx, field) in record.iter().enumerate() {
            if col_idx < col_map.len() {
                let field = field.trim().to_string();
                match col_map[col_idx] {
                    Some(0) => row.name = field,
                    Some(1) => row.project = field,
                    Some(2) => row.kind = field,
                    Some(3) => row.start = field,
                    Some(4) => row.finish = field,
                    Some(5) => row.completion_date = field,
                    Some(6) => row.status = field,
                    _ => {}
                }
            }
        }

        if row.name.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    Ok((rows, skipped))
}
