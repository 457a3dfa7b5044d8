use std::fs;
use std::path::Path;

use crate::domain::FixtureRecord;
use crate::error::Result;

const HEADER: [&str; 6] = ["Data", "Godzina", "Mecz", "1", "X", "2"];
const SEP: char = ',';

/// Write the fixture table as UTF-8 CSV with a byte-order mark, so
/// spreadsheet tools pick the encoding up. The header is always written,
/// even for zero records, and missing parent directories are created.
pub fn write_table(path: &Path, records: &[FixtureRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::from("\u{feff}");
    push_row(&mut out, &HEADER);
    for record in records {
        push_row(
            &mut out,
            &[
                record.date.as_str(),
                record.time.as_str(),
                record.matchup.as_str(),
                record.odds_home.as_str(),
                record.odds_draw.as_str(),
                record.odds_away.as_str(),
            ],
        );
    }

    fs::write(path, out)?;
    Ok(())
}

fn push_row(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(SEP);
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains(SEP) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}
