use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use folio_model::{MonologueRecord, PlayDetail, PlaySummary};
use serde::Serialize;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Format {
    /// Aligned text columns
    Table,
    /// Pretty-printed JSON array
    Json,
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn print_json<T: Serialize>(rows: &[T]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Print rows as left-aligned columns with a 1-based row number first,
/// matching the numbering the `--download` flag expects.
fn print_table(headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    let index_width = rows.len().to_string().len().max(1);
    for row in &rows {
        for (w, value) in widths.iter_mut().zip(row) {
            *w = (*w).max(value.chars().count());
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write!(out, "{:>index_width$}", "")?;
    for (h, w) in headers.iter().zip(widths.iter().copied()) {
        write!(out, "  {h:<w$}")?;
    }
    writeln!(out)?;

    for (i, row) in rows.iter().enumerate() {
        write!(out, "{:>index_width$}", i + 1)?;
        for (value, w) in row.iter().zip(widths.iter().copied()) {
            write!(out, "  {value:<w$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn print_play_summary(rows: &[PlaySummary], format: Format) -> Result<()> {
    if let Format::Json = format {
        return print_json(rows);
    }
    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                cell(r.popularity),
                cell(r.genre.as_deref()),
                cell(r.num_character),
                cell(r.play_length),
                cell(r.play_complexity),
            ]
        })
        .collect();
    print_table(
        &["Title", "Popularity", "Genre", "Characters", "Length", "Complexity"],
        table,
    )
}

pub fn print_play_detail(rows: &[PlayDetail], format: Format) -> Result<()> {
    if let Format::Json = format {
        return print_json(rows);
    }
    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                cell(r.popularity),
                cell(r.genre.as_deref()),
                cell(r.num_male_character),
                cell(r.num_female_character),
                cell(r.num_unknown_character),
                cell(r.num_scene),
                cell(r.play_complexity),
                cell(r.play_length_hr.map(|h| format!("{h:.2}"))),
            ]
        })
        .collect();
    print_table(
        &[
            "Title", "Popularity", "Genre", "Male", "Female", "Unknown", "Scenes", "Complexity", "Hours",
        ],
        table,
    )
}

pub fn print_monologues(rows: &[MonologueRecord], scored: bool, format: Format) -> Result<()> {
    if let Format::Json = format {
        return print_json(rows);
    }
    let table = rows
        .iter()
        .map(|r| {
            let mut line = vec![
                r.play.clone(),
                r.name.clone(),
                cell(r.gender),
                r.degree.to_string(),
                r.line_num.to_string(),
            ];
            if scored {
                line.push(cell(r.complexity_score.map(|s| format!("{s:.2}"))));
                line.push(cell(r.complexity_category));
            }
            line.push(r.monologue_link.clone());
            line
        })
        .collect();

    let headers: &[&str] = if scored {
        &["Play", "Name", "Gender", "Degree", "Lines", "Score", "Category", "Link"]
    } else {
        &["Play", "Name", "Gender", "Degree", "Lines", "Link"]
    };
    print_table(headers, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::Tier;

    #[test]
    fn test_cell_blank_for_missing() {
        assert_eq!(cell::<u32>(None), "");
        assert_eq!(cell(Some(Tier::High)), "High");
        assert_eq!(cell(Some("Comedy")), "Comedy");
    }
}
