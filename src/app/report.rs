//! Text presentation of search results.

use crate::core::filter::FilteredOutcome;
use crate::domain::model::{SearchOutcome, WordRecord};

pub const NO_RESULTS: &str = "No results found. Try adjusting your filters.";

/// Summary line computed from the unfiltered counts.
pub fn summary(outcome: &SearchOutcome) -> String {
    let exact = outcome.exact_matches.len();
    let near = outcome.near_matches.len();

    if exact == 0 && near == 0 {
        NO_RESULTS.to_string()
    } else if near > 0 {
        format!("Showing {} perfect rhymes and {} near rhymes.", exact, near)
    } else {
        format!("Showing {} perfect rhymes.", exact)
    }
}

/// Word / Score / Syllables table. Near matches follow the exact ones and
/// are marked with `~`. Returns `None` when nothing survived filtering.
pub fn render_table(filtered: &FilteredOutcome<'_>) -> Option<String> {
    if filtered.is_empty() {
        return None;
    }

    let rows: Vec<[String; 3]> = filtered
        .exact_matches
        .iter()
        .map(|r| row(r, false))
        .chain(filtered.near_matches.iter().map(|r| row(r, true)))
        .collect();

    let header = ["Word".to_string(), "Score".to_string(), "Syllables".to_string()];
    let mut widths = header.clone().map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|cells| format_row(cells, &widths)));

    Some(lines.join("\n"))
}

fn row(record: &WordRecord, near: bool) -> [String; 3] {
    let word = if near {
        format!("~{}", record.word)
    } else {
        record.word.clone()
    };
    [
        word,
        record.score.map(format_score).unwrap_or_default(),
        record
            .num_syllables
            .map(|n| n.to_string())
            .unwrap_or_default(),
    ]
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        score.to_string()
    }
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    format!(
        "{:<w0$}  {:>w1$}  {:^w2$}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    )
    .trim_end()
    .to_string()
}
