//! Result log display

use std::io::{self, Write};

use super::ResultLog;

/// Truncation and paging limits for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub max_entries: usize,
    pub title_width: usize,
    pub url_width: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_entries: 10,
            title_width: 60,
            url_width: 50,
        }
    }
}

fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Print the log as a numbered list of at most `limits.max_entries` rows.
pub fn render_log<W: Write>(
    log: &ResultLog,
    limits: &DisplayLimits,
    out: &mut W,
) -> io::Result<()> {
    let rule = "=".repeat(90);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "📊 RESULTADOS ENCONTRADOS")?;
    writeln!(out, "{}", rule)?;

    if log.is_empty() {
        writeln!(out, "Nenhum resultado encontrado")?;
        return Ok(());
    }

    writeln!(out, "Total: {} resultados", log.len())?;
    writeln!(out, "{}", "-".repeat(90))?;

    for (i, record) in log.iter().take(limits.max_entries).enumerate() {
        writeln!(
            out,
            "{:2}. [{}] {:<width$} | {}",
            i + 1,
            record.operator_used,
            truncate(&record.title, limits.title_width),
            truncate(&record.url, limits.url_width),
            width = limits.title_width,
        )?;
    }

    Ok(())
}
