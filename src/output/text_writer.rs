//! Human-readable text summary.

use std::fmt::Write as _;
use std::fs;

use crate::error::Result;
use crate::report::{AnalysisReport, Histogram, LeaderboardEntry};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Writes the text summary to a file.
pub fn write_text(report: &AnalysisReport, output_path: &str) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}

/// Renders the report as a plain-text summary.
///
/// Sections with nothing to show are left out, except the header.
pub fn to_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = render(&mut out, report);
    out
}

fn render(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "📊 Chat summary")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "💬 Messages:  {}", report.total_messages)?;
    writeln!(out, "👥 Authors:   {}", report.user_msg_count.len())?;

    if report.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "🏆 Leaders:")?;
    leader(out, "Most active", &report.most_active)?;
    leader(out, "Most apologies", &report.most_apology)?;
    leader(out, "Most affection", &report.most_love)?;
    if let Some(user) = &report.slowest.user {
        writeln!(
            out,
            "   {:<16}{} (avg {})",
            "Slowest reply",
            user,
            format_duration(report.slowest.avg_seconds)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "👤 Per author:")?;
    for author in report.authors() {
        let count = |table: &Histogram| table.get(author).copied().unwrap_or(0);
        write!(
            out,
            "   {author}: {} messages, {} apologies, {} affectionate, {} starts",
            count(&report.user_msg_count),
            count(&report.user_apology_count),
            count(&report.user_love_count),
            count(&report.conversation_starters),
        )?;
        match report.avg_response.get(author) {
            Some(avg) => writeln!(out, ", avg reply {}", format_duration(*avg))?,
            None => writeln!(out)?,
        }
    }

    section(out, "🕐 Busiest hours:", &busiest(&report.hourly_activity, 5))?;
    section(out, "📅 Weekdays:", &nonzero(&report.weekday_activity))?;
    section(out, "🗓️  Months:", &nonzero(&report.month_activity))?;
    section(out, "🔥 Top days:", report.top_active_days.entries())?;
    section(out, "🔤 Common words:", report.common_words.entries())?;
    section(out, "😀 Emoji:", report.emoji_counts.entries())?;

    Ok(())
}

fn leader(out: &mut String, title: &str, entry: &LeaderboardEntry) -> std::fmt::Result {
    match &entry.user {
        Some(user) => writeln!(out, "   {title:<16}{user} ({})", entry.count),
        None => writeln!(out, "   {title:<16}-"),
    }
}

fn section(out: &mut String, title: &str, rows: &[(String, u64)]) -> std::fmt::Result {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{title}")?;
    for (label, count) in rows {
        writeln!(out, "   {label:<14}{count}")?;
    }
    Ok(())
}

/// The `n` largest buckets, earliest label first on ties.
fn busiest(table: &Histogram, n: usize) -> Vec<(String, u64)> {
    let mut rows = nonzero(table);
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.truncate(n);
    rows
}

fn nonzero(table: &Histogram) -> Vec<(String, u64)> {
    table
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(label, count)| (label.to_string(), *count))
        .collect()
}

/// Formats a gap in seconds as `1h 05m`, `4m 10s` or `42s`.
///
/// Negative gaps (clock skew in the export) keep their sign.
///
/// ```rust
/// use chatstats::output::format_duration;
///
/// assert_eq!(format_duration(42.0), "42s");
/// assert_eq!(format_duration(300.0), "5m 00s");
/// assert_eq!(format_duration(14_700.0), "4h 05m");
/// assert_eq!(format_duration(-60.0), "-1m 00s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total = seconds.abs().round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{sign}{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{sign}{minutes}m {secs:02}s")
    } else {
        format!("{sign}{secs}s")
    }
}
