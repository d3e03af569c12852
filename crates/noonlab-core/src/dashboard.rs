//! Boxed text dashboard.
//!
//! Every line is `WIDTH + 2` characters: a border, `WIDTH` columns of
//! content and a border. Content that does not fit is truncated.

use crate::domain::StatsSnapshot;

/// Inner width of the box, in characters.
pub const WIDTH: usize = 58;

fn rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(WIDTH))
}

fn row(content: &str) -> String {
    let clipped: String = content.chars().take(WIDTH).collect();
    format!("║{clipped:<WIDTH$}║")
}

fn centered(content: &str) -> String {
    let clipped: String = content.chars().take(WIDTH).collect();
    format!("║{clipped:^WIDTH$}║")
}

/// Lays out `stats` as a box, one element per line.
pub fn render_lines(stats: &StatsSnapshot) -> Vec<String> {
    vec![
        rule('╔', '╗'),
        centered(&format!("{} Dashboard", stats.name)),
        rule('╠', '╣'),
        row(&format!("  Version: {}", stats.version)),
        rule('╠', '╣'),
        row("  Statistics:"),
        row(&format!("     - Decisions: {}", stats.total_decisions)),
        row(&format!("     - Accepted: {}", stats.accepted)),
        row(&format!("     - Pending: {}", stats.pending)),
        rule('╠', '╣'),
        row(&format!("  Tribes: {}", stats.tribes)),
        row(&format!("  Balance score: {:.1}%", stats.balance_score)),
        rule('╚', '╝'),
    ]
}

/// Same as [`render_lines`], joined with a trailing newline.
pub fn render(stats: &StatsSnapshot) -> String {
    let mut out = render_lines(stats).join("\n");
    out.push('\n');
    out
}
