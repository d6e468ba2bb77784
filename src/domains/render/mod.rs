//! Render domain - pure HTML generation.
//!
//! Renderers are plain functions with a stable contract: structured data
//! in, markup string out. They hold no state and touch no I/O, so they can
//! be tested or swapped independently of the dispatch layer.

mod dashboard;
mod metrics_table;
mod user_card;

pub use dashboard::{Theme, render_dashboard};
pub use metrics_table::render_metrics_table;
pub use user_card::render_user_card;

/// Format an integer with comma separators for display, e.g. `12,500`.
fn thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
