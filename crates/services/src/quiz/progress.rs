/// Share of the deck reached by the cursor, counting the focused card.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(position: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = (position as f64 + 1.0) / total as f64 * 100.0;
    percent.min(100.0)
}
