use agelife::Engine;
use num_format::{CustomFormat, Grouping, ToFormattedString};

pub(super) fn group_digits(value: u64) -> String {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .unwrap();
    value.to_formatted_string(&fmt)
}

/// The status line a host shows under the grid: generation counter plus
/// live-cell shares.
pub(super) fn status_line(engine: &Engine) -> String {
    let (young, old) = engine.population();
    let total = (engine.width() * engine.height()) as u64;
    let live = young + old;
    format!(
        "steps:{} cells:{}/{:.1}%  old:{}/{:.1}%",
        group_digits(engine.generation()),
        group_digits(live),
        live as f64 * 100.0 / total as f64,
        group_digits(old),
        old as f64 * 100.0 / total as f64,
    )
}
