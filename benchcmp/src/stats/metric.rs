//!
//! The benchmark metric units.
//!

///
/// Returns the table name of a benchmark unit.
///
pub fn name(unit: &str) -> &str {
    match unit {
        "ns/op" => "time/op",
        "B/op" => "alloc/op",
        "MB/s" => "speed",
        unit => unit,
    }
}

///
/// Whether larger values of `unit` are improvements.
///
pub fn is_larger_better(unit: &str) -> bool {
    unit.ends_with("/s")
}

///
/// Formats a value of `unit` with three significant digits and a scaled suffix.
///
pub fn format_value(value: f64, unit: &str) -> String {
    let (scaled, suffix) = match unit {
        "ns/op" => match value.abs() {
            magnitude if magnitude >= 1e9 => (value / 1e9, "s"),
            magnitude if magnitude >= 1e6 => (value / 1e6, "ms"),
            magnitude if magnitude >= 1e3 => (value / 1e3, "µs"),
            _ => (value, "ns"),
        },
        "B/op" => match value.abs() {
            magnitude if magnitude >= 1e9 => (value / 1e9, "GB"),
            magnitude if magnitude >= 1e6 => (value / 1e6, "MB"),
            magnitude if magnitude >= 1e3 => (value / 1e3, "kB"),
            _ => (value, "B"),
        },
        "allocs/op" => match value.abs() {
            magnitude if magnitude >= 1e6 => (value / 1e6, "M"),
            magnitude if magnitude >= 1e3 => (value / 1e3, "k"),
            _ => return format!("{value:.0}"),
        },
        "MB/s" => (value, "MB/s"),
        unit => return format!("{} {unit}", significant(value)),
    };
    match suffix {
        "MB/s" => format!("{} {suffix}", significant(scaled)),
        _ => format!("{}{suffix}", significant(scaled)),
    }
}

///
/// Formats `value` with three significant digits for magnitudes below 1000.
///
fn significant(value: f64) -> String {
    match value.abs() {
        magnitude if magnitude >= 100.0 => format!("{value:.0}"),
        magnitude if magnitude >= 10.0 => format!("{value:.1}"),
        _ => format!("{value:.2}"),
    }
}
