//! Human-readable byte sizes.

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Formats a byte count using binary (1024-based) units with one decimal digit.
///
/// Values below 1 KiB are printed as whole bytes: `500 B`.
/// Larger values pick the largest unit that keeps the quotient under 1024:
/// `1536` -> `1.5 KB`, `1610612736` -> `1.5 GB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}
