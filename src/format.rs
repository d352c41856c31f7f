//! Byte count formatting.
//!
//! Sizes are printed either as a raw byte count (`"1234B"`) or, in
//! human-readable mode, scaled by powers of 1024 into the largest fitting
//! unit up to petabytes (`"1.2MB"`).

use std::fmt;

/// Units used by human-readable formatting, smallest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
}

impl SizeUnit {
    /// Every unit in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
        Self::Petabytes,
    ];

    /// Ratio between two neighbouring units.
    pub const STEP: u64 = 1024;

    /// Short suffix printed after the number.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
            Self::Petabytes => "PB",
        }
    }

    /// The next larger unit, or `None` for petabytes.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Bytes => Some(Self::Kilobytes),
            Self::Kilobytes => Some(Self::Megabytes),
            Self::Megabytes => Some(Self::Gigabytes),
            Self::Gigabytes => Some(Self::Terabytes),
            Self::Terabytes => Some(Self::Petabytes),
            Self::Petabytes => None,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Format a byte count for display.
///
/// With `human` unset the raw count is printed followed by `B`. With `human`
/// set, counts below 1024 are printed the same way and larger counts are
/// divided by 1024 until they drop below 1024 or reach petabytes, then
/// printed with one decimal digit.
///
/// # Examples
///
/// ```
/// # use path_size::format_size;
/// assert_eq!(format_size(123, false), "123B");
/// assert_eq!(format_size(1024, true), "1.0KB");
/// assert_eq!(format_size(1_234_567, true), "1.2MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64, human: bool) -> String {
    if !human || bytes < SizeUnit::STEP {
        return format!("{bytes}{}", SizeUnit::Bytes);
    }

    let (value, unit) = scale(bytes);
    format!("{value:.1}{unit}")
}

/// Scale `bytes` down to the largest unit that keeps it at or above one.
#[allow(clippy::cast_precision_loss)]
fn scale(bytes: u64) -> (f64, SizeUnit) {
    let step = SizeUnit::STEP as f64;
    let mut value = bytes as f64;
    let mut unit = SizeUnit::Bytes;

    while value >= step {
        let Some(next) = unit.next() else {
            break;
        };
        value /= step;
        unit = next;
    }

    (value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode() {
        assert_eq!(format_size(0, false), "0B");
        assert_eq!(format_size(123, false), "123B");
        assert_eq!(format_size(1024, false), "1024B");
        assert_eq!(format_size(1024 * 1024 * 1024, false), "1073741824B");
    }

    #[test]
    fn test_human_below_one_kilobyte() {
        assert_eq!(format_size(0, true), "0B");
        assert_eq!(format_size(1, true), "1B");
        assert_eq!(format_size(512, true), "512B");
        assert_eq!(format_size(1023, true), "1023B");
    }

    #[test]
    fn test_human_exact_units() {
        assert_eq!(format_size(1024, true), "1.0KB");
        assert_eq!(format_size(1024 * 1024, true), "1.0MB");
        assert_eq!(format_size(1024 * 1024 * 1024, true), "1.0GB");
        assert_eq!(format_size(1024_u64.pow(4), true), "1.0TB");
        assert_eq!(format_size(1024_u64.pow(5), true), "1.0PB");
    }

    #[test]
    fn test_human_fractions() {
        assert_eq!(format_size(1536, true), "1.5KB");
        assert_eq!(format_size(1_234_567, true), "1.2MB");
        assert_eq!(format_size(10 * 1024 + 512, true), "10.5KB");
    }

    #[test]
    fn test_human_stops_at_petabytes() {
        assert_eq!(format_size(1024_u64.pow(6), true), "1024.0PB");
        assert_eq!(format_size(u64::MAX, true), "16384.0PB");
    }

    #[test]
    fn test_unit_sequence() {
        let mut unit = SizeUnit::Bytes;
        let mut seen = vec![unit];
        while let Some(next) = unit.next() {
            seen.push(next);
            unit = next;
        }

        assert_eq!(seen, SizeUnit::ALL);
        assert_eq!(
            SizeUnit::ALL.map(SizeUnit::suffix),
            ["B", "KB", "MB", "GB", "TB", "PB"]
        );
    }

    #[test]
    fn test_scale() {
        let (value, unit) = scale(2048);
        assert!((value - 2.0).abs() < f64::EPSILON);
        assert_eq!(unit, SizeUnit::Kilobytes);

        let (value, unit) = scale(3 * 1024 * 1024);
        assert!((value - 3.0).abs() < f64::EPSILON);
        assert_eq!(unit, SizeUnit::Megabytes);
    }
}
