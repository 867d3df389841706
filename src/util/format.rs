// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a position in seconds as `M:SS`.
///
/// Minutes have no leading zero and no upper bound, seconds are always two
/// digits. Fractional seconds are truncated, never rounded. Negative or
/// non-finite values format as `0:00`.
///
/// # Arguments
///
/// * `seconds` - The position or duration to format.
///
/// # Examples
///
/// ```
/// use carousel::util::format::format_time;
///
/// assert_eq!(format_time(125.9), "2:05");
/// assert_eq!(format_time(3600.0), "60:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn truncates_seconds() {
        assert_eq!(format_time(125.9), "2:05");
        assert_eq!(format_time(59.999), "0:59");
    }

    #[test]
    fn minutes_are_unbounded() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(6125.0), "102:05");
    }

    #[test]
    fn degenerate_input_is_zero() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
