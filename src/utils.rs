// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Utility functions for shelp
//!
//! Pure formatting helpers shared by the commands.

/// Format a per-token cost for the config file.
///
/// Fixed-point with 8 decimals, never scientific notation: the shell glue
/// pastes these strings straight into arithmetic, and `2.5e-7` would break
/// it. Eight decimals cover every published per-token price down to a
/// hundredth of a cent per million tokens.
pub fn format_cost(cost: f64) -> String {
    format!("{cost:.8}")
}

/// Format a size in bytes to human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== format_cost tests ====================

    #[test]
    fn test_format_cost_haiku_prices() {
        assert_eq!(format_cost(0.000_000_25), "0.00000025");
        assert_eq!(format_cost(0.000_001_25), "0.00000125");
    }

    #[test]
    fn test_format_cost_zero() {
        assert_eq!(format_cost(0.0), "0.00000000");
    }

    #[test]
    fn test_format_cost_never_scientific() {
        let tiny = format_cost(0.000_000_05);
        assert_eq!(tiny, "0.00000005");
        assert!(!tiny.contains('e'));
        assert!(!tiny.contains('E'));
    }

    #[test]
    fn test_format_cost_larger_prices() {
        assert_eq!(format_cost(0.000_015), "0.00001500");
        assert_eq!(format_cost(0.000_075), "0.00007500");
    }

    #[test]
    fn test_format_cost_round_trips_through_parse() {
        for cost in [0.0, 0.000_000_25, 0.000_001_25, 0.000_01, 0.000_075] {
            let formatted = format_cost(cost);
            let parsed: f64 = formatted.parse().unwrap();
            assert!((parsed - cost).abs() < 1e-12);
        }
    }

    // ==================== format_size tests ====================

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 + 1024 * 512), "1.50 MB");
    }
}
