//! Shared helper functions for CLI commands

/// Stock quantity summary printed under quantity-bearing files
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityStats {
    pub total: u64,
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

impl QuantityStats {
    /// None for an empty batch
    pub fn from_quantities(quantities: &[u32]) -> Option<Self> {
        let first = *quantities.first()?;
        let mut total = 0u64;
        let mut min = first;
        let mut max = first;
        for &q in quantities {
            total += u64::from(q);
            min = min.min(q);
            max = max.max(q);
        }
        Some(Self {
            total,
            mean: total as f64 / quantities.len() as f64,
            min,
            max,
        })
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Character-based rather than byte-based: record values contain
/// accented names.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_stats() {
        let stats = QuantityStats::from_quantities(&[10, 20, 30]).unwrap();
        assert_eq!(stats.total, 60);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 30);
    }

    #[test]
    fn test_quantity_stats_single() {
        let stats = QuantityStats::from_quantities(&[7]).unwrap();
        assert_eq!(stats.total, 7);
        assert_eq!(stats.min, 7);
        assert_eq!(stats.max, 7);
    }

    #[test]
    fn test_quantity_stats_empty() {
        assert!(QuantityStats::from_quantities(&[]).is_none());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_accented() {
        // counts characters, not bytes
        assert_eq!(truncate_str("Écran Tactile", 13), "Écran Tactile");
        assert_eq!(truncate_str("Carte Électronique", 10), "Carte É...");
    }
}
