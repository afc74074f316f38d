// src/engines/features/histogram.rs

/// Slice of a sequence scanned by a feature, in percent of its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub begin_pct: usize,
    pub end_pct: usize,
    pub width: usize,
}

impl Window {
    pub const fn whole(width: usize) -> Self {
        Self { begin_pct: 0, end_pct: 100, width }
    }

    pub const fn span(begin_pct: usize, end_pct: usize) -> Self {
        Self { begin_pct, end_pct, width: 1 }
    }

    /// Start positions visited for a sequence of `len` symbols. The end is
    /// pulled in by the full window width, so the last start that would
    /// still fit is skipped as well.
    pub fn starts(&self, len: usize) -> std::ops::Range<usize> {
        let start = len * self.begin_pct / 100;
        let end = (len * self.end_pct / 100).saturating_sub(self.width);
        start..end.max(start)
    }
}

/// Occurrence counts keyed by pattern, kept in first-seen order.
#[derive(Debug, Clone)]
pub struct Histogram<K> {
    counts: Vec<(K, usize)>,
}

impl<K: PartialEq> Histogram<K> {
    pub fn collect<F>(symbols: &[u8], window: Window, pattern: F) -> Self
    where
        F: Fn(&[u8]) -> K,
    {
        let mut counts: Vec<(K, usize)> = Vec::new();

        for i in window.starts(symbols.len()) {
            let key = pattern(&symbols[i..i + window.width]);
            match counts.iter_mut().find(|(k, _)| *k == key) {
                Some((_, count)) => *count += 1,
                None => counts.push((key, 1)),
            }
        }

        Self { counts }
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Pearson chi-square against a uniform spread over `bins` patterns.
    /// Unseen patterns contribute their expected count. Empty histograms
    /// score 0.
    pub fn chi_square(&self, bins: usize) -> f64 {
        let n = self.total();
        if n == 0 || bins == 0 {
            return 0.0;
        }

        let expected = n as f64 / bins as f64;
        let observed = self.counts.iter().fold(0.0, |acc, (_, count)| {
            let v = *count as f64;
            acc + (v - expected) * (v - expected) / expected
        });

        let unseen = bins.saturating_sub(self.distinct());
        observed + expected * unseen as f64
    }
}

/// Number of windows matching `predicate`.
pub fn count_windows<F>(symbols: &[u8], window: Window, predicate: F) -> usize
where
    F: Fn(&[u8]) -> bool,
{
    Histogram::collect(symbols, window, predicate).count(&true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_skip_last_fitting_window() {
        assert_eq!(Window::whole(1).starts(50), 0..49);
        assert_eq!(Window::whole(2).starts(50), 0..48);
        assert_eq!(Window::span(23, 53).starts(50), 11..25);
        assert_eq!(Window::span(70, 100).starts(50), 35..49);
    }

    #[test]
    fn test_starts_empty_for_short_sequences() {
        assert!(Window::whole(7).starts(3).is_empty());
        assert!(Window::whole(1).starts(1).is_empty());
        assert!(Window::whole(1).starts(0).is_empty());
    }

    #[test]
    fn test_histogram_counts_in_first_seen_order() {
        let hist = Histogram::collect(&[3, 1, 3, 2, 3], Window::whole(1), |w| w[0]);
        assert_eq!(hist.count(&3), 2);
        assert_eq!(hist.count(&1), 1);
        assert_eq!(hist.count(&2), 1);
        assert_eq!(hist.count(&6), 0);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.distinct(), 3);
    }

    #[test]
    fn test_chi_square_uniform_and_empty() {
        // five distinct faces out of six: 5 * (1/36) / (5/6) + 5/6
        let hist = Histogram::collect(&[1, 2, 3, 4, 5, 6], Window::whole(1), |w| w[0]);
        assert!((hist.chi_square(6) - 1.0).abs() < 1e-12);

        let empty = Histogram::collect(&[1], Window::whole(1), |w| w[0]);
        assert_eq!(empty.chi_square(6), 0.0);
    }
}
