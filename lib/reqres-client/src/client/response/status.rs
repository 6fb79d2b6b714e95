use std::ops::RangeInclusive;

/// Lowest status code accepted by the relaxed policy.
pub const RELAXED_MIN_STATUS: u16 = 100;

/// Highest status code accepted by the relaxed policy.
///
/// The bound is inclusive: `500` is returned as a value, `501` is an error.
pub const RELAXED_MAX_STATUS: u16 = 500;

/// Status codes a call hands back to the caller.
///
/// A response whose status is not contained in the set fails the call with
/// [`ApiClientError::UnexpectedStatusCode`](crate::ApiClientError::UnexpectedStatusCode).
/// The default is the relaxed policy `100..=500`, so every 4xx (and a plain 500)
/// reaches the caller as an assertable response.
///
/// ```rust
/// use reqres_client::ExpectedStatusCodes;
///
/// let codes = ExpectedStatusCodes::from_single(201).add_single(400);
/// assert!(codes.contains(201));
/// assert!(codes.contains(400));
/// assert!(!codes.contains(200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatusCodes {
    ranges: Vec<RangeInclusive<u16>>,
}

impl ExpectedStatusCodes {
    /// Creates the relaxed policy: any status in `100..=500`.
    pub fn new() -> Self {
        Self {
            ranges: vec![RELAXED_MIN_STATUS..=RELAXED_MAX_STATUS],
        }
    }

    /// Accepts only the statuses of `range`.
    ///
    /// # Panics
    ///
    /// Panics when a bound lies outside `100..=599` or the range is empty.
    pub fn from_inclusive_range(range: RangeInclusive<u16>) -> Self {
        Self {
            ranges: vec![checked(range)],
        }
    }

    /// Accepts only `status`.
    ///
    /// # Panics
    ///
    /// Panics when `status` lies outside `100..=599`.
    pub fn from_single(status: u16) -> Self {
        Self::from_inclusive_range(status..=status)
    }

    /// Also accepts `status`.
    ///
    /// # Panics
    ///
    /// Panics when `status` lies outside `100..=599`.
    #[must_use]
    pub fn add_single(mut self, status: u16) -> Self {
        self.ranges.push(checked(status..=status));
        self
    }

    /// Returns true when `status` is accepted.
    pub fn contains(&self, status: u16) -> bool {
        self.ranges.iter().any(|range| range.contains(&status))
    }
}

impl Default for ExpectedStatusCodes {
    fn default() -> Self {
        Self::new()
    }
}

fn checked(range: RangeInclusive<u16>) -> RangeInclusive<u16> {
    let valid = 100..=599;
    assert!(
        valid.contains(range.start()) && valid.contains(range.end()),
        "status codes must lie in 100..=599, got {range:?}"
    );
    assert!(!range.is_empty(), "empty status range {range:?}");
    range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxed_policy_stops_at_500() {
        let codes = ExpectedStatusCodes::default();

        for status in [100, 200, 204, 400, 404, 429, 500] {
            assert!(codes.contains(status), "{status} should be accepted");
        }
        for status in [99, 501, 503] {
            assert!(!codes.contains(status), "{status} should be rejected");
        }
    }

    #[test]
    fn test_single_status_can_be_extended() {
        let codes = ExpectedStatusCodes::from_single(204);
        assert!(codes.contains(204));
        assert!(!codes.contains(200));

        let codes = codes.add_single(404);
        assert!(codes.contains(404));
        assert!(!codes.contains(400));
    }

    #[test]
    fn test_inclusive_range_keeps_both_bounds() {
        let codes = ExpectedStatusCodes::from_inclusive_range(200..=299);
        assert!(codes.contains(200));
        assert!(codes.contains(299));
        assert!(!codes.contains(300));
    }

    #[test]
    #[should_panic(expected = "status codes must lie in 100..=599, got 600..=600")]
    fn test_out_of_range_status_panics() {
        let _ = ExpectedStatusCodes::from_single(600);
    }

    #[test]
    #[should_panic(expected = "empty status range 300..=200")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_reversed_range_panics() {
        let _ = ExpectedStatusCodes::from_inclusive_range(300..=200);
    }
}
