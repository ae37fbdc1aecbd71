// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! First bad version: binary search against an injected predicate.
//!
//! Versions are numbered `1..=n`. Some threshold `T` splits them: every
//! version before `T` is good and every version from `T` on is bad. The
//! search never sees `T`; it only asks an `Oracle` about single versions.

/// A monotonic yes/no question about a version.
///
/// Implemented for every `FnMut(u64) -> bool`, so a closure is enough:
///
/// ```
/// use drills::search::first_bad_version;
///
/// let mut is_bad = |version: u64| version >= 3;
/// assert_eq!(first_bad_version(10, &mut is_bad), 3);
/// ```
pub trait Oracle {
    /// True if `version` is bad.
    fn is_bad(&mut self, version: u64) -> bool;
}

impl<F: FnMut(u64) -> bool> Oracle for F {
    fn is_bad(&mut self, version: u64) -> bool {
        return self(version);
    }
}

/// Every version at or past `first_bad` is bad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    pub first_bad: u64,
}

impl Threshold {
    pub fn new(first_bad: u64) -> Threshold {
        return Threshold { first_bad };
    }
}

impl Oracle for Threshold {
    fn is_bad(&mut self, version: u64) -> bool {
        return version >= self.first_bad;
    }
}

/// Wraps an oracle and counts the questions asked of it.
#[derive(Clone, Debug)]
pub struct Counted<O> {
    inner: O,
    queries: u64,
}

impl<O: Oracle> Counted<O> {
    pub fn new(inner: O) -> Counted<O> {
        return Counted { inner, queries: 0 };
    }

    /// Number of `is_bad` calls so far.
    pub fn queries(&self) -> u64 {
        return self.queries;
    }

    pub fn into_inner(self) -> O {
        return self.inner;
    }
}

impl<O: Oracle> Oracle for Counted<O> {
    fn is_bad(&mut self, version: u64) -> bool {
        self.queries += 1;
        return self.inner.is_bad(version);
    }
}

/// Find the first bad version in `1..=n`.
///
/// A bad midpoint may itself be the answer, so the right bound moves onto
/// it; a good midpoint moves the left bound past it. The bounds meet at the
/// threshold after at most `ceil(log2 n)` queries.
///
/// If no version is bad the search settles on `n`. With `n == 0` there is
/// nothing to search; the oracle is never asked and 1 is returned.
pub fn first_bad_version<O: Oracle + ?Sized>(n: u64, oracle: &mut O) -> u64 {
    let mut left = 1;
    let mut right = n;

    while left < right {
        let mid = left + (right - left) / 2;
        if oracle.is_bad(mid) {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    return left;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_threshold_in_example() {
        let mut oracle = Threshold::new(4);
        assert_eq!(first_bad_version(5, &mut oracle), 4);
    }

    #[test]
    fn finds_every_threshold() {
        for n in 1..=64 {
            for t in 1..=n {
                let mut oracle = Threshold::new(t);
                assert_eq!(first_bad_version(n, &mut oracle), t, "n={} t={}", n, t);
            }
        }
    }

    #[test]
    fn single_version_needs_no_queries() {
        let mut oracle = Counted::new(Threshold::new(1));
        assert_eq!(first_bad_version(1, &mut oracle), 1);
        assert_eq!(oracle.queries(), 0);
    }

    #[test]
    fn query_count_is_logarithmic() {
        let n = 1u64 << 40;
        for t in [1, 2, n / 3, n - 1, n] {
            let mut oracle = Counted::new(Threshold::new(t));
            assert_eq!(first_bad_version(n, &mut oracle), t);
            assert!(oracle.queries() <= 41, "t={} queries={}", t, oracle.queries());
        }
    }

    #[test]
    fn no_overflow_near_u64_max() {
        let mut oracle = Threshold::new(u64::MAX - 1);
        assert_eq!(first_bad_version(u64::MAX, &mut oracle), u64::MAX - 1);
    }

    #[test]
    fn all_good_settles_on_last_version() {
        let mut never = |_: u64| false;
        assert_eq!(first_bad_version(10, &mut never), 10);
    }

    #[test]
    fn zero_versions_asks_nothing() {
        let mut oracle = Counted::new(|_: u64| true);
        assert_eq!(first_bad_version(0, &mut oracle), 1);
        assert_eq!(oracle.queries(), 0);
    }

    #[test]
    fn closure_oracle_sees_midpoints() {
        let mut asked = Vec::new();
        let mut oracle = |v: u64| {
            asked.push(v);
            return v >= 4;
        };
        assert_eq!(first_bad_version(5, &mut oracle), 4);
        assert_eq!(asked, vec![3, 4]);
    }
}
