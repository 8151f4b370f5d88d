use serde::{Deserialize, Serialize};

use crate::exam::HitResult;

/// Hit counts for one window of play (a single song, or the whole attempt)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitCounters {
    pub good: u64,
    pub ok: u64,
    pub bad: u64,
    pub drumroll: u64,
}

impl HitCounters {
    /// Add `count` hits of the given result
    pub fn add(&mut self, result: HitResult, count: u32) {
        let field = match result {
            HitResult::Good => &mut self.good,
            HitResult::Ok => &mut self.ok,
            HitResult::Bad => &mut self.bad,
            HitResult::Drumroll => &mut self.drumroll,
        };
        *field += u64::from(count);
    }

    /// Judged notes (good + ok + bad); drumroll ticks are not notes
    pub fn judged(&self) -> u64 {
        self.good + self.ok + self.bad
    }
}

impl std::ops::Add for HitCounters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            good: self.good + rhs.good,
            ok: self.ok + rhs.ok,
            bad: self.bad + rhs.bad,
            drumroll: self.drumroll + rhs.drumroll,
        }
    }
}

impl std::iter::Sum for HitCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_routes_to_field() {
        let mut counters = HitCounters::default();
        counters.add(HitResult::Good, 3);
        counters.add(HitResult::Ok, 2);
        counters.add(HitResult::Bad, 1);
        counters.add(HitResult::Drumroll, 10);
        assert_eq!(
            counters,
            HitCounters {
                good: 3,
                ok: 2,
                bad: 1,
                drumroll: 10,
            }
        );
    }

    #[test]
    fn test_counts_past_u32_range() {
        let mut counters = HitCounters::default();
        counters.add(HitResult::Good, u32::MAX);
        counters.add(HitResult::Good, u32::MAX);
        counters.add(HitResult::Ok, 2);
        assert_eq!(counters.good, 2 * u32::MAX as u64);
        assert_eq!(counters.judged(), 2 * u32::MAX as u64 + 2);
    }

    #[test]
    fn test_judged_excludes_drumroll() {
        let counters = HitCounters {
            good: 8,
            ok: 1,
            bad: 1,
            drumroll: 50,
        };
        assert_eq!(counters.judged(), 10);
    }

    #[test]
    fn test_sum() {
        let parts = [
            HitCounters {
                good: 1,
                ..Default::default()
            },
            HitCounters {
                good: 2,
                bad: 4,
                ..Default::default()
            },
        ];
        let total: HitCounters = parts.into_iter().sum();
        assert_eq!(total.good, 3);
        assert_eq!(total.bad, 4);
    }
}
