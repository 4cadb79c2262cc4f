//! Weight tables for the two evaluation strategies

use super::Features;
use crate::types::Score;

/// Multipliers applied to the difference of each feature between X and O
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Weights {
    pub forced_win: i32,
    pub fork: i32,
    pub three: i32,
    pub two: i32,
    pub one: i32,
    pub center: i32,
    pub cluster: i32,
    /// Whether early-game noise may be added on top
    pub early_noise: bool,
}

impl Weights {
    pub const STANDARD: Weights = Weights {
        forced_win: 50_000,
        fork: 10_000,
        three: 500,
        two: 200,
        one: 30,
        center: 50,
        cluster: 0,
        early_noise: true,
    };

    pub const CLUSTERED: Weights = Weights {
        forced_win: 0,
        fork: 7_000,
        three: 500,
        two: 200,
        one: 30,
        center: 50,
        cluster: 20,
        early_noise: false,
    };

    /// Zero-sum combination: every term is `weight * (x - o)`
    pub fn combine(&self, x: &Features, o: &Features) -> Score {
        let diff = |a: u32, b: u32| a as i32 - b as i32;

        self.forced_win * diff(x.forced_wins, o.forced_wins)
            + self.fork * diff(x.forks, o.forks)
            + self.three * diff(x.threes, o.threes)
            + self.two * diff(x.twos, o.twos)
            + self.one * diff(x.ones, o.ones)
            + self.center * (x.center - o.center)
            + self.cluster * (x.clusters - o.clusters)
    }
}
