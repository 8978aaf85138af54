//! Minimal fuzzy-logic scoring engine for weapon desirability.
//!
//! Crisp inputs (target distance, rounds left) are fuzzified through
//! shoulder/triangle membership sets, combined by min-AND rules into three
//! shared desirability output sets, and defuzzified with the max-average
//! method.

/// A membership function over one crisp input axis.
#[derive(Debug, Clone, Copy)]
pub enum FuzzySet {
    /// Full membership at and left of `peak`, falling to zero at `right`.
    LeftShoulder { left: f64, peak: f64, right: f64 },
    /// Rising from `left`, peaking at `peak`, falling to `right`.
    Triangular { left: f64, peak: f64, right: f64 },
    /// Rising from `left`, full membership at and right of `peak`.
    RightShoulder { left: f64, peak: f64, right: f64 },
}

impl FuzzySet {
    pub fn left_shoulder((left, peak, right): (f64, f64, f64)) -> Self {
        FuzzySet::LeftShoulder { left, peak, right }
    }

    pub fn triangular((left, peak, right): (f64, f64, f64)) -> Self {
        FuzzySet::Triangular { left, peak, right }
    }

    pub fn right_shoulder((left, peak, right): (f64, f64, f64)) -> Self {
        FuzzySet::RightShoulder { left, peak, right }
    }

    /// Degree of membership of `x` in this set, in [0, 1].
    pub fn membership(&self, x: f64) -> f64 {
        match *self {
            FuzzySet::LeftShoulder { peak, right, .. } => {
                if x <= peak {
                    1.0
                } else if x < right {
                    (right - x) / (right - peak)
                } else {
                    0.0
                }
            }
            FuzzySet::Triangular { left, peak, right } => {
                if x <= left || x >= right {
                    0.0
                } else if x <= peak {
                    (x - left) / (peak - left)
                } else {
                    (right - x) / (right - peak)
                }
            }
            FuzzySet::RightShoulder { left, peak, .. } => {
                if x >= peak {
                    1.0
                } else if x > left {
                    (x - left) / (peak - left)
                } else {
                    0.0
                }
            }
        }
    }

    /// Representative crisp value used during defuzzification.
    pub fn representative(&self) -> f64 {
        match *self {
            FuzzySet::LeftShoulder { left, peak, .. } => (left + peak) / 2.0,
            FuzzySet::Triangular { peak, .. } => peak,
            FuzzySet::RightShoulder { peak, right, .. } => (peak + right) / 2.0,
        }
    }
}

/// Output term indices into the desirability sets.
pub const UNDESIRABLE: usize = 0;
pub const DESIRABLE: usize = 1;
pub const VERY_DESIRABLE: usize = 2;

/// One weapon's fuzzy scoring module.
///
/// `rules[d][a]` names the output term fired when distance term `d`
/// (close/medium/far) AND ammo term `a` (low/okay/full) both hold.
#[derive(Debug, Clone)]
pub struct FuzzyModule {
    pub distance: [FuzzySet; 3],
    pub ammo: [FuzzySet; 3],
    pub desirability: [FuzzySet; 3],
    pub rules: [[usize; 3]; 3],
}

impl FuzzyModule {
    /// Score the weapon for a target at `distance` with `rounds_left` in
    /// the clip. Returns a desirability in [0, 1].
    pub fn desirability(&self, distance: f64, rounds_left: f64) -> f64 {
        let d: Vec<f64> = self.distance.iter().map(|s| s.membership(distance)).collect();
        let a: Vec<f64> = self.ammo.iter().map(|s| s.membership(rounds_left)).collect();

        // Fire every rule; OR overlapping conclusions with max.
        let mut confidence = [0.0_f64; 3];
        for (di, &dm) in d.iter().enumerate() {
            for (ai, &am) in a.iter().enumerate() {
                let strength = dm.min(am);
                let term = self.rules[di][ai];
                confidence[term] = confidence[term].max(strength);
            }
        }

        // Max-average defuzzification over the output sets.
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (term, &c) in confidence.iter().enumerate() {
            numerator += self.desirability[term].representative() * c;
            denominator += c;
        }
        if denominator <= f64::EPSILON {
            return 0.0;
        }
        (numerator / denominator / 100.0).clamp(0.0, 1.0)
    }
}
