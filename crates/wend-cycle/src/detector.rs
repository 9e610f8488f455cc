//! History-backed cycle detection and generation fast-forward.

use crate::rule::Transition;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use wend_core::{CycleError, Point};
use wend_grid::DenseGrid;

/// How two generations are compared when searching for a repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// States must be identical: same bounds, same cells.
    #[default]
    Exact,
    /// States must be identical up to a uniform translation: equal
    /// active-region dimensions, same cells relative to the active
    /// origin, any absolute position.
    ///
    /// Extrapolating the observed shift across future periods is
    /// correct only if the transition rule is translation-invariant.
    /// [`CycleConfig::verify_shift`] checks the hypothesis against one
    /// extra generation; with verification off, the assumption is the
    /// caller's to guarantee.
    UpToShift,
}

/// Detector configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleConfig {
    /// Generation cap: how many steps to simulate while looking for a
    /// repeat before reporting [`CycleError::NoCycleFound`]. Targets
    /// within the cap are simply simulated to directly.
    pub max_generations: u64,
    /// Repeat comparison mode.
    pub match_mode: MatchMode,
    /// After a shifted match, advance one extra generation and check
    /// that it reproduces the recorded history under the hypothesised
    /// shift; a mismatch fails with [`CycleError::InconsistentShift`].
    /// Costs one additional `step()` call. Ignored under
    /// [`MatchMode::Exact`].
    pub verify_shift: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            max_generations: 1_000,
            match_mode: MatchMode::Exact,
            verify_shift: true,
        }
    }
}

/// A detected periodicity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Generation index of the first occurrence of the repeated state.
    pub start: u64,
    /// Period length in generations.
    pub period: u64,
    /// Spatial drift per period ([`Point::ORIGIN`] for exact matches).
    pub shift: Point,
}

/// Result of a detector run: the state at the target generation, plus
/// the cycle used to reach it, if one was found.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleReport<T> {
    /// The grid state at the requested generation.
    pub state: DenseGrid<T>,
    /// The requested generation index.
    pub generation: u64,
    /// The detected cycle, or `None` if the target was reached by
    /// direct simulation before any repeat.
    pub cycle: Option<Cycle>,
}

/// Advance `initial` by `generations` steps, materializing every
/// intermediate state. The brute-force baseline the detector
/// short-circuits.
pub fn simulate<T, R>(initial: DenseGrid<T>, rule: &R, generations: u64) -> DenseGrid<T>
where
    T: Clone + PartialEq,
    R: Transition<T>,
{
    let mut state = initial;
    for _ in 0..generations {
        state = rule.step(&state);
    }
    state
}

/// Generational advancement with memoized-history repeat lookup.
///
/// # Examples
///
/// A two-phase oscillator fast-forwarded far beyond its period:
///
/// ```
/// use wend_core::{Bounds, Point};
/// use wend_grid::DenseGrid;
/// use wend_cycle::{CycleConfig, CycleDetector};
///
/// // Alternates between the initial state and its complement.
/// let flip = |g: &DenseGrid<bool>| {
///     let mut out = g.cleared();
///     for (p, &v) in g.iter() {
///         out.set(p, !v).unwrap();
///     }
///     out
/// };
/// let mut grid = DenseGrid::new(Bounds::sized(2, 1), false).unwrap();
/// grid.set(Point::new(0, 0), true).unwrap();
///
/// let detector = CycleDetector::new(CycleConfig::default());
/// let report = detector.run(grid.clone(), &flip, 1_000_000_001).unwrap();
/// let cycle = report.cycle.unwrap();
/// assert_eq!(cycle.period, 2);
/// assert_eq!(report.state, flip(&grid));
/// ```
#[derive(Clone, Debug)]
pub struct CycleDetector {
    config: CycleConfig,
}

impl CycleDetector {
    /// Create a detector with the given configuration.
    pub fn new(config: CycleConfig) -> Self {
        CycleDetector { config }
    }

    /// The detector's configuration.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Compute the state at generation `target`, starting from
    /// `initial` (generation 0) and advancing with `rule`.
    ///
    /// Simulates one generation at a time, comparing each completed
    /// state against the recorded history (a 64-bit fingerprint
    /// prefilter keeps the comparison cheap). On a repeat, the
    /// remaining generations collapse into modular arithmetic: if
    /// generation `g` matches generation `g0` with offset `d`, then
    /// generation `g0 + k*period + r` equals the recorded state at
    /// `g0 + r` translated by `k*d`.
    ///
    /// Fails with [`CycleError::NoCycleFound`] when the generation cap
    /// runs out before either a repeat or the target, and with
    /// [`CycleError::InconsistentShift`] when shift verification
    /// refutes the translation-invariance hypothesis.
    pub fn run<T, R>(
        &self,
        initial: DenseGrid<T>,
        rule: &R,
        target: u64,
    ) -> Result<CycleReport<T>, CycleError>
    where
        T: Clone + PartialEq + Hash,
        R: Transition<T>,
    {
        let mode = self.config.match_mode;
        let mut history: Vec<(u64, DenseGrid<T>)> =
            vec![(fingerprint(&initial, mode), initial.clone())];
        let mut current = initial;
        let mut generation = 0u64;

        while generation < target {
            if generation >= self.config.max_generations {
                return Err(CycleError::NoCycleFound {
                    searched: generation,
                });
            }
            let next = rule.step(&current);
            generation += 1;

            let print = fingerprint(&next, mode);
            let matched = history.iter().enumerate().find_map(|(g0, (hp, hg))| {
                if *hp != print {
                    return None;
                }
                match mode {
                    MatchMode::Exact => (next == *hg).then_some((g0 as u64, Point::ORIGIN)),
                    MatchMode::UpToShift => next.shift_from(hg).map(|d| (g0 as u64, d)),
                }
            });

            let Some((start, shift)) = matched else {
                history.push((print, next.clone()));
                current = next;
                continue;
            };

            let period = generation - start;
            if mode == MatchMode::UpToShift && self.config.verify_shift {
                verify_shift_hypothesis(&history, &next, rule, start, period, shift)?;
            }

            // target = (start + r) + (cycles + 1) * period, with the
            // state at start + r already in history.
            let remaining = target - generation;
            let cycles = remaining / period;
            let phase = remaining % period;
            let base = &history[(start + phase) as usize].1;
            let state = base.translated(shift * ((cycles + 1) as i64));
            return Ok(CycleReport {
                state,
                generation: target,
                cycle: Some(Cycle {
                    start,
                    period,
                    shift,
                }),
            });
        }

        Ok(CycleReport {
            state: current,
            generation: target,
            cycle: None,
        })
    }
}

/// Check the shift hypothesis against one extra generation.
///
/// `repeat` is the state at `start + period`, matching `history[start]`
/// shifted by `shift`. If the rule really is translation-invariant,
/// stepping `repeat` once must reproduce the state at `start + 1`
/// (which is `history[start + 1]`, or `repeat` itself when the period
/// is 1) under the same shift.
fn verify_shift_hypothesis<T, R>(
    history: &[(u64, DenseGrid<T>)],
    repeat: &DenseGrid<T>,
    rule: &R,
    start: u64,
    period: u64,
    shift: Point,
) -> Result<(), CycleError>
where
    T: Clone + PartialEq + Hash,
    R: Transition<T>,
{
    let after = rule.step(repeat);
    let counterpart = match history.get((start + 1) as usize) {
        Some((_, grid)) => grid,
        None => repeat, // period 1: the repeat is its own successor
    };
    match after.shift_from(counterpart) {
        Some(observed) if observed == shift => Ok(()),
        observed => Err(CycleError::InconsistentShift {
            period,
            expected: shift,
            actual: observed,
        }),
    }
}

/// 64-bit state fingerprint used to prefilter history comparisons.
///
/// Exact mode hashes bounds and every cell; shift mode hashes the
/// active-region dimensions and contents relative to the active
/// origin, so two translated copies of the same pattern collide (as
/// they must).
fn fingerprint<T: Clone + PartialEq + Hash>(grid: &DenseGrid<T>, mode: MatchMode) -> u64 {
    let mut hasher = DefaultHasher::new();
    match mode {
        MatchMode::Exact => {
            let b = grid.bounds();
            (b.min.x, b.min.y, b.width, b.height).hash(&mut hasher);
            for (_, cell) in grid.iter() {
                cell.hash(&mut hasher);
            }
        }
        MatchMode::UpToShift => match grid.active_bounds() {
            None => 0u8.hash(&mut hasher),
            Some(active) => {
                (active.width, active.height).hash(&mut hasher);
                for p in active.points() {
                    grid.get_or_background(p).hash(&mut hasher);
                }
            }
        },
    }
    hasher.finish()
}
