//! Work/break schedule planning

use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    Break,
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Work => write!(f, "Work"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// One timed interval of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub kind: IntervalKind,
    /// 1-based cycle this interval belongs to
    pub cycle: u32,
    pub minutes: f64,
}

/// Validated break length and cycle count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    break_minutes: f64,
    cycles: u32,
}

impl Schedule {
    /// `cycles` is signed so raw user input can be rejected rather than wrapped.
    pub fn new(break_minutes: f64, cycles: i64) -> Result<Self, ValidationError> {
        if !break_minutes.is_finite() || break_minutes <= 0.0 {
            return Err(ValidationError::NonPositiveBreak(break_minutes));
        }
        let cycles = u32::try_from(cycles)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or(ValidationError::NonPositiveCycles(cycles))?;
        Ok(Self {
            break_minutes,
            cycles,
        })
    }

    pub fn break_minutes(&self) -> f64 {
        self.break_minutes
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Yield every interval in order: a work interval per cycle, with a break
    /// between cycles but none after the last one. Intervals are produced on
    /// demand, so the cycle count never sizes an allocation.
    pub fn plan(&self, work_minutes: f64) -> impl Iterator<Item = Interval> {
        let Self {
            break_minutes,
            cycles,
        } = *self;
        (1..=cycles).flat_map(move |cycle| {
            let work = Interval {
                kind: IntervalKind::Work,
                cycle,
                minutes: work_minutes,
            };
            let rest = (cycle < cycles).then_some(Interval {
                kind: IntervalKind::Break,
                cycle,
                minutes: break_minutes,
            });
            std::iter::once(work).chain(rest)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(plan: &[Interval], kind: IntervalKind) -> usize {
        plan.iter().filter(|i| i.kind == kind).count()
    }

    #[test]
    fn test_three_cycles_have_two_breaks() {
        let schedule = Schedule::new(5.0, 3).unwrap();
        let plan: Vec<Interval> = schedule.plan(20.0).collect();

        assert_eq!(plan.len(), 5);
        assert_eq!(count(&plan, IntervalKind::Work), 3);
        assert_eq!(count(&plan, IntervalKind::Break), 2);
        assert!(plan
            .iter()
            .filter(|i| i.kind == IntervalKind::Work)
            .all(|i| i.minutes == 20.0));
        assert!(plan
            .iter()
            .filter(|i| i.kind == IntervalKind::Break)
            .all(|i| i.minutes == 5.0));
        assert_eq!(plan.last().unwrap().kind, IntervalKind::Work);
    }

    #[test]
    fn test_plan_alternates_work_and_break() {
        let plan: Vec<Interval> = Schedule::new(2.0, 3).unwrap().plan(10.0).collect();
        let kinds: Vec<IntervalKind> = plan.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            [
                IntervalKind::Work,
                IntervalKind::Break,
                IntervalKind::Work,
                IntervalKind::Break,
                IntervalKind::Work,
            ]
        );
        let cycles: Vec<u32> = plan.iter().map(|i| i.cycle).collect();
        assert_eq!(cycles, [1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_single_cycle_has_no_break() {
        let plan: Vec<Interval> = Schedule::new(5.0, 1).unwrap().plan(25.0).collect();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].kind, IntervalKind::Work);
    }

    #[test]
    fn test_rejects_bad_break() {
        for minutes in [0.0, -3.0, f64::INFINITY] {
            assert_eq!(
                Schedule::new(minutes, 2),
                Err(ValidationError::NonPositiveBreak(minutes))
            );
        }
        assert!(Schedule::new(f64::NAN, 2).is_err());
    }

    #[test]
    fn test_rejects_bad_cycles() {
        for cycles in [0, -1, i64::from(u32::MAX) + 1] {
            assert_eq!(
                Schedule::new(5.0, cycles),
                Err(ValidationError::NonPositiveCycles(cycles))
            );
        }
    }

    #[test]
    fn test_largest_cycle_count_is_planned_lazily() {
        let schedule = Schedule::new(5.0, i64::from(u32::MAX)).unwrap();
        let head: Vec<Interval> = schedule.plan(1.0).take(4).collect();

        assert_eq!(head.len(), 4);
        assert_eq!(head[0].kind, IntervalKind::Work);
        assert_eq!(head[1].kind, IntervalKind::Break);
        assert_eq!(head[3].cycle, 2);
        assert_eq!(schedule.plan(1.0).nth(1_000_000).unwrap().cycle, 500_001);
    }
}
