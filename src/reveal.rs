pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const REVEAL_VISIBLE_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub hidden_offset_px: u32,
    pub root_margin: &'static str,
    pub staggered: bool,
}

pub const SECTION_GROUP: RevealGroup = RevealGroup {
    selector: ".section",
    hidden_offset_px: 30,
    root_margin: "0px 0px -50px 0px",
    staggered: false,
};

pub const SKILL_GROUP: RevealGroup = RevealGroup {
    selector: ".skill-item",
    hidden_offset_px: 20,
    root_margin: "0px",
    staggered: true,
};

impl RevealGroup {
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.hidden_offset_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visibility {
    Pending,
    Triggered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub target: usize,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct RevealTracker {
    states: Vec<Visibility>,
    stagger_step_ms: Option<u32>,
}

impl RevealTracker {
    pub fn new(targets: usize) -> Self {
        Self {
            states: vec![Visibility::Pending; targets],
            stagger_step_ms: None,
        }
    }

    pub fn staggered(targets: usize, step_ms: u32) -> Self {
        Self {
            states: vec![Visibility::Pending; targets],
            stagger_step_ms: Some(step_ms),
        }
    }

    /// Consumes one observer batch of `(target, is_intersecting)` pairs and
    /// returns the targets to fire, in batch order. A staggered tracker delays
    /// each trigger by its position in the batch times the step.
    pub fn observe_batch<I>(&mut self, batch: I) -> Vec<Trigger>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let mut triggers = Vec::new();

        for (position, (target, intersecting)) in batch.into_iter().enumerate() {
            if !intersecting {
                continue;
            }

            let Some(state) = self.states.get_mut(target) else {
                continue;
            };

            if *state == Visibility::Triggered {
                continue;
            }

            *state = Visibility::Triggered;
            let delay_ms = self
                .stagger_step_ms
                .map(|step| step.saturating_mul(u32::try_from(position).unwrap_or(u32::MAX)))
                .unwrap_or(0);
            triggers.push(Trigger { target, delay_ms });
        }

        triggers
    }

    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == Visibility::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_target_fires_at_most_once() {
        let mut tracker = RevealTracker::new(3);

        let first = tracker.observe_batch([(0, true), (1, false), (2, true)]);
        assert_eq!(
            first,
            vec![
                Trigger { target: 0, delay_ms: 0 },
                Trigger { target: 2, delay_ms: 0 },
            ]
        );

        // exit then re-enter
        assert!(tracker.observe_batch([(0, false), (2, false)]).is_empty());
        let again = tracker.observe_batch([(0, true), (1, true), (2, true)]);
        assert_eq!(again, vec![Trigger { target: 1, delay_ms: 0 }]);

        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn initial_batch_fires_targets_already_in_view() {
        let mut tracker = RevealTracker::new(2);

        let triggers = tracker.observe_batch([(0, true), (1, false)]);

        assert_eq!(triggers, vec![Trigger { target: 0, delay_ms: 0 }]);
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn staggered_group_delays_by_batch_position() {
        let mut tracker = RevealTracker::staggered(4, 150);

        let triggers = tracker.observe_batch([(0, true), (1, true), (2, true), (3, true)]);
        let delays: Vec<u32> = triggers.iter().map(|trigger| trigger.delay_ms).collect();

        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn stagger_counts_positions_of_non_intersecting_entries() {
        let mut tracker = RevealTracker::staggered(3, 150);

        let triggers = tracker.observe_batch([(2, false), (0, true), (1, true)]);

        assert_eq!(
            triggers,
            vec![
                Trigger { target: 0, delay_ms: 150 },
                Trigger { target: 1, delay_ms: 300 },
            ]
        );
    }

    #[test]
    fn unknown_and_duplicate_targets_are_ignored() {
        let mut tracker = RevealTracker::new(1);

        let triggers = tracker.observe_batch([(7, true), (0, true), (0, true)]);

        assert_eq!(triggers, vec![Trigger { target: 0, delay_ms: 0 }]);
    }

    #[test]
    fn groups_describe_hidden_pose() {
        assert_eq!(SECTION_GROUP.hidden_transform(), "translateY(30px)");
        assert_eq!(SKILL_GROUP.hidden_transform(), "translateY(20px)");
        assert!(SKILL_GROUP.staggered);
        assert!(!SECTION_GROUP.staggered);
    }
}
