use std::rc::Rc;
use yew::prelude::*;

/// A visual pose: opacity plus a translation in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const SETTLED: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0 };

    pub const fn hidden(x: f64, y: f64) -> Self {
        Pose { opacity: 0.0, x, y }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0);",
            self.opacity, self.x, self.y
        )
    }
}

/// How a block moves from its initial pose to its target pose once revealed.
///
/// Durations and delays are in seconds, the unit the inline `transition`
/// property is written in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub target: Pose,
    pub duration: f64,
    pub delay: f64,
}

impl Motion {
    const DEFAULT_DURATION: f64 = 0.6;

    pub const fn new(initial: Pose, target: Pose) -> Self {
        Motion {
            initial,
            target,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
        }
    }

    pub const fn fade() -> Self {
        Self::new(Pose::hidden(0.0, 0.0), Pose::SETTLED)
    }

    pub const fn fade_up() -> Self {
        Self::new(Pose::hidden(0.0, 20.0), Pose::SETTLED)
    }

    pub const fn fade_down() -> Self {
        Self::new(Pose::hidden(0.0, -20.0), Pose::SETTLED)
    }

    pub const fn slide_from_left() -> Self {
        Self::new(Pose::hidden(-50.0, 0.0), Pose::SETTLED)
    }

    pub const fn slide_from_right() -> Self {
        Self::new(Pose::hidden(50.0, 0.0), Pose::SETTLED)
    }

    pub const fn duration(self, secs: f64) -> Self {
        Motion { duration: secs, ..self }
    }

    pub const fn delay(self, secs: f64) -> Self {
        Motion { delay: secs, ..self }
    }

    /// Inline style for the block. The transition is always present so the
    /// flip from initial to target animates instead of jumping.
    pub fn style(&self, revealed: bool) -> String {
        let pose = if revealed { self.target } else { self.initial };
        format!(
            "{} transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
            pose.css(),
            d = self.duration,
            delay = self.delay,
        )
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::fade_up()
    }
}

/// What flips a block into its revealed state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// First time at least `threshold` of the block is inside the viewport.
    /// `0.0` means any pixel.
    InView { threshold: f64 },
    /// Right after the block mounts, regardless of scroll position.
    OnMount,
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::InView { threshold: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    Visibility(bool),
    Mounted,
    /// The browser cannot report visibility; show the content.
    Unsupported,
}

/// Per-block reveal flag. Goes from hidden to revealed at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the state after `event`, or `None` when nothing changes.
    pub fn apply(&self, event: RevealEvent) -> Option<RevealState> {
        if self.revealed {
            return None;
        }
        match event {
            RevealEvent::Visibility(false) => None,
            RevealEvent::Visibility(true) | RevealEvent::Mounted | RevealEvent::Unsupported => {
                Some(RevealState { revealed: true })
            }
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[RevealEvent]) -> Vec<bool> {
        let mut state = Rc::new(RevealState::default());
        events
            .iter()
            .map(|event| {
                state = state.clone().reduce(*event);
                state.revealed()
            })
            .collect()
    }

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().revealed());
    }

    #[test]
    fn stays_hidden_until_first_intersection() {
        let trace = run(&[
            RevealEvent::Visibility(false),
            RevealEvent::Visibility(false),
            RevealEvent::Visibility(true),
        ]);
        assert_eq!(trace, vec![false, false, true]);
    }

    #[test]
    fn never_reverts_after_scrolling_out() {
        let trace = run(&[
            RevealEvent::Visibility(true),
            RevealEvent::Visibility(false),
            RevealEvent::Visibility(true),
            RevealEvent::Visibility(false),
        ]);
        assert_eq!(trace, vec![true, true, true, true]);
    }

    #[test]
    fn flips_at_most_once() {
        let events = [
            RevealEvent::Visibility(false),
            RevealEvent::Visibility(true),
            RevealEvent::Visibility(false),
            RevealEvent::Mounted,
            RevealEvent::Visibility(true),
        ];
        let trace = run(&events);
        let flips = trace.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn reduce_keeps_same_rc_once_revealed() {
        let revealed = Rc::new(RevealState::default()).reduce(RevealEvent::Mounted);
        let again = revealed.clone().reduce(RevealEvent::Visibility(false));
        assert!(Rc::ptr_eq(&revealed, &again));
    }

    #[test]
    fn unsupported_environment_shows_content() {
        assert_eq!(run(&[RevealEvent::Unsupported]), vec![true]);
    }

    #[test]
    fn style_switches_pose_and_keeps_timing() {
        let motion = Motion::fade_up().duration(0.5).delay(0.2);
        let hidden = motion.style(false);
        let shown = motion.style(true);

        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 20px, 0)"));
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0)"));
        assert!(shown.contains("opacity 0.5s ease-out 0.2s"));
    }

    #[test]
    fn slides_start_offset_horizontally() {
        assert_eq!(Motion::slide_from_left().initial.x, -50.0);
        assert_eq!(Motion::slide_from_right().initial.x, 50.0);
    }
}
