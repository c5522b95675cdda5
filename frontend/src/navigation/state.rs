use std::rc::Rc;
use yew::prelude::*;

use crate::config::COMPACT_SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMode {
    #[default]
    Transparent,
    Compact,
}

impl NavMode {
    pub fn for_offset(offset: f64) -> Self {
        if offset > COMPACT_SCROLL_THRESHOLD {
            NavMode::Compact
        } else {
            NavMode::Transparent
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    /// The page scroll offset changed (px from the top).
    Scrolled(f64),
    OpenMenu,
    CloseMenu,
    /// A navigation link was activated.
    FollowLink,
}

/// The nav bar's two independent state slices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub mode: NavMode,
    pub menu: MenuState,
}

impl NavState {
    pub fn is_compact(&self) -> bool {
        self.mode == NavMode::Compact
    }

    pub fn menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn next(self, action: NavAction) -> NavState {
        match action {
            NavAction::Scrolled(offset) => NavState {
                mode: NavMode::for_offset(offset),
                ..self
            },
            NavAction::OpenMenu => NavState {
                menu: MenuState::Open,
                ..self
            },
            NavAction::CloseMenu | NavAction::FollowLink => NavState {
                menu: MenuState::Closed,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            // Scroll events fire constantly; skip the re-render when nothing moved.
            self
        } else {
            log::debug!("nav {:?} -> {:?} on {:?}", *self, next, action);
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_transparent_and_closed() {
        let state = NavState::default();
        assert_eq!(state.mode, NavMode::Transparent);
        assert_eq!(state.menu, MenuState::Closed);
    }

    #[test]
    fn compact_flag_tracks_offset_without_hysteresis() {
        let offsets = [0.0, 5.0, 10.0, 10.5, 11.0, 9.0, 300.0, 10.0, 0.0, 10.01, 10.0];
        let mut state = NavState::default();
        for offset in offsets {
            state = state.next(NavAction::Scrolled(offset));
            assert_eq!(state.is_compact(), offset > 10.0, "offset {offset}");
        }
    }

    #[test]
    fn exactly_threshold_is_not_compact() {
        assert_eq!(NavMode::for_offset(10.0), NavMode::Transparent);
        assert_eq!(NavMode::for_offset(10.0001), NavMode::Compact);
    }

    #[test]
    fn open_then_close() {
        let open = NavState::default().next(NavAction::OpenMenu);
        assert!(open.menu_open());
        assert!(!open.next(NavAction::CloseMenu).menu_open());
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let state = NavState::default()
            .next(NavAction::OpenMenu)
            .next(NavAction::FollowLink);
        assert_eq!(state.menu, MenuState::Closed);
    }

    #[test]
    fn scrolling_never_touches_the_menu() {
        let mut state = NavState::default().next(NavAction::OpenMenu);
        for offset in [0.0, 50.0, 3.0, 1000.0] {
            state = state.next(NavAction::Scrolled(offset));
            assert!(state.menu_open());
        }
    }

    #[test]
    fn menu_actions_never_touch_the_mode() {
        let compact = NavState::default().next(NavAction::Scrolled(200.0));
        for action in [NavAction::OpenMenu, NavAction::CloseMenu, NavAction::FollowLink] {
            assert!(compact.next(action).is_compact());
        }
    }

    #[test]
    fn reducer_reuses_state_when_unchanged() {
        let state = Rc::new(NavState::default());
        let same = state.clone().reduce(NavAction::Scrolled(3.0));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(NavAction::Scrolled(30.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.is_compact());
    }
}
