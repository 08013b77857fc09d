//! Focus Management
//!
//! Circular focus over the scanned elements. `apply` is the only way the
//! focus index changes.

use crate::keyboard_nav::NavCommand;
use crate::scanner::FocusableElement;

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Focus moved to this index; announce it
    Moved(usize),
    /// Activate the element at this index; focus unchanged
    Activate(usize),
    /// Nothing to do (empty set, or activate while idle)
    Ignored,
}

/// Focus navigator state
#[derive(Debug, Clone)]
pub struct FocusNavigator<N> {
    elements: Vec<FocusableElement<N>>,
    /// `None` is the idle state
    current: Option<usize>,
}

impl<N> FocusNavigator<N> {
    /// Start idle over a fresh scan
    pub fn new(elements: Vec<FocusableElement<N>>) -> Self {
        Self { elements, current: None }
    }

    pub fn elements(&self) -> &[FocusableElement<N>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Focused index, `None` while idle
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&FocusableElement<N>> {
        self.current.and_then(|i| self.elements.get(i))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FocusableElement<N>> {
        self.elements.get_mut(index)
    }

    /// Apply a command to the state machine
    pub fn apply(&mut self, command: NavCommand) -> NavOutcome {
        let len = self.elements.len();
        if len == 0 {
            return NavOutcome::Ignored;
        }

        match command {
            NavCommand::Next => {
                let next = self.current.map_or(0, |i| (i + 1) % len);
                self.current = Some(next);
                NavOutcome::Moved(next)
            }
            NavCommand::Previous => {
                let prev = self.current.map_or(len - 1, |i| (i + len - 1) % len);
                self.current = Some(prev);
                NavOutcome::Moved(prev)
            }
            NavCommand::Activate => match self.current {
                Some(i) => NavOutcome::Activate(i),
                None => NavOutcome::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{ElementRole, ElementState};

    fn navigator(n: usize) -> FocusNavigator<usize> {
        let elements = (0..n)
            .map(|node| FocusableElement {
                node,
                role: ElementRole::Button,
                label: format!("button {node}"),
                state: ElementState::None,
            })
            .collect();
        FocusNavigator::new(elements)
    }

    #[test]
    fn test_focus_navigator() {
        let mut nav = navigator(4);
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.apply(NavCommand::Next), NavOutcome::Moved(0));
        assert_eq!(nav.apply(NavCommand::Next), NavOutcome::Moved(1));
        assert_eq!(nav.apply(NavCommand::Previous), NavOutcome::Moved(0));
        assert_eq!(nav.apply(NavCommand::Previous), NavOutcome::Moved(3));
        assert_eq!(nav.current().map(|e| e.node), Some(3));
    }

    #[test]
    fn test_previous_from_idle_wraps_to_last() {
        let mut nav = navigator(3);
        assert_eq!(nav.apply(NavCommand::Previous), NavOutcome::Moved(2));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for n in 1..=7 {
            let mut nav = navigator(n);
            for start in 0..n {
                while nav.current_index() != Some(start) {
                    nav.apply(NavCommand::Next);
                }
                for _ in 0..n {
                    nav.apply(NavCommand::Next);
                }
                assert_eq!(nav.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_next_previous_inverse() {
        let mut nav = navigator(5);
        nav.apply(NavCommand::Next);
        for _ in 0..12 {
            let before = nav.current_index();
            nav.apply(NavCommand::Next);
            nav.apply(NavCommand::Previous);
            assert_eq!(nav.current_index(), before);
            nav.apply(NavCommand::Previous);
            nav.apply(NavCommand::Next);
            assert_eq!(nav.current_index(), before);
            nav.apply(NavCommand::Next);
        }
    }

    #[test]
    fn test_activate_keeps_focus() {
        let mut nav = navigator(2);
        assert_eq!(nav.apply(NavCommand::Activate), NavOutcome::Ignored);
        nav.apply(NavCommand::Next);
        nav.apply(NavCommand::Next);
        assert_eq!(nav.apply(NavCommand::Activate), NavOutcome::Activate(1));
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn test_empty_set_ignores_everything() {
        let mut nav = navigator(0);
        for command in [NavCommand::Next, NavCommand::Previous, NavCommand::Activate] {
            assert_eq!(nav.apply(command), NavOutcome::Ignored);
        }
        assert_eq!(nav.current_index(), None);
    }
}
