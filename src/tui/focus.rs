//! # Focus Ring
//!
//! The ordered set of components that can receive routed input (Tab order).
//! Rotating the ring deselects every member and selects exactly one.
//!
//! Before the first rotation nothing is selected; the dashboard rotates
//! once at startup so there is always a write target.

use log::warn;

use crate::core::UiLog;
use crate::tui::component::ComponentId;
use crate::tui::screen::Screen;

#[derive(Debug)]
pub struct FocusRing {
    members: Vec<ComponentId>,
    current: Option<usize>,
    log: UiLog,
}

impl FocusRing {
    /// Build a ring in Tab order. A component listed twice keeps its first slot.
    pub fn new(order: impl IntoIterator<Item = ComponentId>, log: UiLog) -> Self {
        let mut members: Vec<ComponentId> = Vec::new();
        for id in order {
            if members.contains(&id) {
                warn!("Component {:?} listed twice in focus order, ignoring repeat", id);
                continue;
            }
            members.push(id);
        }
        Self {
            members,
            current: None,
            log,
        }
    }

    pub fn members(&self) -> &[ComponentId] {
        &self.members
    }

    /// The focused component, if the ring has rotated at least once.
    pub fn current(&self) -> Option<ComponentId> {
        self.current.map(|i| self.members[i])
    }

    /// Focus the next member, wrapping to the first. The first call focuses
    /// the first member. Returns the new write target.
    pub fn next(&mut self, screen: &mut Screen) -> Option<ComponentId> {
        if self.members.is_empty() {
            return None;
        }
        let idx = match self.current {
            Some(i) if i + 1 < self.members.len() => i + 1,
            Some(_) | None => 0,
        };
        Some(self.focus(idx, screen))
    }

    /// Focus the previous member, wrapping to the last. The first call
    /// focuses the last member.
    pub fn previous(&mut self, screen: &mut Screen) -> Option<ComponentId> {
        if self.members.is_empty() {
            return None;
        }
        let idx = match self.current {
            Some(0) | None => self.members.len() - 1,
            Some(i) => i - 1,
        };
        Some(self.focus(idx, screen))
    }

    fn focus(&mut self, idx: usize, screen: &mut Screen) -> ComponentId {
        for id in &self.members {
            if let Some(component) = screen.get_mut(*id) {
                component.deselect();
            }
        }
        self.log
            .write("selection handler", format!("selecting component at index {idx}"));
        let id = self.members[idx];
        if let Some(component) = screen.get_mut(id) {
            component.select();
        }
        self.current = Some(idx);
        id
    }
}
