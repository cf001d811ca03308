//! # Screen
//!
//! The render aggregator. Owns every component in registration order and
//! redraws all of them on each pass: no dirty tracking, no diffing.
//! Registration order is paint order, so a later component wins where two
//! rectangles overlap.

use ratatui::Frame;

use crate::core::config::Theme;
use crate::tui::component::{Component, ComponentId};

#[derive(Debug, Default)]
pub struct Screen {
    components: Vec<Component>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component to the end of the paint order.
    pub fn register(&mut self, component: Component) -> ComponentId {
        self.components.push(component);
        ComponentId(self.components.len() - 1)
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// One full redraw pass.
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        for component in &self.components {
            component.draw(frame, theme);
        }
    }
}
