//! Page view state: expanded syllabus section, expanded accordion and the
//! navigation entry highlighted by scroll position.
//!
//! The state is owned by the view layer and changes only through
//! [`ViewState::apply`], one event at a time.

use ecow::EcoString;
use serde::{Deserialize, Serialize};

/// Thresholds used when reacting to scroll and resize events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ViewConfig {
    /// Distance below the viewport top at which a section counts as reached.
    pub scroll_margin: f64,
    /// Viewport widths below this collapse the accordion.
    pub compact_breakpoint: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll_margin: 96.0,
            compact_breakpoint: 768.0,
        }
    }
}

/// The top edge of a section, in document coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPosition {
    /// Anchor id of the section.
    pub id: EcoString,
    /// Top edge.
    pub top: f64,
}

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A syllabus section header was clicked.
    ToggleSection(usize),
    /// An accordion header was clicked.
    ToggleAccordion(EcoString),
    /// The page scrolled; `sections` are in document order.
    Scrolled {
        /// Current scroll offset.
        offset: f64,
        /// Section positions.
        sections: Vec<SectionPosition>,
    },
    /// The viewport was resized.
    Resized {
        /// New viewport width.
        width: f64,
    },
}

/// Expand/collapse and scroll-spy state of a course page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Index of the expanded syllabus section.
    pub expanded_section: Option<usize>,
    /// Id of the expanded accordion.
    pub expanded_accordion: Option<EcoString>,
    /// Anchor of the section currently scrolled to.
    pub active_section: Option<EcoString>,
}

impl ViewState {
    /// Applies one event. Returns whether the state changed.
    pub fn apply(&mut self, event: &ViewEvent, config: &ViewConfig) -> bool {
        let before = self.clone();
        match event {
            ViewEvent::ToggleSection(index) => {
                self.expanded_section = toggle(self.expanded_section.take(), *index);
            }
            ViewEvent::ToggleAccordion(id) => {
                self.expanded_accordion = toggle(self.expanded_accordion.take(), id.clone());
            }
            ViewEvent::Scrolled { offset, sections } => {
                self.active_section = active_section(*offset + config.scroll_margin, sections);
            }
            ViewEvent::Resized { width } => {
                if *width < config.compact_breakpoint {
                    self.expanded_accordion = None;
                }
            }
        }
        *self != before
    }
}

/// Expands `target`, or collapses it when it is the expanded one.
fn toggle<T: PartialEq>(current: Option<T>, target: T) -> Option<T> {
    match current {
        Some(current) if current == target => None,
        _ => Some(target),
    }
}

/// The last section whose top is at or above `line`.
fn active_section(line: f64, sections: &[SectionPosition]) -> Option<EcoString> {
    sections
        .iter()
        .take_while(|section| section.top <= line)
        .last()
        .map(|section| section.id.clone())
}
