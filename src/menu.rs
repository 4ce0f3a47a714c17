//! Mobile menu open/close transitions.
//!
//! The panel's hidden class is the only state. A single document-level click
//! listener classifies where the click landed and asks [`next_hidden`] what
//! the class should be afterwards.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Where a document click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    Button,
    Panel,
    Outside,
}

impl ClickOrigin {
    /// The button wins when it is nested inside the panel.
    pub fn classify(in_button: bool, in_panel: bool) -> Self {
        if in_button {
            Self::Button
        } else if in_panel {
            Self::Panel
        } else {
            Self::Outside
        }
    }
}

/// Hidden state after a click.
pub fn next_hidden(hidden: bool, origin: ClickOrigin) -> bool {
    match origin {
        ClickOrigin::Button => !hidden,
        ClickOrigin::Panel => hidden,
        ClickOrigin::Outside => true,
    }
}
