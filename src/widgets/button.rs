//! Button widget: a clickable button showing text or an image.
//!
//! Text buttons draw a border by default, image buttons don't. A button can
//! also be held in the pressed position, which is how toggle buttons are
//! built on the host.

use crate::config::WidgetHeights;
use crate::description::{ButtonProps, WidgetProps};
use crate::event::{Event, Interaction};
use crate::widget::traits::{Control, WidgetKind};

// ---------------------------------------------------------------------------
// ButtonFace
// ---------------------------------------------------------------------------

/// What a button shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonFace {
    Text(String),
    /// A host sprite index.
    Image(u32),
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A clickable button.
///
/// # Examples
///
/// ```
/// use oui::widgets::Button;
///
/// let ok = Button::text("OK");
/// assert!(ok.has_border());
///
/// let icon = Button::image(5029).with_pressed(true);
/// assert!(!icon.has_border());
/// assert!(icon.is_pressed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    face: ButtonFace,
    border: bool,
    pressed: bool,
}

impl Button {
    /// A bordered button with a text label.
    pub fn text(text: impl Into<String>) -> Self {
        Self { face: ButtonFace::Text(text.into()), border: true, pressed: false }
    }

    /// A borderless button showing a sprite.
    pub fn image(image: u32) -> Self {
        Self { face: ButtonFace::Image(image), border: false, pressed: false }
    }

    /// Set the border (builder pattern).
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Set the pressed state (builder pattern).
    pub fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    /// What the button shows.
    pub fn face(&self) -> &ButtonFace {
        &self.face
    }

    /// Replace the face.
    pub fn set_face(&mut self, face: ButtonFace) {
        self.face = face;
    }

    /// The label, for text buttons.
    pub fn label(&self) -> Option<&str> {
        match &self.face {
            ButtonFace::Text(text) => Some(text),
            ButtonFace::Image(_) => None,
        }
    }

    /// Whether a border is drawn.
    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Whether the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

impl Control for Button {
    const KIND: &'static str = "button";

    fn widget_type(&self) -> &'static str {
        "button"
    }

    fn props(&self) -> WidgetProps {
        let (text, image) = match &self.face {
            ButtonFace::Text(text) => (Some(text.clone()), None),
            ButtonFace::Image(image) => (None, Some(*image)),
        };
        WidgetProps::Button(ButtonProps { text, image, border: self.border, is_pressed: self.pressed })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.button
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        match interaction {
            Interaction::Click => Some(Event::Clicked),
            _ => None,
        }
    }

    fn from_kind(kind: &WidgetKind) -> Option<&Self> {
        Self::borrow_kind(kind)
    }

    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
        Self::borrow_kind_mut(kind)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_button_defaults() {
        let button = Button::text("Build");
        assert_eq!(button.label(), Some("Build"));
        assert!(button.has_border());
        assert!(!button.is_pressed());
    }

    #[test]
    fn image_button_has_no_border() {
        let button = Button::image(29);
        assert_eq!(button.label(), None);
        assert!(!button.has_border());
    }

    #[test]
    fn props_follow_face() {
        let props = Button::text("Go").props();
        assert_eq!(
            props,
            WidgetProps::Button(ButtonProps {
                text: Some("Go".into()),
                image: None,
                border: true,
                is_pressed: false,
            })
        );

        let props = Button::image(7).with_pressed(true).props();
        assert_eq!(
            props,
            WidgetProps::Button(ButtonProps { text: None, image: Some(7), border: false, is_pressed: true })
        );
    }

    #[test]
    fn click_produces_event() {
        let mut button = Button::text("Go");
        assert_eq!(button.interact(Interaction::Click), Some(Event::Clicked));
        assert_eq!(button.interact(Interaction::Check(true)), None);
    }
}
