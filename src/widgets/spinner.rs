//! Spinner widget: a number with increase and decrease buttons.
//!
//! The value is shown with a fixed number of decimals. Unless set explicitly,
//! that is the larger decimal count of the initial value and the step. Each
//! step rounds the value to those decimals, so repeated `0.1` steps never
//! accumulate float noise, and the handler always sees the rounded value.

use crate::config::WidgetHeights;
use crate::description::{TextProps, WidgetProps};
use crate::event::{Event, Interaction};
use crate::widget::traits::{Control, WidgetKind};

/// Number of digits after the decimal point in the shortest representation
/// of `value`.
pub fn count_decimals(value: f64) -> usize {
    if value.fract() == 0.0 {
        return 0;
    }
    value
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Round `value` to `decimals` places.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// A numeric spinner.
#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    value: f64,
    step: f64,
    decimals: usize,
}

impl Spinner {
    pub fn new(value: f64, step: f64) -> Self {
        let decimals = count_decimals(step).max(count_decimals(value));
        Self { value, step, decimals }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value as-is; it is only rounded for display.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    /// Decimal places shown and kept on each step.
    pub fn decimal_places(&self) -> usize {
        self.decimals
    }

    pub fn set_decimal_places(&mut self, decimals: usize) {
        self.decimals = decimals;
    }

    /// The value as displayed by the host.
    pub fn text(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }

    fn step_by(&mut self, delta: f64) -> Event {
        self.value = round_to(self.value + delta, self.decimals);
        Event::ValueChanged(self.value)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Control for Spinner {
    const KIND: &'static str = "spinner";

    fn widget_type(&self) -> &'static str {
        "spinner"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::Text(TextProps { text: self.text() })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.spinner
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        match interaction {
            Interaction::Increment => Some(self.step_by(self.step)),
            Interaction::Decrement => Some(self.step_by(-self.step)),
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
    fn decimals_from_value_or_step() {
        assert_eq!(count_decimals(3.0), 0);
        assert_eq!(count_decimals(0.25), 2);
        assert_eq!(count_decimals(-1.5), 1);
        assert_eq!(Spinner::new(1.0, 0.1).decimal_places(), 1);
        assert_eq!(Spinner::new(1.125, 0.5).decimal_places(), 3);
        assert_eq!(Spinner::new(4.0, 2.0).decimal_places(), 0);
    }

    #[test]
    fn steps_round_before_reporting() {
        let mut spinner = Spinner::new(0.0, 0.1);
        for _ in 0..3 {
            spinner.interact(Interaction::Increment);
        }
        // 0.1 + 0.1 + 0.1 is 0.30000000000000004 in f64.
        assert_eq!(spinner.value(), 0.3);
        assert_eq!(spinner.interact(Interaction::Decrement), Some(Event::ValueChanged(0.2)));
    }

    #[test]
    fn text_uses_fixed_decimals() {
        let mut spinner = Spinner::new(2.0, 0.25);
        assert_eq!(spinner.text(), "2.00");
        spinner.set_decimal_places(0);
        assert_eq!(spinner.text(), "2");
        assert_eq!(spinner.props(), WidgetProps::Text(TextProps { text: "2".into() }));
    }

    #[test]
    fn ignores_other_interactions() {
        let mut spinner = Spinner::default();
        assert_eq!(spinner.interact(Interaction::Click), None);
        assert_eq!(spinner.value(), 0.0);
    }
}
