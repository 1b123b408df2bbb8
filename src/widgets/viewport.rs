//! Viewport widget: a live view into the game world.

use crate::config::WidgetHeights;
use crate::description::{ViewportProps, WidgetProps};
use crate::geometry::Offset;
use crate::widget::traits::{Control, WidgetKind};

/// A viewport focused on a world position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Viewport {
    view: Offset,
    zoom: i32,
    rotation: i32,
}

impl Viewport {
    pub fn new(view_x: f64, view_y: f64) -> Self {
        Self { view: Offset::new(view_x, view_y), zoom: 0, rotation: 0 }
    }

    /// The world position the viewport is centred on.
    pub fn view(&self) -> Offset {
        self.view
    }

    pub fn set_view(&mut self, view_x: f64, view_y: f64) {
        self.view = Offset::new(view_x, view_y);
    }

    /// Zoom level; 0 is fully zoomed in.
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom;
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Set the rotation, wrapped to the host's four quarter turns.
    pub fn set_rotation(&mut self, rotation: i32) {
        self.rotation = rotation.rem_euclid(4);
    }
}

impl Control for Viewport {
    const KIND: &'static str = "viewport";

    fn widget_type(&self) -> &'static str {
        "viewport"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::Viewport(ViewportProps {
            view_x: self.view.x,
            view_y: self.view.y,
            zoom: self.zoom,
            rotation: self.rotation,
        })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.viewport
    }

    fn from_kind(kind: &WidgetKind) -> Option<&Self> {
        Self::borrow_kind(kind)
    }

    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
        Self::borrow_kind_mut(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        let mut viewport = Viewport::new(0.0, 0.0);
        viewport.set_rotation(5);
        assert_eq!(viewport.rotation(), 1);
        viewport.set_rotation(-1);
        assert_eq!(viewport.rotation(), 3);
    }

    #[test]
    fn props_carry_view() {
        let mut viewport = Viewport::new(1024.0, 640.0);
        viewport.set_zoom(2);
        assert_eq!(
            viewport.props(),
            WidgetProps::Viewport(ViewportProps { view_x: 1024.0, view_y: 640.0, zoom: 2, rotation: 0 })
        );
        assert_eq!(viewport.view(), Offset::new(1024.0, 640.0));
    }
}
