//! Group box: a vertical box drawn with a frame and an optional label.
//!
//! Unlike the leaf widgets, a group box is a container. The frame itself is a
//! host widget, described right before the group's children.

use crate::description::{TextProps, WidgetProps};
use crate::error::{Error, Result};
use crate::tree::{Frame, NodeId};
use crate::ui::Ui;

/// Frame state of a group box container.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBox {
    pub(crate) name: String,
    pub(crate) text: String,
}

impl GroupBox {
    pub fn new(name: String, text: impl Into<String>) -> Self {
        Self { name, text: text.into() }
    }

    /// The unique host name of the frame widget.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The label; empty for a bare frame.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn widget_type(&self) -> &'static str {
        "groupbox"
    }

    pub(crate) fn props(&self) -> WidgetProps {
        WidgetProps::Text(TextProps { text: self.text.clone() })
    }
}

impl Ui {
    /// The group box frame of a container, if it has one.
    pub fn group_box_of(&self, id: NodeId) -> Option<&GroupBox> {
        match &self.tree[id].container()?.frame {
            Frame::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Change a group box label.
    ///
    /// Showing or hiding the label moves the content area, so the top padding
    /// changes by the configured label delta and the group is laid out again.
    pub fn set_group_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let delta = self.config.group_box.label_delta();
        let wrong = Error::WrongWidgetKind { node: id, expected: "group box" };

        let container = self.tree[id].container_mut().ok_or(wrong)?;
        let Frame::Group(group) = &mut container.frame else {
            return Err(Error::WrongWidgetKind { node: id, expected: "group box" });
        };
        let toggled = group.text.is_empty() != text.is_empty();
        group.text = text;
        if toggled {
            if group.text.is_empty() {
                container.padding.top -= delta;
            } else {
                container.padding.top += delta;
            }
        }

        if toggled {
            self.on_dimensions_changed(id);
        } else {
            self.request_sync(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_toggles_top_padding() {
        let mut ui = Ui::new();
        let group = ui.group_box("");
        let bare = ui.container(group).unwrap().padding().top;

        ui.set_group_text(group, "Options").unwrap();
        assert_eq!(ui.container(group).unwrap().padding().top, bare + 5.0);

        ui.set_group_text(group, "Settings").unwrap();
        assert_eq!(ui.container(group).unwrap().padding().top, bare + 5.0);
        assert_eq!(ui.group_box_of(group).unwrap().text(), "Settings");

        ui.set_group_text(group, "").unwrap();
        assert_eq!(ui.container(group).unwrap().padding().top, bare);
    }

    #[test]
    fn plain_box_is_not_a_group() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        assert!(ui.group_box_of(column).is_none());
        assert!(matches!(
            ui.set_group_text(column, "x"),
            Err(Error::WrongWidgetKind { expected: "group box", .. })
        ));
    }

    #[test]
    fn props() {
        let group = GroupBox::new("groupbox-0".into(), "Colours");
        assert_eq!(group.widget_type(), "groupbox");
        assert_eq!(group.props(), WidgetProps::Text(TextProps { text: "Colours".into() }));
    }
}
