//! Tooltip Component
//!
//! The popover body shown above a trigger. Visibility is decided by the
//! owner; this element only draws the bubble and reports pointer hover.

use gpui::{
    div, prelude::*, px, relative, App, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::constants::{TOOLTIP_MAX_WIDTH, TOOLTIP_OFFSET};
use crate::theme::colors::ThemeColors;

/// Tooltip bubble anchored above its relatively positioned parent
#[derive(IntoElement)]
pub struct Tooltip {
    id: ElementId,
    text: SharedString,
    on_hover: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
}

impl Tooltip {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            on_hover: None,
        }
    }

    /// Set the pointer enter/leave handler
    pub fn on_hover(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Tooltip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut bubble = div()
            .id(self.id)
            .absolute()
            .left_0()
            .bottom(relative(1.0))
            .mb(px(TOOLTIP_OFFSET))
            .max_w(px(TOOLTIP_MAX_WIDTH))
            .px_2()
            .py_1()
            .bg(ThemeColors::tooltip_bg())
            .border_1()
            .border_color(ThemeColors::tooltip_border())
            .rounded_md()
            .shadow_md()
            .text_color(ThemeColors::text_light())
            .text_size(px(12.0))
            .child(self.text);

        if let Some(handler) = self.on_hover {
            bubble = bubble.on_hover(handler);
        }

        bubble
    }
}
