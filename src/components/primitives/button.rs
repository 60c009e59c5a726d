//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ThemeColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (yellow)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding and font size in pixels
    pub fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (8.0, 4.0, 12.0),
            ButtonSize::Medium => (16.0, 8.0, 14.0),
            ButtonSize::Large => (24.0, 12.0, 16.0),
        }
    }
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;
type HoverHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A clickable button that forwards clicks untouched to its handler
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
    on_hover: Option<HoverHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
            on_hover: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Called with `true` when the pointer enters the button and `false` when it leaves
    pub fn on_hover(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                ThemeColors::button_primary_bg(),
                ThemeColors::button_primary_text(),
                ThemeColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                ThemeColors::button_secondary_bg(),
                ThemeColors::text_primary(),
                ThemeColors::button_secondary_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                ThemeColors::button_ghost_text(),
                ThemeColors::button_ghost_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = self.size.metrics();
        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .px(px(padding_x))
            .py(px(padding_y))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(font_size))
            .rounded_md()
            .opacity(opacity)
            .child(self.label);

        // Hover tracking stays on for disabled buttons so tooltips still explain them
        if let Some(handler) = self.on_hover {
            element = element.on_hover(handler);
        }

        if !self.disabled {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
