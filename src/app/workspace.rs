//! Workspace - Demo Window Content
//!
//! Shows a plain button next to a non-interactive and an interactive
//! tooltip button, with a click counter to confirm clicks are forwarded.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, Entity, FontWeight, IntoElement,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::tooltip_button::TooltipButton;
use crate::domain::config::{AppConfig, HoverConfig};
use crate::theme::colors::ThemeColors;

/// Main workspace holding the demo controls
pub struct Workspace {
    clicks: usize,
    last_clicked: Option<SharedString>,
    plain_tooltip: Entity<TooltipButton>,
    interactive_tooltip: Entity<TooltipButton>,
}

impl Workspace {
    pub fn new(config: AppConfig, cx: &mut Context<Self>) -> Self {
        let workspace = cx.weak_entity();

        let plain_config = HoverConfig {
            interactive: false,
            ..config.tooltip.clone()
        };
        let interactive_config = HoverConfig {
            interactive: true,
            ..config.tooltip
        };

        let plain_tooltip = {
            let workspace = workspace.clone();
            cx.new(|cx| {
                TooltipButton::new(
                    "plain-tooltip",
                    "Hover me",
                    "Shown after a short dwell, hidden shortly after you leave.",
                    &plain_config,
                    cx,
                )
                .variant(ButtonVariant::Secondary)
                .on_click(move |_event, _window, cx: &mut App| {
                    let _ = workspace.update(cx, |this, cx| this.record_click("Hover me", cx));
                })
            })
        };

        let interactive_tooltip = cx.new(|cx| {
            TooltipButton::new(
                "interactive-tooltip",
                "Interactive",
                "Move onto this tooltip to keep it open.",
                &interactive_config,
                cx,
            )
            .on_click(move |_event, _window, cx: &mut App| {
                let _ = workspace.update(cx, |this, cx| this.record_click("Interactive", cx));
            })
        });

        Self {
            clicks: 0,
            last_clicked: None,
            plain_tooltip,
            interactive_tooltip,
        }
    }

    fn record_click(&mut self, label: &'static str, cx: &mut Context<Self>) {
        self.clicks += 1;
        self.last_clicked = Some(label.into());
        tracing::info!(label, clicks = self.clicks, "button clicked");
        cx.notify();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let status = match &self.last_clicked {
            Some(label) => format!("{} clicks, last: {label}", self.clicks),
            None => "No clicks yet".to_string(),
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .bg(ThemeColors::background())
            .child(
                div()
                    .text_color(ThemeColors::text_primary())
                    .text_size(px(18.0))
                    .font_weight(FontWeight::MEDIUM)
                    .child("Hover intent demo"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(Button::ghost("plain-button", "Plain button").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.record_click("Plain button", cx);
                        },
                    )))
                    .child(self.plain_tooltip.clone())
                    .child(self.interactive_tooltip.clone()),
            )
            .child(
                div()
                    .text_color(ThemeColors::text_secondary())
                    .text_size(px(12.0))
                    .child(status),
            )
    }
}
