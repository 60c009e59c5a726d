//! Tooltip Button Component
//!
//! A [`Button`] with a hover-intent [`Tooltip`]. Pointer hover on the button
//! and on the tooltip is fed into a [`HoverIntentController`]; the single
//! timer it asks for is armed as a gpui `Task`, so replacing or dropping the
//! task cancels it. Dropping the view drops the task with it.

use std::rc::Rc;

use gpui::{
    div, prelude::*, App, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Task, Window,
};

use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::tooltip::Tooltip;
use crate::domain::config::HoverConfig;
use crate::state::hover_intent::{HoverIntentController, PendingTimer, Transition};

/// Button that shows a tooltip after the pointer dwells on it
pub struct TooltipButton {
    id: SharedString,
    label: SharedString,
    tooltip_text: SharedString,
    variant: ButtonVariant,
    intent: HoverIntentController,
    /// Timer task for the controller's pending timer
    timer_task: Option<Task<()>>,
    on_click: Option<Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl TooltipButton {
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        tooltip_text: impl Into<SharedString>,
        config: &HoverConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.on_release(|this, _cx| {
            this.timer_task = None;
            this.intent.dispose();
        })
        .detach();

        Self {
            id: id.into(),
            label: label.into(),
            tooltip_text: tooltip_text.into(),
            variant: ButtonVariant::Primary,
            intent: HoverIntentController::from_config(config),
            timer_task: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Whether the tooltip is currently shown
    pub fn tooltip_visible(&self) -> bool {
        self.intent.visible()
    }

    fn trigger_hovered(&mut self, hovered: bool, cx: &mut Context<Self>) {
        let transition = if hovered {
            self.intent.on_trigger_enter()
        } else {
            self.intent.on_trigger_leave()
        };
        self.apply(transition, cx);
    }

    fn tooltip_hovered(&mut self, hovered: bool, cx: &mut Context<Self>) {
        let transition = if hovered {
            self.intent.on_popover_enter()
        } else {
            self.intent.on_popover_leave()
        };
        self.apply(transition, cx);
    }

    fn apply(&mut self, transition: Transition, cx: &mut Context<Self>) {
        if transition.cancelled {
            self.timer_task = None;
        }
        if let Some(timer) = transition.scheduled {
            self.timer_task = Some(self.arm(timer, cx));
        }
        if transition.visibility_changed {
            cx.notify();
        }
    }

    fn arm(&self, timer: PendingTimer, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(timer.delay).await;

            // The view may be gone by now; the update then fails and is ignored
            let _ = this.update(cx, |this, cx| {
                if this.intent.fire(timer.id) {
                    cx.notify();
                }
            });
        })
    }
}

impl Render for TooltipButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut button = Button::new(self.id.clone(), self.label.clone())
            .variant(self.variant)
            .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                this.trigger_hovered(*hovered, cx);
            }));

        if let Some(handler) = self.on_click.clone() {
            button = button.on_click(move |event, window, cx| handler(event, window, cx));
        }

        let mut container = div().relative().child(button);

        if self.intent.visible() {
            let tooltip_id = SharedString::from(format!("{}-tooltip", self.id));
            container = container.child(
                Tooltip::new(tooltip_id, self.tooltip_text.clone()).on_hover(cx.listener(
                    |this, hovered: &bool, _window, cx| {
                        this.tooltip_hovered(*hovered, cx);
                    },
                )),
            );
        }

        container
    }
}
