use crate::{DrawHost, SelectorStyle};
use egui::Color32;
use std::ops::{Deref, DerefMut};

/// Ambient draw state shared by every control drawn through a [`GuiContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub background_tint: Color32,
    pub indent_level: usize,
    /// Set while drawing a field whose selected objects disagree on the value
    pub show_mixed_value: bool,
    /// Set by any control that was interacted with. Read through [`GuiContext::change_check`].
    pub changed: bool,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            background_tint: Color32::WHITE,
            indent_level: 0,
            show_mixed_value: false,
            changed: false,
        }
    }
}

pub struct GuiContext<H> {
    pub host: H,
    pub state: DrawState,
    pub style: SelectorStyle,
}

impl<H: DrawHost> GuiContext<H> {
    pub fn new(host: H) -> Self {
        Self::with_style(host, SelectorStyle::default())
    }

    pub fn with_style(host: H, style: SelectorStyle) -> Self {
        Self {
            host,
            state: DrawState::default(),
            style,
        }
    }

    /// Saves tint, indent and mixed flag; they are restored when the returned scope drops.
    /// The `changed` flag is left as the scope's body set it.
    pub fn scoped(&mut self) -> StateScope<'_, H> {
        let saved = self.state;
        StateScope { ctx: self, saved }
    }

    /// Runs `f` with a cleared `changed` flag and returns its result along with whether anything
    /// inside it reported a change. The outer flag keeps any change from before or inside `f`.
    pub fn change_check<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, bool) {
        let outer = self.state.changed;
        self.state.changed = false;
        let r = f(self);
        let changed = self.state.changed;
        self.state.changed = outer || changed;
        (r, changed)
    }
}

pub struct StateScope<'a, H> {
    ctx: &'a mut GuiContext<H>,
    saved: DrawState,
}

impl<'a, H> Deref for StateScope<'a, H> {
    type Target = GuiContext<H>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<'a, H> DerefMut for StateScope<'a, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<'a, H> Drop for StateScope<'a, H> {
    fn drop(&mut self) {
        let changed = self.ctx.state.changed;
        self.ctx.state = DrawState {
            changed,
            ..self.saved
        };
    }
}
