//! Per-frame visual output derived from drawer state.

use crate::config::{DrawerAlignment, LayoutDirection};
use crate::state::{DrawerState, PanelReveal};

/// Where the closed panel sits relative to its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelOffset {
    Pixels(f32),
    /// Fraction of the parent's width.
    ParentFraction(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    /// 0 closed, 1 open. Continuous; content may animate off it.
    pub progress: f32,
    pub translate_x: f32,
    pub backdrop_opacity: f32,
    pub panel_opacity: f32,
    pub edge: DrawerAlignment,
    pub closed_offset: PanelOffset,
    /// Backdrop takes pointer input (and closes the drawer on press).
    pub backdrop_interactive: bool,
    pub backdrop_pressable: bool,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            progress: 0.0,
            translate_x: 0.0,
            backdrop_opacity: 0.0,
            panel_opacity: 0.0,
            edge: DrawerAlignment::Leading,
            closed_offset: PanelOffset::Pixels(0.0),
            backdrop_interactive: false,
            backdrop_pressable: false,
        }
    }
}

pub fn progress(position: f32, width: f32) -> f32 {
    if width == 0.0 {
        return 0.0;
    }
    (position / width).abs().clamp(0.0, 1.0)
}

pub fn derive(state: &DrawerState) -> RenderFrame {
    let width = state.drawer_width;
    let progress = progress(state.position, width);
    let translate_x = match state.alignment {
        DrawerAlignment::Trailing => state.position.max(-width),
        DrawerAlignment::Leading => state.position.min(width),
    };
    let closed_offset = match state.layout_direction {
        LayoutDirection::Rtl => PanelOffset::ParentFraction(1.0),
        LayoutDirection::Ltr => PanelOffset::Pixels(-width),
    };
    let panel_opacity = if state.reveal == PanelReveal::Visible {
        1.0
    } else {
        0.0
    };

    RenderFrame {
        progress,
        translate_x,
        backdrop_opacity: progress,
        panel_opacity,
        edge: state.alignment,
        closed_offset,
        backdrop_interactive: state.declared_open,
        backdrop_pressable: !state.locked,
    }
}
