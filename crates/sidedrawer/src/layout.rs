//! Turns an engine position into compositing values for the three panes.

use crate::config::{DrawerPosition, DrawerType};

/// Drawer pane visibility while its width is unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerOpacity {
    /// No width yet; drawing the drawer would flash it at the wrong size.
    #[default]
    Hidden,
    /// Width just arrived; shown from the next frame on.
    Revealing,
    Visible,
}

impl DrawerOpacity {
    pub fn value(self) -> f32 {
        match self {
            DrawerOpacity::Visible => 1.0,
            DrawerOpacity::Hidden | DrawerOpacity::Revealing => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub position: f32,
    pub is_open: bool,
    pub drawer_width: f32,
    pub drawer_position: DrawerPosition,
    pub drawer_type: DrawerType,
    pub drawer_opacity: DrawerOpacity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerLayout {
    /// Engine position clamped to the drawer's travel.
    pub translate_x: f32,
    /// 0 closed, 1 fully open.
    pub progress: f32,
    pub content_translate_x: f32,
    pub drawer_translate_x: f32,
    /// Inset of the drawer from the edge it hangs from; negative means the
    /// resting drawer sits offscreen.
    pub drawer_edge_inset: f32,
    pub drawer_z_index: i32,
    pub drawer_opacity: f32,
    pub overlay_opacity: f32,
    /// The overlay takes touches (and taps close the drawer).
    pub overlay_interactive: bool,
    pub accessibility_modal: bool,
}

pub fn compose(input: &LayoutInput) -> DrawerLayout {
    let width = input.drawer_width.max(0.0);
    let translate_x = match input.drawer_position {
        DrawerPosition::Left => input.position.clamp(0.0, width),
        DrawerPosition::Right => input.position.clamp(-width, 0.0),
    };
    let progress = if width == 0.0 {
        0.0
    } else {
        translate_x.abs() / width
    };

    let content_translate_x = match input.drawer_type {
        DrawerType::Front => 0.0,
        DrawerType::Back | DrawerType::Slide => translate_x,
    };
    let drawer_translate_x = match input.drawer_type {
        DrawerType::Back => width * input.drawer_position.direction(),
        DrawerType::Front | DrawerType::Slide => translate_x,
    };

    DrawerLayout {
        translate_x,
        progress,
        content_translate_x,
        drawer_translate_x,
        drawer_edge_inset: -width,
        drawer_z_index: if input.drawer_type == DrawerType::Back {
            -1
        } else {
            0
        },
        drawer_opacity: input.drawer_opacity.value(),
        overlay_opacity: progress,
        overlay_interactive: progress > 0.0,
        accessibility_modal: input.is_open,
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
