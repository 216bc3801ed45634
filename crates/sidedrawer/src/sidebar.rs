//! Sidebar item resolution: which label each route shows in the drawer.

use std::fmt;
use std::rc::Rc;

use crate::error::DrawerError;
use crate::navigation::{Descriptors, DrawerNavigationState};

/// Argument passed to a label callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelContext {
    pub focused: bool,
    pub tint_color: u32,
}

/// A route's drawer label: fixed text or computed per item state.
#[derive(Clone)]
pub enum DrawerLabel {
    Text(String),
    Render(Rc<dyn Fn(LabelContext) -> Option<String>>),
}

impl DrawerLabel {
    pub fn text(text: impl Into<String>) -> Self {
        DrawerLabel::Text(text.into())
    }

    pub fn render(render: impl Fn(LabelContext) -> Option<String> + 'static) -> Self {
        DrawerLabel::Render(Rc::new(render))
    }
}

impl fmt::Debug for DrawerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerLabel::Text(text) => f.debug_tuple("Text").field(text).finish(),
            DrawerLabel::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// ARGB tint colors for focused and unfocused items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemTint {
    pub active: u32,
    pub inactive: u32,
}

impl Default for ItemTint {
    fn default() -> Self {
        Self {
            active: 0xFF21_96F3,
            inactive: 0xDE00_0000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub key: String,
    pub route_name: String,
    pub label: String,
    pub focused: bool,
    pub tint_color: u32,
}

/// One item per route, in route order.
///
/// The label is the route's `drawer_label`, else its `title`, else the route
/// name. Fails when a route has no descriptor or a label callback returns
/// nothing.
pub fn resolve_items(
    state: &DrawerNavigationState,
    descriptors: &Descriptors,
    tint: ItemTint,
) -> Result<Vec<SidebarItem>, DrawerError> {
    state
        .routes
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let descriptor =
                descriptors
                    .get(&route.key)
                    .ok_or_else(|| DrawerError::MissingDescriptor {
                        route: route.key.clone(),
                    })?;
            let focused = index == state.index;
            let tint_color = if focused { tint.active } else { tint.inactive };
            let options = &descriptor.options;

            let label = match (&options.drawer_label, &options.title) {
                (Some(DrawerLabel::Text(text)), _) => text.clone(),
                (Some(DrawerLabel::Render(render)), _) => {
                    render(LabelContext {
                        focused,
                        tint_color,
                    })
                    .ok_or_else(|| DrawerError::InvalidLabel {
                        route: route.key.clone(),
                    })?
                }
                (None, Some(title)) => title.clone(),
                (None, None) => route.route_name.clone(),
            };

            Ok(SidebarItem {
                key: route.key.clone(),
                route_name: route.route_name.clone(),
                label,
                focused,
                tint_color,
            })
        })
        .collect()
}
