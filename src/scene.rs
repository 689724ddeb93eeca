//! 3D reservoir panel placeholder
//!
//! The geo-steering section reserves a container for a 3D reservoir model.
//! The demo fills it with a static placeholder; "updates" and view controls
//! only log and flip display flags.

use serde::Serialize;
use tracing::info;

use crate::page::{element_ids, render, Page};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene3d {
    /// Whether the placeholder was written into the page
    pub mounted: bool,
    pub updates: u64,
    pub wireframe: bool,
    pub target_highlighted: bool,
    pub view_resets: u64,
}

impl Scene3d {
    /// Write the placeholder panel; inert when the container is absent.
    pub fn mount(page: &mut Page) -> Self {
        let placeholder = render::scene_placeholder().into_string();
        let mounted = page.set_html(element_ids::SCENE_CONTAINER, placeholder);
        Self {
            mounted,
            ..Self::default()
        }
    }

    pub fn update(&mut self) {
        self.updates += 1;
        info!("3D scene updated with latest drilling data");
    }

    pub fn reset_view(&mut self) {
        self.view_resets += 1;
        info!("3D view reset to default position");
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
        info!(wireframe = self.wireframe, "Wireframe mode toggled");
    }

    pub fn show_target_zone(&mut self) {
        self.target_highlighted = true;
        info!("Target zone highlighted");
    }
}
