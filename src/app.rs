// ============================================================================
// APP - Aplicación principal (instancia global, render completo e incremental)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::dom::incremental::{update_add_friend_popup, update_friends_list};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #<mount_element_id>
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(&CONFIG.mount_element_id).ok_or_else(|| {
            JsValue::from_str(&format!("No #{} element found", CONFIG.mount_element_id))
        })?;

        let state = AppState::new();

        // Batchear: el re-render se hace en el siguiente tick del event loop
        state.subscribe_to_changes(move |update_type| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] Render completo ({:?})", self.state.current_view());
        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::AddFriendPopup => update_add_friend_popup(&self.state),
            IncrementalUpdate::FriendsList => update_friends_list(&self.state),
        }
    }
}
