// ============================================================================
// APP VIEW - Root: Landing sin sesión, Home + Logout con sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, AppView};
use crate::viewmodels::SessionViewModel;
use super::{render_home, render_landing};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.current_view() {
        AppView::Landing => render_landing(state),
        AppView::Home => {
            let logout_btn = {
                let state = state.clone();
                ElementBuilder::new("button")?
                    .class("btn-logout")
                    .text("Logout")
                    .on_click(move |_e| {
                        SessionViewModel::new().logout(&state);
                        state.notify_subscribers();
                    })?
                    .build()
            };

            Ok(ElementBuilder::new("div")?
                .child(render_home(state)?)?
                .child(logout_btn)?
                .build())
        }
    }
}
