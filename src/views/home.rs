// ============================================================================
// HOME VIEW - Dashboard "Hangout Hub"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::constants::APP_NAME;
use crate::viewmodels::FriendsViewModel;
use super::{render_assistant, render_calendar, render_friends_panel, render_groups_panel, render_history_panel};

/// Renderizar dashboard completo
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let add_friend_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-plan")
            .text("✨ Add Friend")
            .on_click(move |_e| {
                FriendsViewModel::new(&state.home).open_add_friend_popup();
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::AddFriendPopup));
            })?
            .build()
    };

    let header = ElementBuilder::new("div")?
        .class("header")
        .child(ElementBuilder::new("h1")?.text("Hangout Hub").build())?
        .child(add_friend_btn)?
        .build();

    let left = ElementBuilder::new("div")?
        .class("dashboard-left")
        .child(render_friends_panel(state)?)?
        .child(render_groups_panel(state)?)?
        .child(render_history_panel(state)?)?
        .build();

    let right = ElementBuilder::new("div")?
        .class("dashboard-right")
        .child(render_calendar()?)?
        .child(render_assistant()?)?
        .build();

    let dashboard = ElementBuilder::new("div")?
        .class("dashboard-wrapper")
        .child(
            ElementBuilder::new("div")?
                .class("dashboard")
                .child(left)?
                .child(right)?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("hangouthub-container")
        .child(ElementBuilder::new("div")?.class("app-name").text(APP_NAME).build())?
        .child(header)?
        .child(dashboard)?
        .build())
}
