// ============================================================================
// FRIENDS PANEL - Lista de amigos + popup "Add Friend" (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, on_input_value, alert, apply_popup_visibility, ADD_FRIEND_POPUP_ID, ADD_FRIEND_INPUT_ID, FRIENDS_LIST_ID};
use crate::models::Friend;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::utils::constants::REQUEST_SENT_NOTICE;
use crate::viewmodels::{AddFriendOutcome, FriendsViewModel};

/// Card "Friends" con su popup
pub fn render_friends_panel(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .id(FRIENDS_LIST_ID)?
        .class("friends-list")
        .children(
            state
                .home
                .get_friends()
                .iter()
                .map(render_friend_item)
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(super::render_card_header("👥", "Friends", None)?)?
        .child(render_add_friend_popup(state)?)?
        .child(list)?
        .build())
}

/// Un amigo: avatar con inicial, nombre, última quedada y email
pub fn render_friend_item(friend: &Friend) -> Result<Element, JsValue> {
    let details = ElementBuilder::new("div")?
        .child(ElementBuilder::new("h4")?.text(&friend.name).build())?
        .child(
            ElementBuilder::new("p")?
                .text(&format!("Last hangout: {}", friend.last_hangout))
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text(&format!("Email: {}", friend.email))
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("friend-item")
        .attr("data-friend-id", &friend.id.to_string())?
        .child(super::render_avatar(&friend.initial)?)?
        .child(details)?
        .build())
}

/// Popup siempre presente en el DOM; oculto con `hidden` mientras está cerrado
fn render_add_friend_popup(state: &AppState) -> Result<Element, JsValue> {
    let show = state.home.is_add_friend_open();

    let input = ElementBuilder::new("input")?
        .id(ADD_FRIEND_INPUT_ID)?
        .class("popup-input")
        .attr("type", "email")?
        .attr("placeholder", "Enter friend's email")?
        .attr("value", &state.home.get_pending_email())?
        .build();
    {
        let vm = FriendsViewModel::new(&state.home);
        on_input_value(&input, move |value| vm.update_pending_email(value))?;
    }

    let confirm_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-confirm")
            .text("Add")
            .on_click(move |_e| {
                let vm = FriendsViewModel::new(&state.home);
                if let AddFriendOutcome::RequestSent(_) = vm.confirm_add_friend() {
                    state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::FriendsList));
                    state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::AddFriendPopup));
                    if let Err(e) = alert(REQUEST_SENT_NOTICE) {
                        log::warn!("⚠️ [FRIENDS] No se pudo mostrar el aviso: {:?}", e);
                    }
                }
            })?
            .build()
    };

    let cancel_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .class("btn-cancel")
            .text("Cancel")
            .on_click(move |_e| {
                FriendsViewModel::new(&state.home).cancel_add_friend();
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::AddFriendPopup));
            })?
            .build()
    };

    let popup = ElementBuilder::new("div")?
        .class("popup")
        .child(ElementBuilder::new("h3")?.text("Add a new friend").build())?
        .child(input)?
        .child(
            ElementBuilder::new("div")?
                .class("popup-buttons")
                .child(confirm_btn)?
                .child(cancel_btn)?
                .build(),
        )?
        .build();

    let overlay = ElementBuilder::new("div")?
        .id(ADD_FRIEND_POPUP_ID)?
        .child(popup)?
        .build();
    apply_popup_visibility(&overlay, show)?;
    Ok(overlay)
}
