// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// Si el elemento no existe devuelve Err y el caller hace re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{get_element_by_id, set_class_name, set_attribute, remove_attribute, set_inner_html, append_child};
use crate::state::app_state::AppState;
use crate::views::friends_panel::render_friend_item;

pub const ADD_FRIEND_POPUP_ID: &str = "add-friend-popup";
pub const ADD_FRIEND_INPUT_ID: &str = "add-friend-email";
pub const FRIENDS_LIST_ID: &str = "friends-list";

/// Clases del overlay del popup según su visibilidad
pub fn add_friend_popup_class(show: bool) -> &'static str {
    if show {
        "popup-overlay active"
    } else {
        "popup-overlay"
    }
}

/// Visibilidad del overlay: clase + atributo `hidden` (no depende de la hoja de estilos)
pub fn apply_popup_visibility(popup: &Element, show: bool) -> Result<(), JsValue> {
    set_class_name(popup, add_friend_popup_class(show));
    if show {
        remove_attribute(popup, "hidden")
    } else {
        set_attribute(popup, "hidden", "")
    }
}

/// Mostrar/ocultar el popup "Add Friend" y sincronizar el valor del input
pub fn update_add_friend_popup(state: &AppState) -> Result<(), JsValue> {
    let show = state.home.is_add_friend_open();
    let popup = get_element_by_id(ADD_FRIEND_POPUP_ID)
        .ok_or_else(|| JsValue::from_str("Add friend popup not found, needs full render"))?;

    apply_popup_visibility(&popup, show)?;

    if let Some(input) = get_element_by_id(ADD_FRIEND_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        let pending = state.home.get_pending_email();
        if input.value() != pending {
            input.set_value(&pending);
        }
        if show {
            let _ = input.focus();
        }
    }

    log::debug!("🔄 [INCREMENTAL] Popup add-friend {}", if show { "visible" } else { "oculto" });
    Ok(())
}

/// Re-renderizar solo los items de la lista de amigos
pub fn update_friends_list(state: &AppState) -> Result<(), JsValue> {
    let list = get_element_by_id(FRIENDS_LIST_ID)
        .ok_or_else(|| JsValue::from_str("Friends list not found, needs full render"))?;

    set_inner_html(&list, "");
    for friend in state.home.get_friends() {
        append_child(&list, &render_friend_item(&friend)?)?;
    }

    log::debug!("🔄 [INCREMENTAL] Lista de amigos actualizada ({})", state.home.friend_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_class_follows_visibility() {
        assert_eq!(add_friend_popup_class(true), "popup-overlay active");
        assert_eq!(add_friend_popup_class(false), "popup-overlay");
    }
}
