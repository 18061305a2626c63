// ============================================================================
// HANGOUT HISTORY PANEL - Historial de quedadas (estático)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::HangoutEntry;
use crate::state::app_state::AppState;

pub fn render_history_panel(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .class("history-list")
        .children(
            state
                .home
                .history
                .iter()
                .map(render_history_item)
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card")
        .child(super::render_card_header("🕐", "Hangout History", None)?)?
        .child(list)?
        .build())
}

fn render_history_item(entry: &HangoutEntry) -> Result<Element, JsValue> {
    let meta = ElementBuilder::new("div")?
        .class("history-meta")
        .child(ElementBuilder::new("span")?.text(&format!("📅 {}", entry.date)).build())?
        .child(ElementBuilder::new("span")?.text(&format!("📍 {}", entry.location)).build())?
        .child(ElementBuilder::new("span")?.text(&format!("👥 {}", entry.group)).build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("history-item")
        .child(ElementBuilder::new("div")?.class("history-icon").text(&entry.icon).build())?
        .child(
            ElementBuilder::new("div")?
                .class("history-details")
                .child(ElementBuilder::new("h4")?.text(&entry.title).build())?
                .child(meta)?
                .build(),
        )?
        .build())
}
