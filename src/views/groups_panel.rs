// ============================================================================
// GROUPS PANEL - Grupos (estático)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Group;
use crate::state::app_state::AppState;

pub fn render_groups_panel(state: &AppState) -> Result<Element, JsValue> {
    // Sin handler: el buscador todavía no filtra nada
    let search = ElementBuilder::new("input")?
        .class("search-input")
        .attr("type", "text")?
        .attr("placeholder", "🔍 Search")?
        .build();

    let list = ElementBuilder::new("div")?
        .class("groups-list")
        .children(
            state
                .home
                .groups
                .iter()
                .map(render_group_item)
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card blue-outline")
        .child(super::render_card_header("👥", "Groups", Some(search))?)?
        .child(list)?
        .build())
}

fn render_group_item(group: &Group) -> Result<Element, JsValue> {
    let info = ElementBuilder::new("div")?
        .class("group-info")
        .child(super::render_avatar(&group.avatar())?)?
        .child(
            ElementBuilder::new("div")?
                .class("group-details")
                .child(ElementBuilder::new("h4")?.text(&group.name).build())?
                .child(
                    ElementBuilder::new("p")?
                        .text(&format!("{} members", group.member_count()))
                        .build(),
                )?
                .build(),
        )?
        .build();

    let members = ElementBuilder::new("div")?
        .class("member-avatars")
        .children(
            group
                .members
                .iter()
                .map(|m| super::render_avatar(m))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("group-item")
        .child(info)?
        .child(members)?
        .build())
}
