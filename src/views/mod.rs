use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

pub mod app;
pub mod landing;
pub mod home;
pub mod friends_panel;
pub mod groups_panel;
pub mod history_panel;
pub mod calendar;
pub mod assistant;

pub use app::render_app;
pub use landing::render_landing;
pub use home::render_home;
pub use friends_panel::render_friends_panel;
pub use groups_panel::render_groups_panel;
pub use history_panel::render_history_panel;
pub use calendar::render_calendar;
pub use assistant::render_assistant;

/// Círculo con una inicial
pub(crate) fn render_avatar(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("avatar").text(text).build())
}

/// Cabecera de card: icono + título (+ control opcional a la derecha)
pub(crate) fn render_card_header(icon: &str, title: &str, extra: Option<Element>) -> Result<Element, JsValue> {
    let title_el = ElementBuilder::new("div")?
        .class("card-title")
        .child(ElementBuilder::new("span")?.text(icon).build())?
        .build();
    title_el.append_with_str_1(&format!(" {}", title))?;

    let header = ElementBuilder::new("div")?
        .class("card-header")
        .child(title_el)?;

    Ok(match extra {
        Some(el) => header.child(el)?.build(),
        None => header.build(),
    })
}
