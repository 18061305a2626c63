// ============================================================================
// AI ASSISTANT WIDGET - Placeholder (sin lógica de mensajes)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::utils::constants::ASSISTANT_GREETING;

const SEND_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><line x1="22" y1="2" x2="11" y2="13"></line><polygon points="22 2 15 22 11 13 2 9 22 2"></polygon></svg>"#;

pub fn render_assistant() -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("chat-input")
        .attr("type", "text")?
        .attr("placeholder", ASSISTANT_GREETING)?
        .build();

    // El botón de enviar es decorativo por ahora
    let send_btn = ElementBuilder::new("button")?
        .class("btn-send")
        .html(SEND_ICON)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card ai-assistant-card")
        .child(super::render_card_header("✨", "AI Assistant", None)?)?
        .child(ElementBuilder::new("div")?.class("chat-area").text(ASSISTANT_GREETING).build())?
        .child(
            ElementBuilder::new("div")?
                .class("chat-input-container")
                .child(input)?
                .child(send_btn)?
                .build(),
        )?
        .build())
}
