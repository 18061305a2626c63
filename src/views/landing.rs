// ============================================================================
// LANDING VIEW - Marketing + Log In / Sign Up (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::utils::constants::APP_NAME;
use crate::viewmodels::SessionViewModel;

const CALENDAR_ICON: &str = r#"<svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect><line x1="16" y1="2" x2="16" y2="6"></line><line x1="8" y1="2" x2="8" y2="6"></line><line x1="3" y1="10" x2="21" y2="10"></line></svg>"#;

const PEOPLE_ICON: &str = r#"<svg width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path><circle cx="9" cy="7" r="4"></circle><path d="M23 21v-2a4 4 0 0 0-3-3.87"></path><path d="M16 3.13a4 4 0 0 1 0 7.75"></path></svg>"#;

/// Renderizar landing page
pub fn render_landing(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("header")
        .child(ElementBuilder::new("div")?.class("logo").text(APP_NAME).build())?
        .child(
            ElementBuilder::new("div")?
                .class("auth-buttons")
                .child(render_sign_in_button(state, "btn btn-login", "Log In")?)?
                .child(render_sign_in_button(state, "btn btn-signup", "Sign Up")?)?
                .build(),
        )?
        .build();

    let hero = ElementBuilder::new("section")?
        .class("hero")
        .child(
            ElementBuilder::new("h1")?
                .text("making spontaneous connections easy again.")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text(
                    "rendAlvous is a platform that makes connecting with your friends easier \
                     by leveraging AI tools to coordinate availability and inspire meaningful \
                     moments to share.",
                )
                .build(),
        )?
        .build();

    let features = ElementBuilder::new("section")?
        .class("features")
        .child(render_feature_card(
            ElementBuilder::new("div")?.class("feature-icon").html(CALENDAR_ICON).build(),
            "Smart Scheduling",
            "Sync Google Calendars and let AI find the perfect times when everyone's free.",
            false,
        )?)?
        .child(render_feature_card(
            ElementBuilder::new("div")?.class("feature-icon").text("T").build(),
            "AI Suggestions",
            "Get personalized activity ideas based on weather, time, preferences, and budget.",
            true,
        )?)?
        .child(render_feature_card(
            ElementBuilder::new("div")?.class("feature-icon").html(PEOPLE_ICON).build(),
            "Stay Connected",
            "Receive smart reminders to reconnect with friends you haven't seen in a while.",
            false,
        )?)?
        .build();

    let main = ElementBuilder::new("main")?
        .child(hero)?
        .child(features)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("landing-page")
        .child(header)?
        .child(main)?
        .build())
}

/// "Log In" y "Sign Up" disparan la misma acción de sign-in
fn render_sign_in_button(state: &AppState, class: &str, label: &str) -> Result<Element, JsValue> {
    let state = state.clone();
    Ok(ElementBuilder::new("button")?
        .class(class)
        .text(label)
        .on_click(move |_e| {
            if state.auth.is_signing_in() {
                log::debug!("⏳ [LANDING] Sign-in en curso, click ignorado");
                return;
            }
            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                // El error ya queda logueado en el ViewModel; no hay feedback visible
                if vm.sign_in(&state).await.is_ok() {
                    state.notify_subscribers();
                }
            });
        })?
        .build())
}

fn render_feature_card(
    icon: Element,
    title: &str,
    description: &str,
    highlighted: bool,
) -> Result<Element, JsValue> {
    let description_el = if highlighted {
        ElementBuilder::new("p")?
            .class("feature-description")
            .child(
                ElementBuilder::new("span")?
                    .class("highlight-box")
                    .text(description)
                    .build(),
            )?
            .build()
    } else {
        ElementBuilder::new("p")?
            .class("feature-description")
            .text(description)
            .build()
    };

    Ok(ElementBuilder::new("div")?
        .class("feature-card")
        .child(icon)?
        .child(ElementBuilder::new("h3")?.class("feature-title").text(title).build())?
        .child(description_el)?
        .build())
}
