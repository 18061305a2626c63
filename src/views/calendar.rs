// ============================================================================
// CALENDAR WIDGET - Grilla fija de 7 columnas (mes no parametrizado)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::models::{calendar_days, CalendarDay};
use crate::utils::constants::{CALENDAR_MONTH, WEEKDAY_LABELS};

pub fn render_calendar() -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?
        .class("calendar-grid")
        .build();

    for label in WEEKDAY_LABELS {
        append_child(
            &grid,
            &ElementBuilder::new("div")?.class("calendar-day-name").text(label).build(),
        )?;
    }
    for day in calendar_days() {
        append_child(&grid, &render_day(&day)?)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("card calendar-card")
        .child(ElementBuilder::new("div")?.class("calendar-header").text(CALENDAR_MONTH).build())?
        .child(grid)?
        .build())
}

fn render_day(day: &CalendarDay) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("div")?
        .class(day.css_class())
        .text(&day.day.to_string())
        .build();
    if day.has_event {
        append_child(&cell, &ElementBuilder::new("div")?.class("event-dot").build())?;
    }
    Ok(cell)
}
