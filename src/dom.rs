use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::SetupError;

pub fn browser_window() -> Result<Window, SetupError> {
    window().ok_or(SetupError::MissingElement("window"))
}

pub fn document() -> Result<Document, SetupError> {
    browser_window()?
        .document()
        .ok_or(SetupError::MissingElement("document"))
}

pub fn query_one(document: &Document, selector: &'static str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)?
        .ok_or(SetupError::MissingElement(selector))
}

pub fn query_all(document: &Document, selector: &'static str) -> Result<Vec<Element>, SetupError> {
    let elements = elements_of(document.query_selector_all(selector)?);

    if elements.is_empty() {
        return Err(SetupError::MissingElement(selector));
    }

    Ok(elements)
}

pub fn elements_of(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SetupError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn on_page_loaded<F>(task: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    let window = browser_window()?;
    let loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);

    if loaded {
        task();
        return Ok(());
    }

    let callback = Closure::once_into_js(task);
    window.add_event_listener_with_callback("load", callback.unchecked_ref())?;
    Ok(())
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn scroll_to(window: &Window, top: f64, smooth: bool) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
