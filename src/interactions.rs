use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::{
    dom::{browser_window, document, elements_of, listen, query_all, query_one, scroll_to, set_style},
    error::SetupError,
    frontend::MotionEnv,
    motion::{
        anchor_fragment, anchor_scroll_top, hamburger_bar_styles, is_activation_key,
        menu_announcement, needs_aria_label, px, social_aria_label, Rect, RippleGeometry,
        CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM, CARD_TRANSITION,
    },
};

const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";
const MENU_TOGGLE: &str = ".mobile-toggle";
const MENU: &str = ".nav-menu";
const MENU_LINKS: &str = ".nav-menu a";
const RIPPLE_HOSTS: &str = ".btn-primary, .btn-secondary, .project-link";
const PROJECT_CARDS: &str = ".project-card";
const KEYBOARD_TARGETS: &str = ".btn-primary, .btn-secondary, .project-link, .social-link";
const SOCIAL_LINKS: &str = ".social-link";
const ACTIVE_CLASS: &str = "active";

pub fn install_smooth_anchors(env: &MotionEnv) -> Result<usize, SetupError> {
    let anchors = query_all(&document()?, IN_PAGE_LINKS)?;
    let navbar_offset = env.config.anchor_offset;
    let smooth = !env.reduced_motion;

    for anchor in &anchors {
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();

            if let Some(href) = link.get_attribute("href") {
                if let Some(id) = anchor_fragment(&href) {
                    scroll_to_element(id, navbar_offset, smooth);
                }
            }
        })?;
    }

    Ok(anchors.len())
}

fn scroll_to_element(id: &str, navbar_offset: f64, smooth: bool) -> Option<()> {
    let window = browser_window().ok()?;
    let target = window
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let top = anchor_scroll_top(f64::from(target.offset_top()), navbar_offset);
    scroll_to(&window, top, smooth);
    Some(())
}

pub fn install_mobile_menu(env: &MotionEnv) -> Result<usize, SetupError> {
    let document = document()?;
    let toggle = query_one(&document, MENU_TOGGLE)?;
    let menu = query_one(&document, MENU)?;

    sync_toggle(&toggle, toggle.class_list().contains(ACTIVE_CLASS));

    {
        let toggle_handle = toggle.clone();
        let menu = menu.clone();
        let announce = env.announce.clone();
        listen(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(ACTIVE_CLASS);
            let open = toggle_handle
                .class_list()
                .toggle(ACTIVE_CLASS)
                .unwrap_or(false);
            sync_toggle(&toggle_handle, open);
            announce.emit(menu_announcement(open).to_string());
        })?;
    }

    let links = elements_of(document.query_selector_all(MENU_LINKS)?);
    for link in &links {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let announce = env.announce.clone();
        listen(link, "click", move |_| {
            let was_open = toggle.class_list().contains(ACTIVE_CLASS);
            let _ = menu.class_list().remove_1(ACTIVE_CLASS);
            let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
            sync_toggle(&toggle, false);

            if was_open {
                announce.emit(menu_announcement(false).to_string());
            }
        })?;
    }

    Ok(1 + links.len())
}

fn sync_toggle(toggle: &Element, open: bool) {
    let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });

    let Ok(bars) = toggle.query_selector_all("span") else {
        return;
    };

    for (bar, (property, value)) in elements_of(bars).iter().zip(hamburger_bar_styles(open)) {
        set_style(bar, property, value);
    }
}

pub fn install_ripples(env: &MotionEnv) -> Result<usize, SetupError> {
    let hosts = query_all(&document()?, RIPPLE_HOSTS)?;
    let lifetime_ms = env.config.ripple_lifetime_ms;

    for host in &hosts {
        let target = host.clone();
        listen(host, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let _ = spawn_ripple(&target, event, lifetime_ms);
            }
        })?;
    }

    Ok(hosts.len())
}

fn spawn_ripple(host: &Element, event: &MouseEvent, lifetime_ms: u32) -> Result<(), JsValue> {
    let Some(document) = host.owner_document() else {
        return Ok(());
    };

    let bounds = host.get_bounding_client_rect();
    let geometry = RippleGeometry::centered_on(
        Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let ripple = document.create_element("span")?;
    let size = px(geometry.size);
    set_style(&ripple, "width", &size);
    set_style(&ripple, "height", &size);
    set_style(&ripple, "left", &px(geometry.left));
    set_style(&ripple, "top", &px(geometry.top));
    ripple.class_list().add_1("ripple")?;
    host.append_child(&ripple)?;

    Timeout::new(lifetime_ms, move || {
        if ripple.parent_node().is_some() {
            ripple.remove();
        }
    })
    .forget();

    Ok(())
}

pub fn install_card_hover(_env: &MotionEnv) -> Result<usize, SetupError> {
    let cards = query_all(&document()?, PROJECT_CARDS)?;

    for card in &cards {
        let entered = card.clone();
        listen(card, "mouseenter", move |_| {
            set_style(&entered, "transform", CARD_HOVER_TRANSFORM);
            set_style(&entered, "transition", CARD_TRANSITION);
        })?;

        let left = card.clone();
        listen(card, "mouseleave", move |_| {
            set_style(&left, "transform", CARD_REST_TRANSFORM);
        })?;
    }

    Ok(cards.len())
}

pub fn install_keyboard_activation(_env: &MotionEnv) -> Result<usize, SetupError> {
    let targets = query_all(&document()?, KEYBOARD_TARGETS)?;

    for target in &targets {
        let element = target.clone();
        listen(target, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };

            if !is_activation_key(&key) {
                return;
            }

            event.prevent_default();
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                element.click();
            }
        })?;
    }

    Ok(targets.len())
}

pub fn install_social_labels(_env: &MotionEnv) -> Result<usize, SetupError> {
    let links = query_all(&document()?, SOCIAL_LINKS)?;
    let mut labelled = 0;

    for link in &links {
        if !needs_aria_label(link.get_attribute("aria-label").as_deref()) {
            continue;
        }

        let Some(icon) = link.query_selector("i")? else {
            continue;
        };

        link.set_attribute("aria-label", &social_aria_label(&icon.class_name()))?;
        labelled += 1;
    }

    Ok(labelled)
}
