use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::{
    dom::{browser_window, document, listen, query_one, scroll_offset, set_style},
    error::SetupError,
    frontend::MotionEnv,
    motion::{parallax_translation, translate_y, NavbarAppearance},
    timing::Debouncer,
};

pub fn install_navbar(env: &MotionEnv) -> Result<usize, SetupError> {
    let window = browser_window()?;
    let navbar = query_one(&document()?, ".navbar")?;
    let threshold = env.config.navbar_scroll_threshold;

    apply_navbar(&window, &navbar, threshold);

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_| {
        apply_navbar(&scroll_window, &navbar, threshold);
    })?;

    Ok(1)
}

fn apply_navbar(window: &Window, navbar: &Element, threshold: f64) {
    let appearance = NavbarAppearance::for_offset(scroll_offset(window), threshold);
    set_style(navbar, "background", appearance.background);
    set_style(navbar, "box-shadow", appearance.box_shadow);
}

pub fn install_parallax(env: &MotionEnv) -> Result<usize, SetupError> {
    if env.reduced_motion {
        return Ok(0);
    }

    let window = browser_window()?;
    let hero = query_one(&document()?, ".hero")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::MissingElement(".hero"))?;
    let rate = env.config.parallax_rate;

    apply_parallax(&window, &hero, rate);

    {
        let window_handle = window.clone();
        let hero = hero.clone();
        listen(&window, "scroll", move |_| {
            apply_parallax(&window_handle, &hero, rate);
        })?;
    }

    let mut debouncer: Debouncer<Timeout> = Debouncer::new(env.config.resize_debounce_ms);
    let window_handle = window.clone();
    listen(&window, "resize", move |_| {
        let window = window_handle.clone();
        let hero = hero.clone();
        debouncer.call(move || apply_parallax(&window, &hero, rate));
    })?;

    Ok(1)
}

fn apply_parallax(window: &Window, hero: &HtmlElement, rate: f64) {
    let offset = scroll_offset(window);

    if let Some(translation) = parallax_translation(offset, f64::from(hero.offset_height()), rate) {
        let _ = hero.style().set_property("transform", &translate_y(translation));
    }
}
