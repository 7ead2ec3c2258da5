use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, PromiseRejectionEvent};
use yew::prelude::*;

use crate::{
    config::{MotionConfig, CONFIG_ELEMENT_ID},
    dom::{
        browser_window, document, listen, on_page_loaded, prefers_reduced_motion, scroll_offset,
        scroll_to,
    },
    error::{describe_js_value, SetupError},
    interactions::{
        install_card_hover, install_keyboard_activation, install_mobile_menu, install_ripples,
        install_smooth_anchors, install_social_labels,
    },
    logging::{log_event, LogLevel},
    motion::{
        back_to_top_visible, BACK_TO_TOP_HOVER_BACKGROUND, BACK_TO_TOP_HOVER_TRANSFORM,
        BACK_TO_TOP_REST_BACKGROUND, BACK_TO_TOP_REST_TRANSFORM,
    },
    observers::{install_lazy_images, install_section_reveal, install_skill_reveal},
    scroll::{install_navbar, install_parallax},
    setup::{install_each, mount_or_install, Installer, Outcome},
    typing::install_typing,
};

const ROOT_ID: &str = "motion-root";

#[derive(Clone)]
pub struct MotionEnv {
    pub config: MotionConfig,
    pub reduced_motion: bool,
    pub announce: Callback<String>,
}

const FEATURES: [(&str, Installer<MotionEnv>); 13] = [
    ("navbar", install_navbar),
    ("parallax", install_parallax),
    ("section_reveal", install_section_reveal),
    ("skill_reveal", install_skill_reveal),
    ("smooth_anchors", install_smooth_anchors),
    ("mobile_menu", install_mobile_menu),
    ("ripples", install_ripples),
    ("card_hover", install_card_hover),
    ("keyboard_activation", install_keyboard_activation),
    ("social_labels", install_social_labels),
    ("lazy_images", install_lazy_images),
    ("typing", install_typing),
    ("page_timing", install_page_timing),
];

fn log_outcomes(config: &MotionConfig, outcomes: Vec<(&str, Outcome)>) {
    for (feature, outcome) in outcomes {
        match outcome {
            Outcome::Installed(targets) => log_event(
                config,
                LogLevel::Debug,
                "feature_installed",
                json!({ "feature": feature, "targets": targets }),
            ),
            Outcome::Skipped(selector) => log_event(
                config,
                LogLevel::Debug,
                "feature_skipped",
                json!({ "feature": feature, "selector": selector }),
            ),
            Outcome::Failed(error) => log_event(
                config,
                LogLevel::Error,
                "feature_failed",
                json!({ "feature": feature, "error": error }),
            ),
        }
    }
}

fn install_page_timing(env: &MotionEnv) -> Result<usize, SetupError> {
    let config = env.config.clone();

    on_page_loaded(move || {
        let Some(performance) = window().and_then(|w| w.performance()) else {
            return;
        };

        log_event(
            &config,
            LogLevel::Info,
            "page_loaded",
            json!({ "load_ms": performance.now().round() }),
        );
    })?;

    Ok(1)
}

fn install_error_handlers(config: &MotionConfig) -> Result<(), SetupError> {
    let window = browser_window()?;

    let error_config = config.clone();
    listen(&window, "error", move |event| {
        let Some(error) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };

        log_event(
            &error_config,
            LogLevel::Error,
            "uncaught_error",
            json!({
                "message": error.message(),
                "source": error.filename(),
                "line": error.lineno(),
                "column": error.colno(),
            }),
        );
    })?;

    let rejection_config = config.clone();
    listen(&window, "unhandledrejection", move |event| {
        event.prevent_default();

        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|event| describe_js_value(&event.reason()))
            .unwrap_or_default();

        log_event(
            &rejection_config,
            LogLevel::Error,
            "unhandled_rejection",
            json!({ "reason": reason }),
        );
    })?;

    Ok(())
}

fn load_config() -> MotionConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw else {
        return MotionConfig::default();
    };

    match MotionConfig::from_json(&raw) {
        Ok(config) => config,
        Err(error) => {
            let config = MotionConfig::default();
            log_event(
                &config,
                LogLevel::Error,
                "config_invalid",
                json!({ "error": error.to_string() }),
            );
            config
        }
    }
}

#[derive(Properties, PartialEq)]
struct BackToTopProps {
    threshold: f64,
    smooth: bool,
}

#[function_component(BackToTop)]
fn back_to_top(props: &BackToTopProps) -> Html {
    let initial_threshold = props.threshold;
    let visible = use_state_eq(move || {
        window()
            .map(|w| back_to_top_visible(scroll_offset(&w), initial_threshold))
            .unwrap_or(false)
    });
    let hovered = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(props.threshold, move |threshold| {
            let threshold = *threshold;
            let listener = window().and_then(|w| {
                let scroll_window = w.clone();
                let callback = wasm_bindgen::closure::Closure::<dyn Fn()>::new(move || {
                    visible.set(back_to_top_visible(scroll_offset(&scroll_window), threshold));
                });
                w.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .ok()
                    .map(|_| (w, callback))
            });

            move || {
                if let Some((w, callback)) = listener {
                    let _ = w.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let onclick = {
        let smooth = props.smooth;
        Callback::from(move |_: MouseEvent| {
            if let Some(w) = window() {
                scroll_to(&w, 0.0, smooth);
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let (opacity, visibility) = if *visible { ("1", "visible") } else { ("0", "hidden") };
    let (transform, background) = if *hovered {
        (BACK_TO_TOP_HOVER_TRANSFORM, BACK_TO_TOP_HOVER_BACKGROUND)
    } else {
        (BACK_TO_TOP_REST_TRANSFORM, BACK_TO_TOP_REST_BACKGROUND)
    };
    let style = format!(
        "position: fixed; bottom: 20px; right: 20px; width: 50px; height: 50px; \
         border-radius: 50%; color: white; border: none; cursor: pointer; \
         transition: all 0.3s ease; z-index: 1000; box-shadow: var(--shadow-lg); \
         font-size: 1.2rem; opacity: {opacity}; visibility: {visibility}; \
         transform: {transform}; background: {background};"
    );

    html! {
        <button
            class="back-to-top"
            type="button"
            aria-label="Back to top"
            aria-hidden={(!*visible).to_string()}
            tabindex={if *visible { "0" } else { "-1" }}
            style={style}
            onclick={onclick}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct MotionRootProps {
    config: MotionConfig,
    reduced_motion: bool,
}

#[function_component(MotionRoot)]
fn motion_root(props: &MotionRootProps) -> Html {
    let announcement = use_state_eq(String::new);
    let clear_timer = use_mut_ref(|| None::<Timeout>);

    let announce = {
        let announcement = announcement.clone();
        let clear_timer = clear_timer.clone();
        let lifetime_ms = props.config.announcement_lifetime_ms;
        Callback::from(move |message: String| {
            announcement.set(message);

            let cleared = announcement.clone();
            let clear = Timeout::new(lifetime_ms, move || cleared.set(String::new()));
            drop(clear_timer.borrow_mut().replace(clear));
        })
    };

    {
        let env = MotionEnv {
            config: props.config.clone(),
            reduced_motion: props.reduced_motion,
            announce,
        };
        use_effect_with((), move |_| {
            log_outcomes(&env.config, install_each(&FEATURES, &env));
            || ()
        });
    }

    html! {
        <>
            <BackToTop
                threshold={props.config.back_to_top_threshold}
                smooth={!props.reduced_motion}
            />
            <div
                class="sr-only"
                aria-live="polite"
                aria-atomic="true"
                style="position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0;"
            >
                {(*announcement).clone()}
            </div>
        </>
    }
}

fn mount_point() -> Result<web_sys::Element, SetupError> {
    let document = document()?;

    if let Some(existing) = document.get_element_by_id(ROOT_ID) {
        return Ok(existing);
    }

    let body = document.body().ok_or(SetupError::MissingElement("body"))?;
    let root = document.create_element("div")?;
    root.set_id(ROOT_ID);
    body.append_child(&root)?;
    Ok(root)
}

pub fn run() {
    let config = load_config();
    let reduced_motion = prefers_reduced_motion();

    if let Err(error) = install_error_handlers(&config) {
        log_event(
            &config,
            LogLevel::Error,
            "feature_failed",
            json!({ "feature": "error_handlers", "error": error.to_string() }),
        );
    }

    log_event(
        &config,
        LogLevel::Info,
        "startup",
        json!({
            "features": FEATURES.iter().map(|(feature, _)| *feature).collect::<Vec<_>>(),
            "reduced_motion": reduced_motion,
        }),
    );

    let mounted = mount_point();
    let render_config = config.clone();
    let detached_config = config.clone();
    let result = mount_or_install(
        mounted,
        move |root| {
            yew::Renderer::<MotionRoot>::with_root_and_props(
                root,
                MotionRootProps {
                    config: render_config,
                    reduced_motion,
                },
            )
            .render();
        },
        &FEATURES,
        move || MotionEnv {
            config: detached_config,
            reduced_motion,
            announce: Callback::from(|_: String| ()),
        },
    );

    if let Err((error, outcomes)) = result {
        log_event(
            &config,
            LogLevel::Error,
            "feature_failed",
            json!({ "feature": "back_to_top", "error": error.to_string() }),
        );
        log_outcomes(&config, outcomes);
    }
}
