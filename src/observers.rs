use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::{
    dom::{document, listen, query_all, set_style},
    error::SetupError,
    frontend::MotionEnv,
    motion::lazy_source,
    reveal::{
        RevealGroup, RevealTracker, Trigger, REVEAL_TRANSITION, REVEAL_VISIBLE_TRANSFORM,
        SECTION_GROUP, SKILL_GROUP,
    },
};

const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
const LAZY_SOURCE_ATTRIBUTE: &str = "data-src";
const LAZY_FADE_TRANSITION: &str = "opacity 0.3s ease";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn batch_of(entries: &Array, targets: &[Element]) -> Vec<(usize, bool)> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let target = entry.target();
            targets
                .iter()
                .position(|candidate| *candidate == target)
                .map(|index| (index, entry.is_intersecting()))
        })
        .collect()
}

/// Observes `targets` and hands each one to `on_trigger` the first time it
/// crosses the threshold. Triggered targets are unobserved before the
/// handler runs.
fn observe_once<F>(
    targets: Vec<Element>,
    mut tracker: RevealTracker,
    init: Option<&IntersectionObserverInit>,
    mut on_trigger: F,
) -> Result<(), SetupError>
where
    F: FnMut(&Element, Trigger) + 'static,
{
    let observed = targets.clone();
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for trigger in tracker.observe_batch(batch_of(&entries, &observed)) {
            let Some(target) = observed.get(trigger.target) else {
                continue;
            };

            observer.unobserve(target);
            on_trigger(target, trigger);
        }

        if tracker.pending() == 0 {
            observer.disconnect();
        }
    });

    let observer = match init {
        Some(init) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }

    Ok(())
}

pub fn install_section_reveal(env: &MotionEnv) -> Result<usize, SetupError> {
    install_reveal(env, SECTION_GROUP)
}

pub fn install_skill_reveal(env: &MotionEnv) -> Result<usize, SetupError> {
    install_reveal(env, SKILL_GROUP)
}

fn install_reveal(env: &MotionEnv, group: RevealGroup) -> Result<usize, SetupError> {
    let targets = query_all(&document()?, group.selector)?;
    let animate = !env.reduced_motion;
    let hidden_transform = group.hidden_transform();

    for target in &targets {
        set_style(target, "opacity", "0");
        set_style(target, "transform", &hidden_transform);
        if animate {
            set_style(target, "transition", REVEAL_TRANSITION);
        }
    }

    let tracker = if group.staggered && animate {
        RevealTracker::staggered(targets.len(), env.config.stagger_step_ms)
    } else {
        RevealTracker::new(targets.len())
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(env.config.reveal_threshold));
    init.set_root_margin(group.root_margin);

    let count = targets.len();
    observe_once(targets, tracker, Some(&init), |target, trigger| {
        if trigger.delay_ms == 0 {
            show(target);
            return;
        }

        let target = target.clone();
        Timeout::new(trigger.delay_ms, move || show(&target)).forget();
    })?;

    Ok(count)
}

fn show(target: &Element) {
    set_style(target, "opacity", "1");
    set_style(target, "transform", REVEAL_VISIBLE_TRANSFORM);
}

pub fn install_lazy_images(_env: &MotionEnv) -> Result<usize, SetupError> {
    let images = query_all(&document()?, LAZY_IMAGE_SELECTOR)?;
    let tracker = RevealTracker::new(images.len());

    let count = images.len();
    observe_once(images, tracker, None, |target, _| {
        if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
            swap_source(image);
        }
    })?;

    Ok(count)
}

fn swap_source(image: &HtmlImageElement) {
    let Some(source) = lazy_source(image.get_attribute(LAZY_SOURCE_ATTRIBUTE)) else {
        return;
    };

    let _ = image.style().set_property("opacity", "0");
    let _ = image.style().set_property("transition", LAZY_FADE_TRANSITION);

    let loaded = image.clone();
    let _ = listen(image, "load", move |_| {
        let _ = loaded.style().set_property("opacity", "1");
    });

    image.set_src(&source);
    let _ = image.remove_attribute(LAZY_SOURCE_ATTRIBUTE);
}
