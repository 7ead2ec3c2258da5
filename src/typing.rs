use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::{
    dom::{document, on_page_loaded, query_one},
    error::SetupError,
    frontend::MotionEnv,
    motion::Typewriter,
};

const SUBTITLE: &str = ".hero .subtitle";

pub fn install_typing(env: &MotionEnv) -> Result<usize, SetupError> {
    if env.reduced_motion {
        return Ok(0);
    }

    let subtitle = query_one(&document()?, SUBTITLE)?;
    let delay_ms = env.config.typing_delay_ms;
    let speed_ms = env.config.typing_speed_ms;

    on_page_loaded(move || {
        let text = subtitle.text_content().unwrap_or_default();

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;

            for (index, frame) in Typewriter::new(&text).enumerate() {
                if index > 0 {
                    TimeoutFuture::new(speed_ms).await;
                }
                subtitle.set_text_content(Some(&frame));
            }
        });
    })?;

    Ok(1)
}
