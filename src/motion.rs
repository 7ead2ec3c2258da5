pub const NAVBAR_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_BACKGROUND_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
pub const NAVBAR_SHADOW_TOP: &str = "none";

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const CARD_TRANSITION: &str = "all 0.3s ease";

pub const BACK_TO_TOP_HOVER_TRANSFORM: &str = "translateY(-2px) scale(1.1)";
pub const BACK_TO_TOP_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const BACK_TO_TOP_HOVER_BACKGROUND: &str = "var(--secondary-color)";
pub const BACK_TO_TOP_REST_BACKGROUND: &str = "var(--primary-color)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarAppearance {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self {
                background: NAVBAR_BACKGROUND_SCROLLED,
                box_shadow: NAVBAR_SHADOW_SCROLLED,
            }
        } else {
            Self {
                background: NAVBAR_BACKGROUND_TOP,
                box_shadow: NAVBAR_SHADOW_TOP,
            }
        }
    }
}

/// Vertical hero translation for `offset`, or `None` once the hero has been
/// scrolled past and its last translation should be left alone.
pub fn parallax_translation(offset: f64, hero_height: f64, rate: f64) -> Option<f64> {
    if offset < hero_height {
        Some(-rate * offset)
    } else {
        None
    }
}

pub fn translate_y(pixels: f64) -> String {
    format!("translateY({pixels}px)")
}

pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

pub fn anchor_scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    target_offset_top - navbar_offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn centered_on(host: Rect, client_x: f64, client_y: f64) -> Self {
        let size = host.width.max(host.height);

        Self {
            size,
            left: client_x - host.left - size / 2.0,
            top: client_y - host.top - size / 2.0,
        }
    }
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn hamburger_bar_styles(open: bool) -> [(&'static str, &'static str); 3] {
    if open {
        [
            ("transform", "rotate(45deg) translate(5px, 5px)"),
            ("opacity", "0"),
            ("transform", "rotate(-45deg) translate(7px, -6px)"),
        ]
    } else {
        [("transform", "none"), ("opacity", "1"), ("transform", "none")]
    }
}

pub fn menu_announcement(open: bool) -> &'static str {
    if open {
        "Navigation menu opened"
    } else {
        "Navigation menu closed"
    }
}

pub fn social_platform(icon_class: &str) -> &'static str {
    if icon_class.contains("github") {
        "GitHub"
    } else if icon_class.contains("linkedin") {
        "LinkedIn"
    } else if icon_class.contains("twitter") {
        "Twitter"
    } else if icon_class.contains("globe") {
        "Portfolio"
    } else {
        "Social"
    }
}

pub fn social_aria_label(icon_class: &str) -> String {
    format!("Visit my {} profile", social_platform(icon_class))
}

pub fn lazy_source(deferred: Option<String>) -> Option<String> {
    deferred.filter(|value| !value.trim().is_empty())
}

pub fn needs_aria_label(existing: Option<&str>) -> bool {
    existing.map_or(true, |label| label.trim().is_empty())
}

/// Frames of a typing effect, one more character each. The first frame
/// already holds the first character; empty text yields a single empty frame
/// so the element still gets cleared.
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    cleared: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
            cleared: false,
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.typed >= self.chars.len() {
            if self.chars.is_empty() && !self.cleared {
                self.cleared = true;
                return Some(String::new());
            }
            return None;
        }

        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}
