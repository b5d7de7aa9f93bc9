//! Scroll-reveal hooks
//!
//! Pages do not animate anything themselves. Revealable elements carry a
//! `data-reveal` attribute holding the option set the client-side reveal
//! library is registered with. When the site is configured for reduced motion
//! no attribute is emitted and nothing is registered.

use serde::Serialize;

use crate::config::RevealConfig;

/// Per-element options, named the way the reveal library expects them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealOptions {
    pub origin: String,
    pub distance: String,
    pub duration: u32,
    pub delay: u32,
    pub rotate: Axes,
    pub opacity: f32,
    pub scale: f32,
    pub easing: String,
    pub mobile: bool,
    pub reset: bool,
    pub use_delay: &'static str,
    pub view_factor: f32,
    pub view_offset: Offsets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axes {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Offsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Builds reveal options from the site defaults
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    enabled: bool,
}

impl Reveal {
    pub fn new(config: &RevealConfig, reduced_motion: bool) -> Self {
        Self {
            config: config.clone(),
            enabled: !reduced_motion,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Options with the default delay and view factor
    pub fn default_options(&self) -> Option<RevealOptions> {
        self.options(self.config.delay)
    }

    /// Options with a custom delay (ms)
    pub fn options(&self, delay: u32) -> Option<RevealOptions> {
        self.options_with(delay, self.config.view_factor)
    }

    /// Options with a custom delay and view factor; `None` under reduced motion
    pub fn options_with(&self, delay: u32, view_factor: f32) -> Option<RevealOptions> {
        if !self.enabled {
            return None;
        }
        Some(RevealOptions {
            origin: self.config.origin.clone(),
            distance: self.config.distance.clone(),
            duration: self.config.duration,
            delay,
            rotate: Axes::default(),
            opacity: self.config.opacity,
            scale: self.config.scale,
            easing: self.config.easing.clone(),
            mobile: self.config.mobile,
            reset: self.config.reset,
            use_delay: "always",
            view_factor,
            view_offset: Offsets::default(),
        })
    }

    /// `data-reveal` attribute for an element, or an empty string
    pub fn attr(&self, options: Option<RevealOptions>) -> String {
        options
            .and_then(|o| serde_json::to_string(&o).ok())
            .map(|json| format!(" data-reveal='{}'", json.replace('\'', "&#39;")))
            .unwrap_or_default()
    }

    /// Attribute for the `index`-th element of a staggered group
    pub fn staggered_attr(&self, index: usize, step_ms: u32) -> String {
        self.attr(self.options(stagger_delay(index, step_ms)))
    }
}

/// Delay for the `index`-th element of a group revealed one after another
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Entry-transition delay (ms) for a grid card.
///
/// Cards within the initial page appear together; cards uncovered by
/// "show more" cascade in 100ms apart.
pub fn card_transition_delay(index: usize, display_limit: usize) -> u32 {
    if index >= display_limit {
        stagger_delay(index - display_limit, 100)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_site_defaults() {
        let reveal = Reveal::new(&RevealConfig::default(), false);
        let options = reveal.default_options().unwrap();
        assert_eq!(options.delay, 200);
        assert_eq!(options.view_factor, 0.25);
        assert_eq!(options.origin, "bottom");

        let table = reveal.options_with(200, 0.0).unwrap();
        assert_eq!(table.view_factor, 0.0);
    }

    #[test]
    fn test_reduced_motion_disables_everything() {
        let reveal = Reveal::new(&RevealConfig::default(), true);
        assert!(!reveal.enabled());
        assert_eq!(reveal.default_options(), None);
        assert_eq!(reveal.staggered_attr(3, 100), "");
    }

    #[test]
    fn test_attr_serializes_camel_case() {
        let reveal = Reveal::new(&RevealConfig::default(), false);
        let attr = reveal.staggered_attr(2, 100);
        assert!(attr.starts_with(" data-reveal='{"));
        assert!(attr.contains(r#""delay":200"#));
        assert!(attr.contains(r#""viewFactor":0.25"#));
        assert!(attr.contains(r#""useDelay":"always""#));
    }

    #[test]
    fn test_card_transition_delay() {
        assert_eq!(card_transition_delay(0, 6), 0);
        assert_eq!(card_transition_delay(5, 6), 0);
        assert_eq!(card_transition_delay(6, 6), 0);
        assert_eq!(card_transition_delay(8, 6), 200);
    }
}
