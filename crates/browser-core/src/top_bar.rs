use crate::transition::{Easing, Tween};
use std::time::{Duration, Instant};

pub const TOP_BAR_FADE_DURATION: Duration = Duration::from_millis(300);

/// Overlay header. Fades toward its visibility flag.
#[derive(Debug, Clone)]
pub struct TopBar {
    displayed: bool,
    fade: Tween,
}

impl Default for TopBar {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TopBar {
    pub fn new(displayed: bool) -> Self {
        let opacity = if displayed { 1.0 } else { 0.0 };
        Self {
            displayed,
            fade: Tween::settled(opacity, TOP_BAR_FADE_DURATION).with_easing(Easing::Linear),
        }
    }

    pub fn displayed(&self) -> bool {
        self.displayed
    }

    pub fn opacity(&self) -> f32 {
        self.fade.value()
    }

    /// Fully faded out; nothing needs drawing.
    pub fn is_hidden(&self) -> bool {
        !self.displayed && !self.fade.is_animating()
    }

    pub fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
        self.fade.retarget(if displayed { 1.0 } else { 0.0 });
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.fade.tick(now)
    }
}

/// Text shown in the bar: the page title in full-screen mode, otherwise the
/// photo count.
pub fn display_title(full_screen: bool, title: Option<&str>, count: usize) -> String {
    if full_screen {
        title.unwrap_or_default().to_string()
    } else {
        format!("{count} photos")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title() {
        assert_eq!(display_title(true, Some("Sunset"), 5), "Sunset");
        assert_eq!(display_title(false, Some("Sunset"), 5), "5 photos");
        assert_eq!(display_title(true, None, 5), "");
    }

    #[test]
    fn test_fade_out_and_in() {
        let mut bar = TopBar::default();
        assert_eq!(bar.opacity(), 1.0);

        bar.set_displayed(false);
        assert!(!bar.displayed());
        assert!(!bar.is_hidden(), "still fading");

        let start = Instant::now();
        bar.tick(start);
        bar.tick(start + TOP_BAR_FADE_DURATION);
        assert_eq!(bar.opacity(), 0.0);
        assert!(bar.is_hidden());

        bar.set_displayed(true);
        bar.tick(start);
        bar.tick(start + TOP_BAR_FADE_DURATION);
        assert_eq!(bar.opacity(), 1.0);
    }
}
