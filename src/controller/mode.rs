use crate::api::{Method, Mode};

/// Which result panels are shown for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub quick: bool,
    pub advanced: bool,
}

impl PanelVisibility {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            quick: mode.includes(Method::Quick),
            advanced: mode.includes(Method::Advanced),
        }
    }

    pub fn shows(&self, method: Method) -> bool {
        match method {
            Method::Quick => self.quick,
            Method::Advanced => self.advanced,
        }
    }
}

pub fn description(mode: Mode) -> &'static str {
    match mode {
        Mode::Quick => "Quick: Faster results based on song similarities",
        Mode::Advanced => "Advanced: More accurate recommendations using clustering algorithms",
        Mode::Both => "Both: Compare results from both recommendation methods",
    }
}

/// Three-way selector; exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeSelector {
    active: Mode,
}

impl ModeSelector {
    pub fn select(&mut self, mode: Mode) {
        self.active = mode;
    }

    pub fn active(&self) -> Mode {
        self.active
    }

    pub fn is_active(&self, mode: Mode) -> bool {
        self.active == mode
    }

    pub fn description(&self) -> &'static str {
        description(self.active)
    }

    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility::for_mode(self.active)
    }

    /// Left offset of the highlight, as a percentage of the track width.
    pub fn indicator_offset(&self) -> f64 {
        self.active.index() as f64 * 33.333
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_quick() {
        let selector = ModeSelector::default();
        assert_eq!(selector.active(), Mode::Quick);
        assert_eq!(
            selector.description(),
            "Quick: Faster results based on song similarities"
        );
    }

    #[test]
    fn panel_table_matches_each_mode() {
        let expected = [
            (Mode::Quick, true, false),
            (Mode::Advanced, false, true),
            (Mode::Both, true, true),
        ];
        for (mode, quick, advanced) in expected {
            assert_eq!(
                PanelVisibility::for_mode(mode),
                PanelVisibility { quick, advanced },
                "{mode:?}"
            );
        }
    }

    #[test]
    fn select_is_idempotent() {
        let mut once = ModeSelector::default();
        once.select(Mode::Advanced);
        let mut twice = once;
        twice.select(Mode::Advanced);
        assert_eq!(once, twice);
        assert_eq!(once.panels(), twice.panels());
        assert_eq!(once.description(), twice.description());
        assert!(twice.is_active(Mode::Advanced));
        assert!(!twice.is_active(Mode::Quick));
    }

    #[test]
    fn indicator_moves_by_thirds() {
        let mut selector = ModeSelector::default();
        assert_eq!(selector.indicator_offset(), 0.0);
        selector.select(Mode::Both);
        assert!((selector.indicator_offset() - 66.666).abs() < 1e-9);
    }
}
