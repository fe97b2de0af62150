/// Mount lifecycle of an overlay that animates in and out.
///
/// `Hidden` is the only phase in which the overlay is not mounted; `Exiting`
/// keeps it mounted until the slide-out animation has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresencePhase {
    #[default]
    Hidden,
    Entering,
    Entered,
    Exiting,
}

impl PresencePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresencePhase::Hidden => "hidden",
            PresencePhase::Entering => "entering",
            PresencePhase::Entered => "entered",
            PresencePhase::Exiting => "exiting",
        }
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self, PresencePhase::Hidden)
    }

    /// Phase after the `open` flag changes
    pub fn on_visibility(self, open: bool) -> PresencePhase {
        match (self, open) {
            (PresencePhase::Hidden | PresencePhase::Exiting, true) => PresencePhase::Entering,
            (PresencePhase::Entering | PresencePhase::Entered, false) => PresencePhase::Exiting,
            (phase, _) => phase,
        }
    }

    /// Phase after the running animation finished
    pub fn on_animation_end(self) -> PresencePhase {
        match self {
            PresencePhase::Entering => PresencePhase::Entered,
            PresencePhase::Exiting => PresencePhase::Hidden,
            phase => phase,
        }
    }

    /// BEM modifier driving the slide keyframes
    pub fn modifier_class(&self) -> Option<&'static str> {
        match self {
            PresencePhase::Entering => Some("c-drawer--entering"),
            PresencePhase::Exiting => Some("c-drawer--exiting"),
            PresencePhase::Hidden | PresencePhase::Entered => None,
        }
    }
}
