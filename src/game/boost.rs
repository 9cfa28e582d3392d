/// How the boost key is interpreted.
///
/// Hold-to-boost needs key release events, which terminals only deliver when
/// the kitty keyboard protocol is active.  Without it the boost key degrades
/// to a toggle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BoostMode {
    Hold,
    Toggle,
}

/// Speed boost state, driven by boost key presses & releases
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Boost {
    mode: BoostMode,
    engaged: bool,
}

impl Boost {
    pub(super) fn new(mode: BoostMode) -> Boost {
        Boost {
            mode,
            engaged: false,
        }
    }

    /// Handle a boost key press.  In hold mode this is idempotent, so key
    /// repeat events cannot corrupt the held state.
    pub(super) fn press(&mut self) {
        match self.mode {
            BoostMode::Hold => self.engaged = true,
            BoostMode::Toggle => self.engaged = !self.engaged,
        }
    }

    /// Handle a boost key release.  Release events only occur in hold mode,
    /// but disengaging is also used when the terminal loses focus and a
    /// release may have been missed.
    pub(super) fn release(&mut self) {
        if self.mode == BoostMode::Hold {
            self.engaged = false;
        }
    }

    pub(super) fn engaged(&self) -> bool {
        self.engaged
    }
}
