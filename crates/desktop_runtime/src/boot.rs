//! Boot sequence state machine.
//!
//! The sequence is pure and timer-free; the boot screen component owns the
//! timers and feeds transitions in. Phases only move forward, so a stale timer
//! callback firing after a keypress is a no-op.

/// One line of the boot transcript plus how long it stays the latest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStage {
    /// Text printed to the boot transcript.
    pub text: &'static str,
    /// Delay before the next stage, in milliseconds.
    pub delay_ms: u32,
}

/// Boot transcript, in display order.
pub const BOOT_STAGES: &[BootStage] = &[
    BootStage {
        text: "BIOS INITIALIZATION",
        delay_ms: 10,
    },
    BootStage {
        text: "MEMORY TEST 640K OK",
        delay_ms: 20,
    },
    BootStage {
        text: "HARD DISK DETECTED",
        delay_ms: 10,
    },
    BootStage {
        text: "LOADING OPERATING SYSTEM...",
        delay_ms: 10,
    },
    BootStage {
        text: "WELCOME TO RETRO OS",
        delay_ms: 10,
    },
    BootStage {
        text: "STARTING DESKTOP ENVIRONMENT...",
        delay_ms: 50,
    },
];

/// How long the "press any key" prompt waits before completing on its own,
/// in milliseconds.
pub const AWAIT_KEY_TIMEOUT_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Phase of the boot sequence.
pub enum BootPhase {
    /// Power is on but the transcript has not started.
    #[default]
    Pending,
    /// Printing transcript lines; `stage` indexes the latest visible line.
    Booting {
        /// Index of the most recently printed [`BOOT_STAGES`] entry.
        stage: usize,
    },
    /// Transcript finished; waiting for a keypress or the auto timeout.
    AwaitKey,
    /// Boot is done and the desktop owns the screen.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Forward-only boot sequence state.
pub struct BootSequence {
    phase: BootPhase,
}

impl BootSequence {
    /// Sequence at power-on, before the transcript starts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Starts the transcript. No-op unless the sequence is pending.
    pub fn power_on(&mut self) -> bool {
        if self.phase == BootPhase::Pending {
            self.phase = BootPhase::Booting { stage: 0 };
            return true;
        }
        false
    }

    /// Advances to the next transcript line, or to the key prompt after the
    /// last line. No-op outside the booting phase.
    pub fn advance_stage(&mut self) -> bool {
        if let BootPhase::Booting { stage } = self.phase {
            let next = stage + 1;
            self.phase = if next < BOOT_STAGES.len() {
                BootPhase::Booting { stage: next }
            } else {
                BootPhase::AwaitKey
            };
            return true;
        }
        false
    }

    /// Completes the sequence from the key prompt, whether the trigger was a
    /// keypress or the auto timeout. No-op in any other phase.
    pub fn any_key(&mut self) -> bool {
        if self.phase == BootPhase::AwaitKey {
            self.phase = BootPhase::Complete;
            return true;
        }
        false
    }

    pub fn is_booting(&self) -> bool {
        matches!(self.phase, BootPhase::Booting { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BootPhase::Complete
    }

    /// Delay before the next transition in the current phase, if any.
    pub fn next_delay_ms(&self) -> Option<u32> {
        match self.phase {
            BootPhase::Booting { stage } => BOOT_STAGES.get(stage).map(|s| s.delay_ms),
            BootPhase::AwaitKey => Some(AWAIT_KEY_TIMEOUT_MS),
            BootPhase::Pending | BootPhase::Complete => None,
        }
    }

    /// Transcript lines visible in the current phase, oldest first.
    pub fn visible_lines(&self) -> &'static [BootStage] {
        match self.phase {
            BootPhase::Pending => &[],
            BootPhase::Booting { stage } => &BOOT_STAGES[..=stage.min(BOOT_STAGES.len() - 1)],
            BootPhase::AwaitKey | BootPhase::Complete => BOOT_STAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sequence_walks_every_stage_then_awaits_a_key() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.phase(), BootPhase::Pending);
        assert!(boot.power_on());

        for stage in 0..BOOT_STAGES.len() {
            assert_eq!(boot.phase(), BootPhase::Booting { stage });
            assert_eq!(boot.visible_lines().len(), stage + 1);
            assert!(boot.advance_stage());
        }

        assert_eq!(boot.phase(), BootPhase::AwaitKey);
        assert_eq!(boot.visible_lines(), BOOT_STAGES);
        assert!(boot.any_key());
        assert!(boot.is_complete());
    }

    #[test]
    fn transitions_outside_their_phase_are_no_ops() {
        let mut boot = BootSequence::new();

        // Nothing fires before power-on except power_on itself.
        assert!(!boot.advance_stage());
        assert!(!boot.any_key());

        assert!(boot.power_on());
        assert!(!boot.power_on());
        assert!(!boot.any_key());

        while !matches!(boot.phase(), BootPhase::AwaitKey) {
            boot.advance_stage();
        }
        assert!(!boot.advance_stage());
        assert!(boot.any_key());

        // A stale timer firing after completion changes nothing.
        assert!(!boot.any_key());
        assert!(!boot.advance_stage());
        assert_eq!(boot.phase(), BootPhase::Complete);
    }

    #[test]
    fn next_delay_tracks_the_current_stage() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.next_delay_ms(), None);

        boot.power_on();
        assert_eq!(boot.next_delay_ms(), Some(10));
        boot.advance_stage();
        assert_eq!(boot.next_delay_ms(), Some(20));

        while boot.is_booting() {
            boot.advance_stage();
        }
        assert_eq!(boot.next_delay_ms(), Some(AWAIT_KEY_TIMEOUT_MS));

        boot.any_key();
        assert_eq!(boot.next_delay_ms(), None);
    }
}
