// Page UI state: the scroll/menu flags and the viewport-entry reveal
// machine. Kept free of platform APIs so the threshold and one-shot
// semantics are testable without a browser.

/// Vertical scroll offset (CSS px) past which the nav switches to its
/// compact, translucent presentation.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Per-index delay between sibling reveal animations, in seconds.
pub const STAGGER_STEP: f32 = 0.1;

/// The two page-level flags, owned in one place and mutated only through
/// these methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageUi {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl PageUi {
    /// Re-evaluate the scroll flag. No hysteresis: every observed offset
    /// decides the flag anew.
    pub fn observe_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Flip the mobile menu and return the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Whether a block's entry animation may replay after the block leaves the
/// viewport. An explicit per-block setting: content blocks use `Once`, the
/// mobile menu panel uses `EveryEntry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    Once,
    EveryEntry,
}

/// Per-block reveal state fed by viewport-intersection events.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    policy: RevealPolicy,
    shown: bool,
}

impl Reveal {
    pub fn new(policy: RevealPolicy) -> Self {
        Self {
            policy,
            shown: false,
        }
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// A `Once` block that has revealed needs no further observation.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.policy == RevealPolicy::Once && self.shown
    }

    /// Feed one intersection event. Returns `Some(visible)` when the block's
    /// visual state must change, `None` when the event is a no-op (already
    /// shown, or a `false` event on a `Once` block).
    pub fn on_intersection(&mut self, entered: bool) -> Option<bool> {
        match (entered, self.shown) {
            (true, false) => {
                self.shown = true;
                Some(true)
            }
            (false, true) if self.policy == RevealPolicy::EveryEntry => {
                self.shown = false;
                Some(false)
            }
            _ => None,
        }
    }
}

/// Animation start-time offset for the `index`-th sibling in a list, so rows
/// enter in sequence rather than all at once.
#[inline]
pub fn stagger_delay(index: usize) -> f32 {
    index as f32 * STAGGER_STEP
}
