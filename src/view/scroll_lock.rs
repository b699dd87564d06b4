//! Background-scroll suppression while an overlay is shown.
//!
//! The lock is held per overlay: it is engaged while at least one holder is
//! present and released when the last one leaves.

/// Something that can hold the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    VideoModal,
    NavMenu,
}

impl Overlay {
    fn bit(self) -> u8 {
        match self {
            Overlay::VideoModal => 0b01,
            Overlay::NavMenu => 0b10,
        }
    }
}

/// Edge reported when the lock flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockChange {
    Engaged,
    Released,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: u8,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.holders != 0
    }

    /// Bring the holder set in line with which overlays are open.
    ///
    /// Idempotent; the latest call fully determines the state.
    pub fn reconcile(&mut self, modal_open: bool, menu_open: bool) -> Option<LockChange> {
        let was = self.is_locked();
        self.set(Overlay::VideoModal, modal_open);
        self.set(Overlay::NavMenu, menu_open);
        self.edge(was)
    }

    fn set(&mut self, overlay: Overlay, held: bool) {
        if held {
            self.holders |= overlay.bit();
        } else {
            self.holders &= !overlay.bit();
        }
    }

    #[cfg(test)]
    fn holds(&self, overlay: Overlay) -> bool {
        self.holders & overlay.bit() != 0
    }

    fn edge(&self, was: bool) -> Option<LockChange> {
        match (was, self.is_locked()) {
            (false, true) => {
                log::debug!("scroll lock engaged");
                Some(LockChange::Engaged)
            }
            (true, false) => {
                log::debug!("scroll lock released");
                Some(LockChange::Released)
            }
            _ => None,
        }
    }
}
