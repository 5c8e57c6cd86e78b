use leptos::prelude::*;

/// Number of outstanding requests behind a form control.
///
/// The form is busy while at least one request is in flight, so a request
/// that finishes early cannot clear the flag for one that is still running.
#[derive(Clone, Copy)]
pub struct BusyCounter {
    pending: RwSignal<usize>,
}

impl BusyCounter {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(0),
        }
    }

    pub fn acquire(&self) -> BusyGuard {
        self.pending.update(|n| *n += 1);
        BusyGuard {
            pending: self.pending,
        }
    }

    /// Reactive read, for views
    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn is_busy_untracked(&self) -> bool {
        self.pending.get_untracked() > 0
    }
}

impl Default for BusyCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds one slot of a [`BusyCounter`] for as long as the guard lives.
///
/// The slot is released when the guard is dropped, whichever way the
/// enclosing future exits.
#[must_use = "the slot is released as soon as the guard is dropped"]
pub struct BusyGuard {
    pending: RwSignal<usize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        // The owning component may already be unmounted.
        let _ = self.pending.try_update(|n| *n = n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::test_owner;

    fn fallible(busy: BusyCounter, fail: bool) -> Result<(), String> {
        let _busy = busy.acquire();
        assert!(busy.is_busy_untracked());
        if fail {
            return Err("boom".into());
        }
        Ok(())
    }

    #[test]
    fn test_flag_is_cleared_on_every_exit() {
        let _owner = test_owner();

        let busy = BusyCounter::new();
        assert!(fallible(busy, false).is_ok());
        assert!(!busy.is_busy_untracked());
        assert!(fallible(busy, true).is_err());
        assert!(!busy.is_busy_untracked());
    }

    #[test]
    fn test_overlapping_guards_keep_the_flag_raised() {
        let _owner = test_owner();

        let busy = BusyCounter::new();
        let first = busy.acquire();
        let second = busy.acquire();
        drop(first);
        assert!(busy.is_busy_untracked());
        drop(second);
        assert!(!busy.is_busy_untracked());
    }
}
