#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMsg {
    Open,
    Close,
    Toggle,
    EscapePressed,
    BackdropClicked,
    LinkFollowed,
    PanelClicked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuVisibility {
    open: bool,
}

impl MenuVisibility {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    /// Applies a message and reports whether the visible state changed.
    pub fn dispatch(&mut self, msg: MenuMsg) -> bool {
        let next = match msg {
            MenuMsg::Open => true,
            MenuMsg::Toggle => !self.open,
            MenuMsg::Close | MenuMsg::BackdropClicked | MenuMsg::LinkFollowed => false,
            MenuMsg::EscapePressed if self.open => false,
            MenuMsg::EscapePressed | MenuMsg::PanelClicked => self.open,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

/// Document-level scroll suppression.
pub trait ScrollLock {
    fn set_scroll_locked(&self, locked: bool);
}

/// Holds the page scroll lock; releases it when dropped.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn engage(lock: L) -> Self {
        lock.set_scroll_locked(true);
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.set_scroll_locked(false);
    }
}

/// Effect body for a menu state change. The previous guard must be dropped
/// before this runs, and the returned guard lives until the next change or
/// unmount.
pub fn lock_while_open<L: ScrollLock>(open: bool, lock: L) -> Option<ScrollLockGuard<L>> {
    if open {
        Some(ScrollLockGuard::engage(lock))
    } else {
        lock.set_scroll_locked(false);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone, Default)]
    struct RecordingLock {
        locked: Rc<Cell<bool>>,
        calls: Rc<Cell<usize>>,
    }

    impl ScrollLock for RecordingLock {
        fn set_scroll_locked(&self, locked: bool) {
            self.locked.set(locked);
            self.calls.set(self.calls.get() + 1);
        }
    }

    /// Mirrors how the header drives the lock: the effect re-runs whenever
    /// the visible state changes, cleaning up the previous run first.
    struct Header {
        menu: MenuVisibility,
        guard: Option<ScrollLockGuard<RecordingLock>>,
        lock: RecordingLock,
    }

    impl Header {
        fn mount(lock: RecordingLock) -> Self {
            let guard = lock_while_open(false, lock.clone());
            Self {
                menu: MenuVisibility::default(),
                guard,
                lock,
            }
        }

        fn send(&mut self, msg: MenuMsg) {
            if self.menu.dispatch(msg) {
                self.guard.take();
                self.guard = lock_while_open(self.menu.is_open(), self.lock.clone());
            }
        }

        fn unmount(self) {}
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let lock = RecordingLock::default();
        let header = Header::mount(lock.clone());

        assert!(!header.menu.is_open());
        assert!(!lock.locked.get());
        assert_eq!(header.menu.toggle_label(), "Open menu");
    }

    #[test]
    fn opening_locks_and_closing_releases() {
        let lock = RecordingLock::default();
        let mut header = Header::mount(lock.clone());

        header.send(MenuMsg::Toggle);
        assert!(header.menu.is_open());
        assert!(lock.locked.get());
        assert_eq!(header.menu.toggle_label(), "Close menu");

        header.send(MenuMsg::Toggle);
        assert!(!lock.locked.get());
    }

    #[test]
    fn unmount_releases_lock_left_open() {
        let lock = RecordingLock::default();
        let mut header = Header::mount(lock.clone());
        header.send(MenuMsg::Open);
        assert!(lock.locked.get());

        header.unmount();

        assert!(!lock.locked.get());
    }

    #[test]
    fn rapid_toggling_ends_in_last_state() {
        let lock = RecordingLock::default();
        let mut header = Header::mount(lock.clone());

        for msg in [MenuMsg::Open, MenuMsg::Close, MenuMsg::Open, MenuMsg::Toggle, MenuMsg::Toggle] {
            header.send(msg);
        }
        assert!(header.menu.is_open());
        assert!(lock.locked.get());

        header.send(MenuMsg::LinkFollowed);
        assert!(!lock.locked.get());
    }

    #[test]
    fn escape_only_closes_an_open_menu() {
        let mut menu = MenuVisibility::default();

        assert!(!menu.dispatch(MenuMsg::EscapePressed));
        assert!(!menu.is_open());

        menu.dispatch(MenuMsg::Open);
        assert!(menu.dispatch(MenuMsg::EscapePressed));
        assert!(!menu.is_open());
    }

    #[test]
    fn panel_click_keeps_menu_open() {
        let mut menu = MenuVisibility::default();
        menu.dispatch(MenuMsg::Open);

        assert!(!menu.dispatch(MenuMsg::PanelClicked));
        assert!(menu.is_open());

        assert!(menu.dispatch(MenuMsg::BackdropClicked));
        assert!(!menu.is_open());
    }

    #[test]
    fn link_follow_always_closes() {
        let mut menu = MenuVisibility::default();

        assert!(!menu.dispatch(MenuMsg::LinkFollowed));
        menu.dispatch(MenuMsg::Open);
        menu.dispatch(MenuMsg::Open);
        assert!(menu.dispatch(MenuMsg::LinkFollowed));
        assert!(!menu.is_open());
    }

    #[test]
    fn lock_state_tracks_last_visible_state_over_sequences() {
        let msgs = [
            MenuMsg::Open,
            MenuMsg::Close,
            MenuMsg::Toggle,
            MenuMsg::EscapePressed,
            MenuMsg::PanelClicked,
            MenuMsg::BackdropClicked,
            MenuMsg::LinkFollowed,
        ];

        for first in msgs {
            for second in msgs {
                for third in msgs {
                    let lock = RecordingLock::default();
                    let mut header = Header::mount(lock.clone());
                    header.send(first);
                    header.send(second);
                    header.send(third);

                    assert_eq!(lock.locked.get(), header.menu.is_open());
                    header.unmount();
                    assert!(!lock.locked.get());
                }
            }
        }
    }

    #[test]
    fn guard_unlocks_exactly_once_on_drop() {
        let lock = RecordingLock::default();
        let guard = ScrollLockGuard::engage(lock.clone());
        assert_eq!(lock.calls.get(), 1);

        drop(guard);

        assert_eq!(lock.calls.get(), 2);
        assert!(!lock.locked.get());
    }
}
