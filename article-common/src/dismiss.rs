//! Dismiss rule for popover-like surfaces
//!
//! While a surface is active, a pointer-down outside all of its regions or a
//! press of [`CANCEL_KEY`] asks it to close. The guard also tells the caller
//! when to install and remove its document listeners so exactly one pair
//! exists per active period.

/// Key that dismisses an active surface
pub const CANCEL_KEY: &str = "Escape";

/// Viewport coordinates of a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Viewport rectangle of a rendered element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction<'a> {
    /// `None` when the event carried no usable position
    PointerDown(Option<Point>),
    KeyDown(&'a str),
}

/// What the caller must do with its document listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Install,
    Remove,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissGuard {
    armed: bool,
}

impl DismissGuard {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Track the surface's active flag.
    pub fn sync(&mut self, is_active: bool) -> ListenerChange {
        match (self.armed, is_active) {
            (false, true) => {
                self.armed = true;
                ListenerChange::Install
            }
            (true, false) => {
                self.armed = false;
                ListenerChange::Remove
            }
            _ => ListenerChange::Unchanged,
        }
    }

    pub fn should_dismiss(&self, interaction: &Interaction<'_>, regions: &[Bounds]) -> bool {
        if !self.armed {
            return false;
        }
        match interaction {
            Interaction::PointerDown(None) => false,
            Interaction::PointerDown(Some(point)) => {
                !regions.iter().any(|region| region.contains(*point))
            }
            Interaction::KeyDown(key) => *key == CANCEL_KEY,
        }
    }
}

/// A guard together with the listeners it keeps alive.
///
/// `L` is whatever removes the listeners on drop. Listeners are created on
/// `Install` and dropped on `Remove`, or when the slot itself is dropped.
#[derive(Debug)]
pub struct ListenerSlot<L> {
    guard: DismissGuard,
    listeners: Option<L>,
}

impl<L> Default for ListenerSlot<L> {
    fn default() -> Self {
        Self {
            guard: DismissGuard::default(),
            listeners: None,
        }
    }
}

impl<L> ListenerSlot<L> {
    pub fn guard(&self) -> &DismissGuard {
        &self.guard
    }

    pub fn is_installed(&self) -> bool {
        self.listeners.is_some()
    }

    /// Follow the active flag; `install` runs only on activation and may
    /// fail to produce listeners (no document to attach to).
    pub fn sync(&mut self, is_active: bool, install: impl FnOnce() -> Option<L>) -> ListenerChange {
        let change = self.guard.sync(is_active);
        match change {
            ListenerChange::Install => self.listeners = install(),
            ListenerChange::Remove => self.listeners = None,
            ListenerChange::Unchanged => {}
        }
        change
    }
}

/// Identifies one dismissable surface within a [`SurfaceStack`]
pub type SurfaceId = u64;

/// Active surfaces in the order they were opened.
///
/// Nested surfaces (a dropdown inside a panel) all listen on the document;
/// the cancel key belongs to the most recently opened one only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStack {
    open: Vec<SurfaceId>,
}

impl SurfaceStack {
    pub fn push(&mut self, surface: SurfaceId) {
        self.remove(surface);
        self.open.push(surface);
    }

    pub fn remove(&mut self, surface: SurfaceId) {
        self.open.retain(|s| *s != surface);
    }

    pub fn is_topmost(&self, surface: SurfaceId) -> bool {
        self.open.last() == Some(&surface)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Dismiss decision for `surface`: the guard's rule, with the cancel key
    /// withheld from every surface but the topmost.
    pub fn should_dismiss(
        &self,
        surface: SurfaceId,
        guard: &DismissGuard,
        interaction: &Interaction<'_>,
        regions: &[Bounds],
    ) -> bool {
        if matches!(interaction, Interaction::KeyDown(_)) && !self.is_topmost(surface) {
            return false;
        }
        guard.should_dismiss(interaction, regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Bounds = Bounds {
        left: 0.0,
        top: 0.0,
        width: 616.0,
        height: 900.0,
    };
    const TOGGLE: Bounds = Bounds {
        left: 640.0,
        top: 24.0,
        width: 40.0,
        height: 40.0,
    };

    fn armed() -> DismissGuard {
        let mut guard = DismissGuard::default();
        guard.sync(true);
        guard
    }

    fn pointer(x: f64, y: f64) -> Interaction<'static> {
        Interaction::PointerDown(Some(Point { x, y }))
    }

    #[test]
    fn bounds_include_edges() {
        assert!(PANEL.contains(Point { x: 0.0, y: 0.0 }));
        assert!(PANEL.contains(Point { x: 616.0, y: 900.0 }));
        assert!(!PANEL.contains(Point { x: 616.5, y: 10.0 }));
        assert!(!PANEL.contains(Point { x: 10.0, y: -1.0 }));
    }

    #[test]
    fn installs_once_per_activation() {
        let mut guard = DismissGuard::default();
        assert_eq!(guard.sync(false), ListenerChange::Unchanged);
        assert_eq!(guard.sync(true), ListenerChange::Install);
        assert_eq!(guard.sync(true), ListenerChange::Unchanged);
        assert_eq!(guard.sync(false), ListenerChange::Remove);
        assert_eq!(guard.sync(false), ListenerChange::Unchanged);
    }

    #[test]
    fn repeated_open_close_balances_listeners() {
        let mut guard = DismissGuard::default();
        let mut live = 0i32;
        for active in [true, true, false, true, false, false, true, true, false] {
            match guard.sync(active) {
                ListenerChange::Install => live += 1,
                ListenerChange::Remove => live -= 1,
                ListenerChange::Unchanged => {}
            }
            assert!((0..=1).contains(&live));
            assert_eq!(live == 1, guard.is_armed());
        }
        assert_eq!(live, 0);
    }

    #[test]
    fn pointer_outside_dismisses() {
        assert!(armed().should_dismiss(&pointer(900.0, 300.0), &[PANEL, TOGGLE]));
    }

    #[test]
    fn pointer_inside_any_region_keeps_open() {
        let guard = armed();
        assert!(!guard.should_dismiss(&pointer(300.0, 300.0), &[PANEL, TOGGLE]));
        assert!(!guard.should_dismiss(&pointer(660.0, 40.0), &[PANEL, TOGGLE]));
    }

    #[test]
    fn pointer_without_position_is_ignored() {
        assert!(!armed().should_dismiss(&Interaction::PointerDown(None), &[PANEL]));
    }

    #[test]
    fn only_escape_dismisses() {
        let guard = armed();
        assert!(guard.should_dismiss(&Interaction::KeyDown("Escape"), &[PANEL]));
        assert!(!guard.should_dismiss(&Interaction::KeyDown("Enter"), &[PANEL]));
        assert!(!guard.should_dismiss(&Interaction::KeyDown("Esc"), &[PANEL]));
    }

    #[test]
    fn disarmed_guard_never_dismisses() {
        let guard = DismissGuard::default();
        assert!(!guard.should_dismiss(&pointer(900.0, 300.0), &[PANEL]));
        assert!(!guard.should_dismiss(&Interaction::KeyDown(CANCEL_KEY), &[PANEL]));
    }

    // Select trigger and its dropdown, which renders below the trigger's box
    const SELECT_ROOT: Bounds = Bounds {
        left: 48.0,
        top: 100.0,
        width: 520.0,
        height: 70.0,
    };
    const SELECT_DROPDOWN: Bounds = Bounds {
        left: 48.0,
        top: 174.0,
        width: 520.0,
        height: 240.0,
    };

    #[test]
    fn pointer_on_dropdown_option_keeps_select_open() {
        let guard = armed();
        let on_option = pointer(200.0, 190.0);
        assert!(!SELECT_ROOT.contains(Point { x: 200.0, y: 190.0 }));
        assert!(!guard.should_dismiss(&on_option, &[SELECT_ROOT, SELECT_DROPDOWN]));
        assert!(guard.should_dismiss(&pointer(200.0, 500.0), &[SELECT_ROOT, SELECT_DROPDOWN]));
    }

    /// Drop counter standing in for a listener pair
    struct Pair<'a>(&'a std::cell::Cell<u32>);

    impl Drop for Pair<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn slot_installs_one_pair_per_open_and_removes_it_on_close() {
        let installed = std::cell::Cell::new(0u32);
        let removed = std::cell::Cell::new(0u32);
        let mut slot: ListenerSlot<Pair<'_>> = ListenerSlot::default();

        for active in [true, true, false, false, true, false, true] {
            slot.sync(active, || {
                installed.set(installed.get() + 1);
                Some(Pair(&removed))
            });
            assert_eq!(slot.is_installed(), active);
            assert_eq!(slot.guard().is_armed(), active);
            assert_eq!(installed.get() - removed.get(), u32::from(active));
        }
        assert_eq!(installed.get(), 3);
        assert_eq!(removed.get(), 2);

        drop(slot);
        assert_eq!(removed.get(), 3);
    }

    #[test]
    fn slot_without_document_stays_armed_but_empty() {
        let mut slot: ListenerSlot<()> = ListenerSlot::default();
        assert_eq!(slot.sync(true, || None), ListenerChange::Install);
        assert!(!slot.is_installed());
        assert_eq!(slot.sync(false, || Some(())), ListenerChange::Remove);
        assert!(!slot.is_installed());
    }

    #[test]
    fn escape_goes_to_nested_dropdown_only() {
        const PANEL_ID: SurfaceId = 1;
        const SELECT_ID: SurfaceId = 2;
        let guard = armed();
        let mut stack = SurfaceStack::default();
        stack.push(PANEL_ID);
        stack.push(SELECT_ID);

        let escape = Interaction::KeyDown(CANCEL_KEY);
        assert!(!stack.should_dismiss(PANEL_ID, &guard, &escape, &[PANEL]));
        assert!(stack.should_dismiss(SELECT_ID, &guard, &escape, &[SELECT_ROOT]));

        stack.remove(SELECT_ID);
        assert!(stack.should_dismiss(PANEL_ID, &guard, &escape, &[PANEL]));
    }

    #[test]
    fn pointer_outside_closes_every_surface_it_misses() {
        let guard = armed();
        let mut stack = SurfaceStack::default();
        stack.push(1);
        stack.push(2);

        let inside_panel = pointer(300.0, 600.0);
        assert!(!stack.should_dismiss(1, &guard, &inside_panel, &[PANEL, TOGGLE]));
        assert!(stack.should_dismiss(2, &guard, &inside_panel, &[SELECT_ROOT, SELECT_DROPDOWN]));

        let far_away = pointer(1200.0, 600.0);
        assert!(stack.should_dismiss(1, &guard, &far_away, &[PANEL, TOGGLE]));
        assert!(stack.should_dismiss(2, &guard, &far_away, &[SELECT_ROOT]));
    }

    #[test]
    fn reopening_moves_surface_to_top_without_duplicates() {
        let mut stack = SurfaceStack::default();
        stack.push(1);
        stack.push(2);
        stack.push(1);
        assert_eq!(stack.len(), 2);
        assert!(stack.is_topmost(1));
        stack.remove(1);
        stack.remove(2);
        assert!(stack.is_empty());
    }
}
