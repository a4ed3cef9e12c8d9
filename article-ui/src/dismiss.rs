//! `use_dismiss` hook: closes a surface on outside pointer-down or Escape
//!
//! Surfaces nested inside each other (a select dropdown inside the settings
//! panel) share one [`SurfaceStack`] through context, so Escape closes only
//! the innermost open surface.

use std::sync::atomic::{AtomicU64, Ordering};

use article_common::{Interaction, ListenerChange, ListenerSlot, SurfaceId, SurfaceStack};
use dioxus::prelude::*;
use tracing::debug;

use crate::wasm_utils::{self, ScopedListener};

/// Counter for generating unique surface IDs
static SURFACE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stack shared by a surface and every surface rendered inside it
#[derive(Clone, Copy)]
struct Surfaces(Signal<SurfaceStack>);

/// Cleanup handle for the document listeners of an active surface
struct DismissListeners {
    _pointerdown: ScopedListener,
    _keydown: ScopedListener,
}

/// Report dismiss requests for a surface made of the elements `region_ids`.
///
/// Every element the user can point at while the surface is open must be
/// listed, including content positioned outside the surface's own box.
/// Listeners exist only while `is_active` is true. `on_dismiss` runs outside
/// of a Dioxus event handler, so it should only write signals.
pub fn use_dismiss<F>(is_active: bool, region_ids: Vec<String>, on_dismiss: F)
where
    F: FnMut() + Clone + 'static,
{
    let surface = use_hook(|| SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed));
    let mut stack = use_hook(|| match try_consume_context::<Surfaces>() {
        Some(Surfaces(stack)) => stack,
        None => provide_context(Surfaces(Signal::new(SurfaceStack::default()))).0,
    });
    let mut slot: Signal<ListenerSlot<DismissListeners>> = use_signal(ListenerSlot::default);

    use_drop(move || {
        if let Ok(mut stack) = stack.try_write() {
            stack.remove(surface);
        }
    });

    use_effect(use_reactive((&is_active,), move |(is_active,)| {
        let ids = region_ids.clone();
        let callback = on_dismiss.clone();
        let slot_handle = slot;
        let change = slot
            .write()
            .sync(is_active, || install_listeners(surface, ids, stack, slot_handle, callback));

        match change {
            ListenerChange::Install => {
                debug!("Installed dismiss listeners for {:?}", region_ids);
                stack.write().push(surface);
            }
            ListenerChange::Remove => {
                debug!("Removed dismiss listeners for {:?}", region_ids);
                stack.write().remove(surface);
            }
            ListenerChange::Unchanged => {}
        }
    }));
}

fn install_listeners<F>(
    surface: SurfaceId,
    region_ids: Vec<String>,
    stack: Signal<SurfaceStack>,
    slot: Signal<ListenerSlot<DismissListeners>>,
    on_dismiss: F,
) -> Option<DismissListeners>
where
    F: FnMut() + Clone + 'static,
{
    let mut on_pointer = on_dismiss.clone();
    let pointerdown = ScopedListener::on_document("pointerdown", move |e| {
        let interaction = Interaction::PointerDown(wasm_utils::pointer_position(&e));
        let regions = wasm_utils::region_bounds(&region_ids);
        if stack
            .peek()
            .should_dismiss(surface, slot.peek().guard(), &interaction, &regions)
        {
            on_pointer();
        }
    })?;

    let mut on_key = on_dismiss;
    let keydown = ScopedListener::on_document("keydown", move |e| {
        let Some(key) = wasm_utils::event_key(&e) else {
            return;
        };
        let interaction = Interaction::KeyDown(&key);
        if stack
            .peek()
            .should_dismiss(surface, slot.peek().guard(), &interaction, &[])
        {
            on_key();
        }
    })?;

    Some(DismissListeners {
        _pointerdown: pointerdown,
        _keydown: keydown,
    })
}
