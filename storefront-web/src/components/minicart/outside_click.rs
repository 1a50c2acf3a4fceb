//! Closing the minicart when the shopper clicks elsewhere on the page.
use crate::dom;
use web_sys::Node;
use yew::prelude::*;

/// Whether a pointer-down should close the popover.
#[must_use]
pub const fn should_close(open: bool, inside: bool) -> bool {
    open && !inside
}

/// Latest props seen by the document listener.
///
/// The listener is registered once per mount, so it reads `open` and the toggle
/// callback from here instead of capturing them.
#[derive(Default)]
pub struct OutsideClick {
    open: bool,
    on_outside: Callback<()>,
}

impl OutsideClick {
    pub fn sync(&mut self, open: bool, on_outside: &Callback<()>) {
        self.open = open;
        if self.on_outside != *on_outside {
            self.on_outside = on_outside.clone();
        }
    }

    /// The callback to fire for a pointer-down, if any.
    #[must_use]
    pub fn on_pointer_down(&self, inside: bool) -> Option<Callback<()>> {
        should_close(self.open, inside).then(|| self.on_outside.clone())
    }
}

/// Emit `on_outside` for every pointer-down outside `container` while `open`.
///
/// One document listener exists per mounted component; it is removed when the
/// component unmounts.
#[hook]
pub fn use_outside_click(container: NodeRef, open: bool, on_outside: Callback<()>) {
    let watch = use_mut_ref(OutsideClick::default);
    watch.borrow_mut().sync(open, &on_outside);

    use_effect_with((), move |()| {
        let listener = dom::on_document_pointer_down(move |target| {
            let Some(root) = container.cast::<Node>() else {
                return;
            };
            let inside = root.contains(target);
            let fire = watch.borrow().on_pointer_down(inside);
            if let Some(cb) = fire {
                cb.emit(());
            }
        });
        move || drop(listener)
    });
}
