use log::{debug, warn};
use web_sys::HtmlElement;

use crate::error::DomError;

const LOCKED: &str = "hidden";

/// Something whose CSS `overflow` can be read and written.
pub trait ScrollSurface {
    fn overflow(&self) -> Result<String, DomError>;
    fn set_overflow(&self, value: &str) -> Result<(), DomError>;
}

/// The document `<body>`.
pub struct BodyStyle {
    body: HtmlElement,
}

impl BodyStyle {
    pub fn current() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;
        Ok(Self { body })
    }
}

impl ScrollSurface for BodyStyle {
    fn overflow(&self) -> Result<String, DomError> {
        self.body
            .style()
            .get_property_value("overflow")
            .map_err(DomError::style)
    }

    fn set_overflow(&self, value: &str) -> Result<(), DomError> {
        self.body
            .style()
            .set_property("overflow", value)
            .map_err(DomError::style)
    }
}

/// Holds page scrolling disabled until dropped.
///
/// The value found on acquire is written back on drop, whatever caused the
/// drop: a close callback, a prop change or the owner leaving the tree.
pub struct ScrollLock<S: ScrollSurface = BodyStyle> {
    surface: S,
    previous: String,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Result<Self, DomError> {
        let previous = surface.overflow()?;
        surface.set_overflow(LOCKED)?;
        debug!("scroll locked (was {:?})", previous);
        Ok(Self { surface, previous })
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        match self.surface.set_overflow(&self.previous) {
            Ok(()) => debug!("scroll unlocked"),
            Err(err) => warn!("failed to restore scrolling: {}", err),
        }
    }
}

/// Takes the lock only while `visible`. A surface that cannot be reached is
/// logged and leaves scrolling alone.
pub fn lock_while<S, F>(visible: bool, surface: F) -> Option<ScrollLock<S>>
where
    S: ScrollSurface,
    F: FnOnce() -> Result<S, DomError>,
{
    if !visible {
        return None;
    }
    match surface().and_then(ScrollLock::acquire) {
        Ok(lock) => Some(lock),
        Err(err) => {
            warn!("scroll lock unavailable: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody {
        overflow: Rc<RefCell<String>>,
        writes: Rc<Cell<usize>>,
    }

    impl FakeBody {
        fn with(value: &str) -> Self {
            let body = Self::default();
            *body.overflow.borrow_mut() = value.to_string();
            body
        }

        fn value(&self) -> String {
            self.overflow.borrow().clone()
        }
    }

    impl ScrollSurface for FakeBody {
        fn overflow(&self) -> Result<String, DomError> {
            Ok(self.value())
        }

        fn set_overflow(&self, value: &str) -> Result<(), DomError> {
            self.writes.set(self.writes.get() + 1);
            *self.overflow.borrow_mut() = value.to_string();
            Ok(())
        }
    }

    struct ReadOnlyBody;

    impl ScrollSurface for ReadOnlyBody {
        fn overflow(&self) -> Result<String, DomError> {
            Ok(String::new())
        }

        fn set_overflow(&self, _: &str) -> Result<(), DomError> {
            Err(DomError::Style("read-only".into()))
        }
    }

    #[test]
    fn acquire_disables_and_drop_restores() {
        let body = FakeBody::with("");
        let lock = ScrollLock::acquire(body.clone()).unwrap();
        assert_eq!(body.value(), "hidden");
        drop(lock);
        assert_eq!(body.value(), "");
    }

    #[test]
    fn restores_the_value_found_on_acquire() {
        let body = FakeBody::with("auto");
        let lock = ScrollLock::acquire(body.clone()).unwrap();
        drop(lock);
        assert_eq!(body.value(), "auto");
    }

    #[test]
    fn hidden_modal_never_touches_the_body() {
        let body = FakeBody::with("");
        let lock = lock_while(false, || Ok(body.clone()));
        assert!(lock.is_none());
        assert_eq!(body.writes.get(), 0);
    }

    #[test]
    fn repeated_open_close_ends_unlocked() {
        let body = FakeBody::with("");
        // Mirrors the modal effect: the previous cleanup runs before the next lock.
        let mut held = None;
        for visible in [true, false, true, true, false, true, false] {
            drop(held.take());
            held = lock_while(visible, || Ok(body.clone()));
            assert_eq!(body.value() == "hidden", visible);
        }
        drop(held);
        assert_eq!(body.value(), "");
        // One lock and one unlock per opening, nothing doubled.
        assert_eq!(body.writes.get(), 8);
    }

    #[test]
    fn unmount_while_open_releases() {
        let body = FakeBody::with("");
        {
            let _lock = lock_while(true, || Ok(body.clone()));
            assert_eq!(body.value(), "hidden");
        }
        assert_eq!(body.value(), "");
    }

    #[test]
    fn missing_body_yields_no_lock() {
        let lock = lock_while::<FakeBody, _>(true, || Err(DomError::NoBody));
        assert!(lock.is_none());
    }

    #[test]
    fn rejected_write_yields_no_lock() {
        assert!(lock_while(true, || Ok(ReadOnlyBody)).is_none());
    }
}
