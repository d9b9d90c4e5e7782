//! Published theme state
//!
//! A [`ThemeApplier`] is owned by one storefront view. It holds the token set
//! renderers read on their next paint. Publication always replaces the whole
//! set, so readers never observe a partially updated theme. Two previews
//! rendered side by side each own their own applier.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::tokens::StyleTokenSet;

type RedrawCallback = Box<dyn Fn() + Send + Sync>;

/// Instance-owned "current tokens" slot
#[derive(Default)]
pub struct ThemeApplier {
    /// Currently published token set (None before the first apply / after teardown)
    current: RwLock<Option<Arc<StyleTokenSet>>>,

    /// Bumped on every publication change
    generation: AtomicU64,

    /// Flag indicating readers should repaint
    needs_repaint: AtomicBool,

    /// Redraw hook registered by the hosting view
    redraw: Mutex<Option<RedrawCallback>>,
}

impl ThemeApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the function that schedules a repaint of the owning view
    pub fn set_redraw_callback<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.redraw.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(callback));
    }

    fn trigger_redraw(&self) {
        self.needs_repaint.store(true, Ordering::SeqCst);
        if let Some(callback) = self
            .redraw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            callback();
        }
    }

    /// Publish a token set, replacing any prior publication.
    ///
    /// Idempotent: publishing tokens equal to the current ones changes nothing
    /// and returns `false`.
    pub fn apply(&self, tokens: StyleTokenSet) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if current.as_deref() == Some(&tokens) {
            return false;
        }
        *current = Some(Arc::new(tokens));
        drop(current);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, "ThemeApplier::apply - published new tokens");
        self.trigger_redraw();
        true
    }

    /// Remove the published token set. Returns `false` if nothing was published.
    pub fn teardown(&self) -> bool {
        let removed = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if removed {
            self.generation.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("ThemeApplier::teardown - tokens removed");
            self.trigger_redraw();
        }
        removed
    }

    /// Snapshot of the published tokens
    pub fn current(&self) -> Option<Arc<StyleTokenSet>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_published(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Publication counter; changes whenever the published state changes
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Check if the published state changed since the last [`clear_repaint`](Self::clear_repaint)
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    /// Tie the publication to a scope; tokens are torn down when the guard drops
    pub fn mount(&self) -> ThemeScope<'_> {
        ThemeScope { applier: self }
    }
}

impl fmt::Debug for ThemeApplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeApplier")
            .field("published", &self.is_published())
            .field("generation", &self.generation())
            .field("needs_repaint", &self.needs_repaint())
            .finish()
    }
}

/// Mounted storefront view; tears the theme down on drop
#[derive(Debug)]
pub struct ThemeScope<'a> {
    applier: &'a ThemeApplier,
}

impl ThemeScope<'_> {
    pub fn apply(&self, tokens: StyleTokenSet) -> bool {
        self.applier.apply(tokens)
    }

    pub fn current(&self) -> Option<Arc<StyleTokenSet>> {
        self.applier.current()
    }
}

impl Drop for ThemeScope<'_> {
    fn drop(&mut self) {
        self.applier.teardown();
    }
}
