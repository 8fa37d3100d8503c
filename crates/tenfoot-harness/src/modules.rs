//! Recording screen modules.
//!
//! A [`RecordingModule`] is a [`ScreenModule`] double that counts lifecycle
//! calls through a shared [`ModuleProbe`], and can be armed to fail `load`
//! with a missing render target. The probe stays with the test while the
//! module itself is boxed into the router.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use tenfoot_core::{ModuleCapabilities, ScreenError, ScreenId, ScreenModule};

/// Shared observation point for a [`RecordingModule`].
#[derive(Debug, Default)]
pub struct ModuleProbe {
    init: AtomicUsize,
    load: AtomicUsize,
    fail_load: AtomicBool,
}

impl ModuleProbe {
    /// Number of `init` calls observed.
    pub fn init_calls(&self) -> usize {
        self.init.load(Ordering::SeqCst)
    }

    /// Number of `load` calls observed.
    pub fn load_calls(&self) -> usize {
        self.load.load(Ordering::SeqCst)
    }

    /// Arm or disarm load failure (missing render target).
    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }
}

/// Screen module double that records lifecycle calls.
#[derive(Debug)]
pub struct RecordingModule {
    screen: ScreenId,
    caps: ModuleCapabilities,
    probe: Arc<ModuleProbe>,
}

impl RecordingModule {
    /// Create a module with default capabilities and its probe.
    pub fn new(screen: ScreenId) -> (Box<Self>, Arc<ModuleProbe>) {
        Self::with_capabilities(screen, ModuleCapabilities::default())
    }

    /// Create a module with explicit capabilities and its probe.
    pub fn with_capabilities(
        screen: ScreenId,
        caps: ModuleCapabilities,
    ) -> (Box<Self>, Arc<ModuleProbe>) {
        let probe = Arc::new(ModuleProbe::default());
        (Box::new(Self { screen, caps, probe: probe.clone() }), probe)
    }
}

impl ScreenModule for RecordingModule {
    fn capabilities(&self) -> ModuleCapabilities {
        self.caps
    }

    fn init(&mut self) {
        self.probe.init.fetch_add(1, Ordering::SeqCst);
    }

    fn load(&mut self) -> Result<(), ScreenError> {
        self.probe.load.fetch_add(1, Ordering::SeqCst);
        if self.probe.fail_load.load(Ordering::SeqCst) {
            return Err(ScreenError::MissingTarget { screen: self.screen });
        }
        Ok(())
    }
}
