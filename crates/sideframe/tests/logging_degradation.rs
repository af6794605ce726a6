//! Storage failures degrade gracefully: the controller logs a warning and
//! carries on. Verified with a capturing subscriber layer.

use std::sync::{Arc, Mutex};

use sideframe::{
    Config, Context, OpenParams, Options, SettingsStore, Sideframe, SideframeSettings,
    StorageError, StorageResult, Viewport,
};
use sideframe_harness::fixtures::bare_document;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context as LayerContext, Layer, SubscriberExt};

/// Layer that collects formatted event messages.
#[derive(Clone, Default)]
struct MessageCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageCapture {
    fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|m| m.contains(needle))
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            use std::fmt::Write;
            let _ = write!(self.0, "{value:?}");
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for MessageCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: LayerContext<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.messages.lock().unwrap().push(message);
    }
}

/// Settings store that fails on demand.
struct FlakyStore {
    fail_load: bool,
    fail_save: bool,
}

impl SettingsStore for FlakyStore {
    fn name(&self) -> &str {
        "FlakyStore"
    }

    fn load(&self) -> StorageResult<SideframeSettings> {
        if self.fail_load {
            Err(StorageError::Corruption("load failure".into()))
        } else {
            Ok(SideframeSettings::default())
        }
    }

    fn save(&self, _settings: &SideframeSettings) -> StorageResult<()> {
        if self.fail_save {
            Err(StorageError::Corruption("save failure".into()))
        } else {
            Ok(())
        }
    }

    fn clear(&self) -> StorageResult<()> {
        Ok(())
    }
}

fn controller(store: FlakyStore) -> Sideframe {
    let ctx = Context::new(
        Arc::new(sideframe::NullToolbar),
        Arc::new(store),
        Config::default(),
        Viewport {
            width: 1024.0,
            touch: false,
        },
    );
    Sideframe::new(ctx, Options::default())
}

#[test]
fn failed_settings_save_warns_and_still_completes() {
    let capture = MessageCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut sideframe = controller(FlakyStore {
            fail_load: false,
            fail_save: true,
        });
        sideframe.open(OpenParams::url("/admin/")).unwrap();
        let token = sideframe.pending_token().unwrap();
        assert!(sideframe.finish_load(token, bare_document("/admin/")));
        assert!(sideframe.view().container.frame().unwrap().is_visible());
    });

    assert!(capture.contains("failed to persist sideframe settings"));
}

#[test]
fn failed_settings_load_warns_and_falls_back_to_defaults() {
    let capture = MessageCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut sideframe = controller(FlakyStore {
            fail_load: true,
            fail_save: false,
        });
        // Open succeeds with the computed default width.
        sideframe.open(OpenParams::url("/admin/")).unwrap();
        assert!(sideframe.is_open());
        assert!(sideframe.view().container.width().is_some());
    });

    assert!(capture.contains("settings load failed"));
}

#[test]
fn successful_persistence_stays_quiet() {
    let capture = MessageCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut sideframe = controller(FlakyStore {
            fail_load: false,
            fail_save: false,
        });
        sideframe.open(OpenParams::url("/admin/")).unwrap();
        let token = sideframe.pending_token().unwrap();
        assert!(sideframe.finish_load(token, bare_document("/admin/")));
    });

    assert!(!capture.contains("failed to persist"));
    assert!(!capture.contains("settings load failed"));
}
