#![allow(dead_code)]

use async_trait::async_trait;
use geomark_core::{
    open_db_in_memory, AlertSink, DetailRoute, Image, ImageId, ImagePicker, Marker, MarkerId,
    MarkerService, MarkerStore, Navigator, PickResult, PickerError, PickerOptions, StorageError,
    StorageResult, ViewContext,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<DetailRoute>>,
    backs: AtomicUsize,
}

impl RecordingNavigator {
    pub fn take_route(&self) -> DetailRoute {
        self.opened
            .lock()
            .unwrap()
            .pop()
            .expect("navigator should have received a route")
    }

    pub fn opened_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }

    pub fn back_count(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn open_detail(&self, route: DetailRoute) {
        self.opened.lock().unwrap().push(route);
    }

    fn go_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    shown: Mutex<Vec<(String, String)>>,
}

impl RecordingAlerts {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Replays queued results; reports `Cancelled` once the queue is empty.
#[derive(Default)]
pub struct ScriptedPicker {
    queue: Mutex<VecDeque<Result<PickResult, PickerError>>>,
    calls: AtomicUsize,
}

impl ScriptedPicker {
    pub fn push(&self, result: Result<PickResult, PickerError>) {
        self.queue.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImagePicker for ScriptedPicker {
    async fn pick_image(&self, options: &PickerOptions) -> Result<PickResult, PickerError> {
        assert!(options.allow_editing);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(PickResult::Cancelled))
    }
}

/// Wraps the real service, counting reads and optionally failing writes.
pub struct CountingStore {
    inner: MarkerService,
    get_markers_calls: AtomicUsize,
    get_images_calls: AtomicUsize,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl CountingStore {
    pub fn new(inner: MarkerService) -> Self {
        Self {
            inner,
            get_markers_calls: AtomicUsize::new(0),
            get_images_calls: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn get_markers_calls(&self) -> usize {
        self.get_markers_calls.load(Ordering::SeqCst)
    }

    pub fn get_images_calls(&self) -> usize {
        self.get_images_calls.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn read_gate(&self) -> StorageResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::TaskFailed("injected read failure".to_string()));
        }
        Ok(())
    }

    fn write_gate(&self) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::TaskFailed("injected write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MarkerStore for CountingStore {
    async fn get_markers(&self) -> StorageResult<Vec<Marker>> {
        self.get_markers_calls.fetch_add(1, Ordering::SeqCst);
        self.read_gate()?;
        self.inner.get_markers().await
    }

    async fn add_marker(&self, latitude: f64, longitude: f64) -> StorageResult<MarkerId> {
        self.write_gate()?;
        self.inner.add_marker(latitude, longitude).await
    }

    async fn delete_marker(&self, id: MarkerId) -> StorageResult<()> {
        self.write_gate()?;
        self.inner.delete_marker(id).await
    }

    async fn add_image(&self, marker_id: MarkerId, uri: String) -> StorageResult<ImageId> {
        self.write_gate()?;
        self.inner.add_image(marker_id, uri).await
    }

    async fn get_images(&self, marker_id: MarkerId) -> StorageResult<Vec<Image>> {
        self.get_images_calls.fetch_add(1, Ordering::SeqCst);
        self.read_gate()?;
        self.inner.get_images(marker_id).await
    }

    async fn delete_image(&self, id: ImageId) -> StorageResult<()> {
        self.write_gate()?;
        self.inner.delete_image(id).await
    }
}

pub struct Harness {
    pub service: MarkerService,
    pub store: Arc<CountingStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub alerts: Arc<RecordingAlerts>,
    pub picker: Arc<ScriptedPicker>,
}

impl Harness {
    pub fn in_memory() -> Self {
        let service = MarkerService::try_new(open_db_in_memory().unwrap()).unwrap();
        Self {
            store: Arc::new(CountingStore::new(service.clone())),
            service,
            navigator: Arc::new(RecordingNavigator::default()),
            alerts: Arc::new(RecordingAlerts::default()),
            picker: Arc::new(ScriptedPicker::default()),
        }
    }

    pub fn ctx(&self) -> ViewContext {
        ViewContext::new(
            self.store.clone(),
            self.navigator.clone(),
            self.alerts.clone(),
            self.picker.clone(),
        )
    }
}

pub fn ids(markers: &[Marker]) -> Vec<MarkerId> {
    markers.iter().map(|marker| marker.id).collect()
}
