//! The classification session.
//!
//! A [`ClassificationSession`] holds everything a classifier UI needs between
//! user actions: the model lifecycle state, the currently selected image, the
//! last result and the presenter to report to. It runs one classification at a
//! time through the preprocess, inference and ranking stages, in that order.

use crate::core::config::ClassifierConfig;
use crate::core::errors::{ClassifierError, ClassifierResult};
use crate::core::traits::{InferenceEngine, ModelBackend};
use crate::domain::{ImageSample, ModelState, ModelStatus, Severity};
use crate::pipeline::acquire::ImageAcquirer;
use crate::pipeline::loader::ModelLoader;
use crate::pipeline::presenter::Presenter;
use crate::pipeline::stats::ClassificationStats;
use crate::processors::{Preprocessor, RankedResult, rank};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};

/// Notice sent to the presenter once the model is ready.
pub const MODEL_LOADED_NOTICE: &str = "Model loaded successfully!";

/// Stage a classification request is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyPhase {
    #[default]
    Idle,
    Preprocessing,
    Inferring,
    Ranking,
}

impl std::fmt::Display for ClassifyPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyPhase::Idle => write!(f, "idle"),
            ClassifyPhase::Preprocessing => write!(f, "preprocessing"),
            ClassifyPhase::Inferring => write!(f, "inferring"),
            ClassifyPhase::Ranking => write!(f, "ranking"),
        }
    }
}

/// Explicit classifier state plus the presenter it reports to.
#[derive(Debug)]
pub struct ClassificationSession<E, P> {
    model: ModelState<E>,
    image: Option<ImageSample>,
    phase: ClassifyPhase,
    last_result: Option<RankedResult>,
    last_error: Option<String>,
    preprocessor: Preprocessor,
    acquirer: ImageAcquirer,
    presenter: P,
    stats: ClassificationStats,
}

impl<E, P> ClassificationSession<E, P>
where
    E: InferenceEngine,
    P: Presenter,
{
    /// Creates a session with no model and no image.
    pub fn new(presenter: P) -> Self {
        Self {
            model: ModelState::Unloaded,
            image: None,
            phase: ClassifyPhase::Idle,
            last_result: None,
            last_error: None,
            preprocessor: Preprocessor::new(),
            acquirer: ImageAcquirer::new(),
            presenter,
            stats: ClassificationStats::new(),
        }
    }

    /// Creates a session whose preprocessor targets `config`'s input shape.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the input shape has a zero dimension.
    pub fn from_config(presenter: P, config: &ClassifierConfig) -> ClassifierResult<Self> {
        let preprocessor = Preprocessor::with_input_shape(config.get_input_shape())?;
        Ok(Self::new(presenter).with_preprocessor(preprocessor))
    }

    /// Replaces the preprocessor, e.g. for a model trained on another input size.
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Loads the model and its metadata. Only one attempt is allowed per session.
    ///
    /// The presenter sees `Loading` and then `Ready` or `Failed`. A failed load
    /// is final; there is no retry.
    ///
    /// # Errors
    ///
    /// * `LoadAlreadyAttempted` - A load already ran; the state is unchanged
    /// * `MetadataUnavailable` / `ModelUnavailable` - The load failed
    pub fn load_model<B>(
        &mut self,
        loader: &ModelLoader<B>,
        model_location: &Path,
        metadata_location: &Path,
    ) -> ClassifierResult<()>
    where
        B: ModelBackend<Engine = E>,
    {
        if !matches!(self.model, ModelState::Unloaded) {
            let state = self.model.status().to_string();
            warn!("Ignoring model load request, state is {state}");
            return Err(ClassifierError::LoadAlreadyAttempted { state });
        }

        info!(
            "Loading model from {} (metadata {})",
            model_location.display(),
            metadata_location.display()
        );
        self.set_model_state(ModelState::Loading);

        match loader.load(model_location, metadata_location) {
            Ok(loaded) => {
                self.set_model_state(ModelState::Ready(loaded));
                self.presenter.on_notice(MODEL_LOADED_NOTICE, Severity::Success);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load model: {e}");
                self.set_model_state(ModelState::Failed(e.to_string()));
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Sets the image the next classification will use.
    pub fn select_image(&mut self, sample: ImageSample) {
        debug!("Selected {}x{} image", sample.width(), sample.height());
        self.image = Some(sample);
    }

    /// Decodes and selects an image from raw bytes with a declared MIME type.
    ///
    /// On failure the previously selected image is kept and the presenter is told.
    pub fn select_bytes(&mut self, bytes: &[u8], mime: &str) -> ClassifierResult<()> {
        let result = self.acquirer.accept_bytes(bytes, mime);
        self.select_acquired(result)
    }

    /// Decodes and selects an image file.
    ///
    /// On failure the previously selected image is kept and the presenter is told.
    pub fn select_path(&mut self, path: &Path) -> ClassifierResult<()> {
        let result = self.acquirer.accept_path(path);
        self.select_acquired(result)
    }

    fn select_acquired(&mut self, result: ClassifierResult<ImageSample>) -> ClassifierResult<()> {
        match result {
            Ok(sample) => {
                self.select_image(sample);
                Ok(())
            }
            Err(e) => {
                warn!("Image rejected: {e}");
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Whether [`classify`](Self::classify) would start right now.
    ///
    /// UIs use this to enable or disable their classify trigger.
    pub fn can_classify(&self) -> bool {
        self.phase == ClassifyPhase::Idle && self.model.is_ready() && self.image.is_some()
    }

    /// Classifies the selected image.
    ///
    /// Runs preprocessing, inference and ranking in order, hands the result to
    /// the presenter and returns it. Intermediate tensors are dropped as soon as
    /// the next stage has read them, whether or not that stage succeeds.
    ///
    /// # Errors
    ///
    /// * `Busy` - Another request is in flight
    /// * `NotReady` - The model is not ready or no image is selected; nothing runs
    /// * Any stage error; the session returns to idle
    pub fn classify(&mut self) -> ClassifierResult<&RankedResult> {
        if self.phase != ClassifyPhase::Idle {
            let e = ClassifierError::Busy;
            warn!("Classification requested while {}", self.phase);
            self.report(&e);
            return Err(e);
        }

        if let Some(reason) = self.missing_precondition() {
            let e = ClassifierError::not_ready(reason);
            warn!("{e}");
            self.report(&e);
            return Err(e);
        }

        self.presenter.on_busy_changed(true);
        let outcome = self.run_stages();
        self.phase = ClassifyPhase::Idle;
        self.presenter.on_busy_changed(false);
        self.stats.record_outcome(outcome.is_ok());

        match outcome {
            Ok(result) => {
                self.last_error = None;
                self.presenter.on_classification_result(&result);
                Ok(&*self.last_result.insert(result))
            }
            Err(e) => {
                if e.is_data_integrity() {
                    error!("Model and metadata disagree: {e}");
                } else {
                    error!("Classification failed: {e}");
                }
                self.report(&e);
                Err(e)
            }
        }
    }

    fn missing_precondition(&self) -> Option<&'static str> {
        if !self.model.is_ready() {
            Some("model is not loaded")
        } else if self.image.is_none() {
            Some("no image selected")
        } else {
            None
        }
    }

    fn run_stages(&mut self) -> ClassifierResult<RankedResult> {
        let (Some(model), Some(image)) = (self.model.loaded(), self.image.as_ref()) else {
            return Err(ClassifierError::not_ready("model or image missing"));
        };
        let model = model.clone();

        self.phase = ClassifyPhase::Preprocessing;
        let tensor = self.preprocessor.preprocess(image)?;
        trace!("Preprocessed tensor {:?}", tensor.shape());

        self.phase = ClassifyPhase::Inferring;
        let start = Instant::now();
        let prediction = model.engine().predict(&tensor);
        let elapsed = start.elapsed();
        drop(tensor);
        trace!("Released input tensor");
        self.stats.record_inference(elapsed);
        debug!(
            "Inference with '{}' took {elapsed:.2?}",
            model.engine().model_name()
        );
        let vector = prediction?;

        self.phase = ClassifyPhase::Ranking;
        let ranked = rank(&vector, model.labels());
        drop(vector);
        trace!("Released prediction vector");
        ranked
    }

    fn set_model_state(&mut self, state: ModelState<E>) {
        self.model = state;
        let status = self.model.status();
        debug!("Model state changed to {status}");
        self.presenter.on_model_state_changed(&status);
    }

    fn report(&mut self, error: &ClassifierError) {
        let message = error.user_message();
        self.last_error = Some(message.to_string());
        self.presenter.on_error(message, error.severity());
    }

    pub fn model_state(&self) -> &ModelState<E> {
        &self.model
    }

    pub fn model_status(&self) -> ModelStatus {
        self.model.status()
    }

    /// Labels of the loaded model, for display. Empty until the model is ready.
    pub fn labels(&self) -> &[String] {
        self.model.loaded().map(|m| m.labels()).unwrap_or(&[])
    }

    pub fn image(&self) -> Option<&ImageSample> {
        self.image.as_ref()
    }

    pub fn phase(&self) -> ClassifyPhase {
        self.phase
    }

    pub fn last_result(&self) -> Option<&RankedResult> {
        self.last_result.as_ref()
    }

    /// User-facing message of the most recent failure, cleared by a successful classification.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn stats(&self) -> &ClassificationStats {
        &self.stats
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tensor::{InputTensor, PredictionVector};
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use std::path::PathBuf;
    use crate::domain::Notification;
    use crate::pipeline::presenter::TracingPresenter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Returns a fixed vector and records the shape of every input it saw.
    #[derive(Debug)]
    struct FakeEngine {
        output: Vec<f32>,
        calls: Arc<AtomicUsize>,
        shapes: Arc<Mutex<Vec<Vec<usize>>>>,
        fail: bool,
    }

    impl InferenceEngine for FakeEngine {
        fn predict(&self, input: &InputTensor) -> Result<PredictionVector, ClassifierError> {
            self.shapes.lock().unwrap().push(input.shape().to_vec());
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClassifierError::inference(
                    "fake",
                    "forward pass failed",
                    None::<std::io::Error>,
                ));
            }
            Ok(PredictionVector::from(self.output.clone()))
        }

        fn model_name(&self) -> &str {
            "fake"
        }
    }

    struct FakeBackend {
        output: Vec<f32>,
        calls: Arc<AtomicUsize>,
        shapes: Arc<Mutex<Vec<Vec<usize>>>>,
        fail: bool,
    }

    impl FakeBackend {
        fn new(output: Vec<f32>) -> Self {
            Self {
                output,
                calls: Arc::new(AtomicUsize::new(0)),
                shapes: Arc::new(Mutex::new(Vec::new())),
                fail: false,
            }
        }
    }

    impl ModelBackend for FakeBackend {
        type Engine = FakeEngine;

        fn load_engine(&self, _location: &Path) -> Result<FakeEngine, ClassifierError> {
            Ok(FakeEngine {
                output: self.output.clone(),
                calls: Arc::clone(&self.calls),
                shapes: Arc::clone(&self.shapes),
                fail: self.fail,
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        State(ModelStatus),
        Result(Vec<(String, String)>),
        Error(String, Severity),
        Notice(String, Severity),
        Busy(bool),
    }

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        events: Vec<Event>,
    }

    impl Presenter for RecordingPresenter {
        fn on_model_state_changed(&mut self, status: &ModelStatus) {
            self.events.push(Event::State(status.clone()));
        }

        fn on_classification_result(&mut self, result: &RankedResult) {
            self.events.push(Event::Result(
                result
                    .iter()
                    .map(|e| (e.label.clone(), e.percentage()))
                    .collect(),
            ));
        }

        fn on_error(&mut self, message: &str, severity: Severity) {
            self.events.push(Event::Error(message.to_string(), severity));
        }

        fn on_notice(&mut self, message: &str, severity: Severity) {
            self.events.push(Event::Notice(message.to_string(), severity));
        }

        fn on_busy_changed(&mut self, busy: bool) {
            self.events.push(Event::Busy(busy));
        }
    }

    type TestSession = ClassificationSession<FakeEngine, RecordingPresenter>;

    struct Fixture {
        _dir: tempfile::TempDir,
        metadata: PathBuf,
        model: PathBuf,
    }

    fn fixture(labels: &[&str]) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let metadata = dir.path().join("metadata.json");
        let body = serde_json::json!({ "labels": labels, "modelName": "pets" });
        std::fs::write(&metadata, body.to_string()).unwrap();
        let model = dir.path().join("model.onnx");
        Fixture {
            _dir: dir,
            metadata,
            model,
        }
    }

    fn sample() -> ImageSample {
        ImageSample::from_rgb(RgbImage::from_pixel(32, 24, Rgb([10, 20, 30]))).unwrap()
    }

    fn ready_session(output: Vec<f32>, labels: &[&str]) -> (TestSession, Arc<AtomicUsize>) {
        let fx = fixture(labels);
        let backend = FakeBackend::new(output);
        let calls = Arc::clone(&backend.calls);
        let loader = ModelLoader::new(backend);
        let mut session = TestSession::new(RecordingPresenter::default());
        session.load_model(&loader, &fx.model, &fx.metadata).unwrap();
        (session, calls)
    }

    #[test]
    fn test_load_reports_transitions_and_notice() {
        let (session, _) = ready_session(vec![0.5, 0.5], &["cat", "dog"]);
        let events = &session.presenter().events;
        assert_eq!(events[0], Event::State(ModelStatus::Loading));
        assert_eq!(
            events[1],
            Event::State(ModelStatus::Ready {
                model_name: "pets".to_string(),
                labels: vec!["cat".to_string(), "dog".to_string()],
            })
        );
        assert_eq!(
            events[2],
            Event::Notice(MODEL_LOADED_NOTICE.to_string(), Severity::Success)
        );
        assert_eq!(session.labels(), ["cat", "dog"]);
    }

    #[test]
    fn test_classify_end_to_end() {
        let (mut session, calls) = ready_session(vec![0.1, 0.7, 0.2], &["cat", "dog", "bird"]);
        session.select_image(sample());
        assert!(session.can_classify());

        let result = session.classify().unwrap();
        let pairs: Vec<(&str, f32)> = result
            .iter()
            .map(|e| (e.label.as_str(), e.probability))
            .collect();
        assert_eq!(pairs, vec![("dog", 0.7), ("bird", 0.2), ("cat", 0.1)]);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.phase(), ClassifyPhase::Idle);
        assert_eq!(session.last_result().map(|r| r.len()), Some(3));
        assert_eq!(session.stats().successful, 1);
        assert_eq!(session.stats().inference_count(), 1);

        let events = &session.presenter().events;
        let tail = &events[events.len() - 3..];
        assert_eq!(tail[0], Event::Busy(true));
        assert_eq!(tail[1], Event::Busy(false));
        assert_eq!(
            tail[2],
            Event::Result(vec![
                ("dog".to_string(), "70.00".to_string()),
                ("bird".to_string(), "20.00".to_string()),
                ("cat".to_string(), "10.00".to_string()),
            ])
        );
    }

    #[test]
    fn test_not_ready_without_model_runs_nothing() {
        let mut session = TestSession::new(RecordingPresenter::default());
        session.select_image(sample());
        assert!(!session.can_classify());

        let err = session.classify().unwrap_err();
        assert!(matches!(err, ClassifierError::NotReady { .. }));
        assert_eq!(session.phase(), ClassifyPhase::Idle);
        assert_eq!(session.stats().total, 0);
        assert_eq!(
            session.presenter().events,
            vec![Event::Error(
                "Model or image not loaded correctly.".to_string(),
                Severity::Error
            )]
        );
    }

    #[test]
    fn test_not_ready_without_image_skips_engine() {
        let (mut session, calls) = ready_session(vec![1.0], &["only"]);
        let err = session.classify().unwrap_err();
        assert!(matches!(err, ClassifierError::NotReady { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_busy_rejects_second_request() {
        let (mut session, calls) = ready_session(vec![1.0], &["only"]);
        session.select_image(sample());
        session.phase = ClassifyPhase::Inferring;
        assert!(!session.can_classify());

        let err = session.classify().unwrap_err();
        assert!(matches!(err, ClassifierError::Busy));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.phase(), ClassifyPhase::Inferring);
        assert!(matches!(
            session.presenter().events.last(),
            Some(Event::Error(_, Severity::Warning))
        ));
    }

    #[test]
    fn test_shape_mismatch_surfaces_and_returns_to_idle() {
        let (mut session, _) = ready_session(vec![0.2, 0.3, 0.5], &["a", "b"]);
        session.select_image(sample());

        let err = session.classify().unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::ShapeMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
        assert_eq!(session.phase(), ClassifyPhase::Idle);
        assert!(session.last_result().is_none());
        assert_eq!(
            session.last_error(),
            Some("Error classifying the image. Please try again.")
        );
        assert_eq!(session.stats().failed, 1);
        assert!(session.can_classify());
    }

    #[test]
    fn test_engine_failure_returns_to_idle() {
        let fx = fixture(&["a"]);
        let mut backend = FakeBackend::new(vec![1.0]);
        backend.fail = true;
        let loader = ModelLoader::new(backend);
        let mut session = TestSession::new(RecordingPresenter::default());
        session.load_model(&loader, &fx.model, &fx.metadata).unwrap();
        session.select_image(sample());

        assert!(matches!(
            session.classify(),
            Err(ClassifierError::Inference { .. })
        ));
        assert_eq!(session.phase(), ClassifyPhase::Idle);
        assert_eq!(session.stats().failed, 1);
        assert_eq!(session.stats().inference_count(), 1);
        assert_eq!(
            session.presenter().events.last(),
            Some(&Event::Error(
                "Error classifying the image. Please try again.".to_string(),
                Severity::Error
            ))
        );
    }

    #[test]
    fn test_metadata_failure_is_permanent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FakeBackend::new(vec![1.0]);
        let calls = Arc::clone(&backend.calls);
        let loader = ModelLoader::new(backend);
        let mut session = TestSession::new(RecordingPresenter::default());

        let missing = dir.path().join("metadata.json");
        let err = session
            .load_model(&loader, &dir.path().join("model.onnx"), &missing)
            .unwrap_err();
        assert!(matches!(err, ClassifierError::MetadataUnavailable { .. }));
        assert!(matches!(session.model_state(), ModelState::Failed(_)));

        // a valid document now exists, but the session stays failed
        std::fs::write(&missing, r#"{"labels":["x"]}"#).unwrap();
        let err = session
            .load_model(&loader, &dir.path().join("model.onnx"), &missing)
            .unwrap_err();
        assert!(matches!(err, ClassifierError::LoadAlreadyAttempted { .. }));
        assert!(matches!(session.model_state(), ModelState::Failed(_)));
        assert!(!session.model_state().is_ready());

        session.select_image(sample());
        assert!(matches!(
            session.classify(),
            Err(ClassifierError::NotReady { .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(session.labels().is_empty());
    }

    #[test]
    fn test_second_load_on_ready_session_is_rejected() {
        let fx = fixture(&["a", "b"]);
        let loader = ModelLoader::new(FakeBackend::new(vec![0.5, 0.5]));
        let mut session = TestSession::new(RecordingPresenter::default());
        session.load_model(&loader, &fx.model, &fx.metadata).unwrap();
        let before = session.presenter().events.len();

        assert!(matches!(
            session.load_model(&loader, &fx.model, &fx.metadata),
            Err(ClassifierError::LoadAlreadyAttempted { .. })
        ));
        assert!(session.model_state().is_ready());
        assert_eq!(session.presenter().events.len(), before);
    }

    #[test]
    fn test_select_bytes_checks_mime_and_keeps_previous_image() {
        let (mut session, _) = ready_session(vec![0.5, 0.5], &["a", "b"]);

        let img = RgbImage::from_pixel(5, 7, Rgb([1, 2, 3]));
        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut png, ImageFormat::Png)
            .unwrap();
        let png = png.into_inner();

        session.select_bytes(&png, "image/png").unwrap();
        assert_eq!(session.image().map(|i| i.dimensions()), Some((5, 7)));

        let err = session.select_bytes(&png, "application/pdf").unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidImageType { .. }));
        assert!(matches!(
            session.select_bytes(b"garbage", "image/jpeg"),
            Err(ClassifierError::ImageDecodeFailure { .. })
        ));
        assert_eq!(session.image().map(|i| i.dimensions()), Some((5, 7)));
        assert_eq!(
            session.last_error(),
            Some("Error loading the image. Please try again.")
        );
    }

    #[test]
    fn test_repeated_classification_is_deterministic() {
        let (mut session, calls) = ready_session(vec![0.25, 0.25, 0.5], &["x", "y", "z"]);
        session.select_image(sample());
        let first = session.classify().unwrap().clone();
        let second = session.classify().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let order: Vec<&str> = first.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(order, vec!["z", "x", "y"]);
    }

    #[test]
    fn test_default_session_feeds_224_square_input() {
        let fx = fixture(&["a", "b"]);
        let backend = FakeBackend::new(vec![0.5, 0.5]);
        let shapes = Arc::clone(&backend.shapes);
        let loader = ModelLoader::new(backend);
        let mut session = TestSession::new(RecordingPresenter::default());
        session.load_model(&loader, &fx.model, &fx.metadata).unwrap();
        session.select_image(sample());
        session.classify().unwrap();
        assert_eq!(*shapes.lock().unwrap(), vec![vec![1, 224, 224, 3]]);
    }

    #[test]
    fn test_from_config_uses_configured_input_shape() {
        let fx = fixture(&["a", "b"]);
        let config = ClassifierConfig::new().input_shape((160, 120));
        let backend = FakeBackend::new(vec![0.5, 0.5]);
        let shapes = Arc::clone(&backend.shapes);
        let loader = ModelLoader::new(backend).with_input_shape(config.get_input_shape());

        let mut session = TestSession::from_config(RecordingPresenter::default(), &config).unwrap();
        session.load_model(&loader, &fx.model, &fx.metadata).unwrap();
        session.select_image(sample());
        session.classify().unwrap();

        assert_eq!(*shapes.lock().unwrap(), vec![vec![1, 120, 160, 3]]);

        let zero = ClassifierConfig::new().input_shape((0, 224));
        assert!(matches!(
            TestSession::from_config(RecordingPresenter::default(), &zero),
            Err(ClassifierError::Config(_))
        ));
    }

    #[test]
    fn test_errors_reach_tracing_presenter_as_notifications() {
        let mut session: ClassificationSession<FakeEngine, TracingPresenter> =
            ClassificationSession::new(TracingPresenter::new());
        session.select_image(sample());
        assert!(session.classify().is_err());

        let notification = session.presenter().last_notification().unwrap();
        assert_eq!(notification.message, "Model or image not loaded correctly.");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.ttl, Notification::DEFAULT_TTL);
    }
}
