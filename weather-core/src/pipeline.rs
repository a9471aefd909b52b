use chrono::Utc;

use crate::{
    backend::WeatherBackend,
    cache::RecentCache,
    error::LookupError,
    model::WeatherRecord,
    storage::KeyValueStore,
    theme::ThemeTag,
};

/// Which surface triggered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Typed into the search box. The only origin that updates the history.
    Search,
    /// Replayed from the recent list.
    Recent,
    /// Picked from the preset top-city list.
    Preset,
}

impl Origin {
    pub fn records_history(&self) -> bool {
        matches!(self, Origin::Search)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Requesting,
    Displayed,
    Errored,
}

/// What the view renders. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: LookupPhase,
    pub current: Option<WeatherRecord>,
    pub error: Option<LookupError>,
    pub theme: Option<ThemeTag>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Blank city from a replay path: nothing requested, nothing changed.
    Skipped,
    Displayed(WeatherRecord),
    Errored(LookupError),
}

/// Turns a city name into a displayed record or a user-facing error,
/// updating the recent history along the way.
#[derive(Debug)]
pub struct WeatherPipeline<S> {
    backend: Box<dyn WeatherBackend>,
    recent: RecentCache<S>,
    top_cities: Vec<String>,
    view: ViewState,
    last_id: i64,
}

impl<S: KeyValueStore> WeatherPipeline<S> {
    pub fn new(
        backend: Box<dyn WeatherBackend>,
        recent: RecentCache<S>,
        top_cities: Vec<String>,
    ) -> Self {
        Self {
            backend,
            recent,
            top_cities,
            view: ViewState::default(),
            last_id: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn recent(&self) -> &RecentCache<S> {
        &self.recent
    }

    pub fn recent_mut(&mut self) -> &mut RecentCache<S> {
        &mut self.recent
    }

    pub fn top_cities(&self) -> &[String] {
        &self.top_cities
    }

    /// Explicit search action. Blank input is reported instead of skipped.
    pub async fn search(&mut self, input: &str) -> LookupOutcome {
        if input.trim().is_empty() {
            self.view.error = Some(LookupError::EmptyInput);
            return LookupOutcome::Errored(LookupError::EmptyInput);
        }

        self.fetch(input, Origin::Search).await
    }

    /// Replay the `index`-th (0-based) entry of the recent list.
    /// `None` when there is no such entry.
    pub async fn replay_recent(&mut self, index: usize) -> Option<LookupOutcome> {
        let city = self.recent.get(index)?.city_name.clone();
        Some(self.fetch(&city, Origin::Recent).await)
    }

    pub async fn replay_preset(&mut self, city: &str) -> LookupOutcome {
        self.fetch(city, Origin::Preset).await
    }

    /// One backend request for `city`. No retry.
    ///
    /// On failure the previously displayed record stays in place next to
    /// the error. On success the history is updated only for
    /// [`Origin::Search`].
    pub async fn fetch(&mut self, city: &str, origin: Origin) -> LookupOutcome {
        if city.trim().is_empty() {
            return LookupOutcome::Skipped;
        }

        self.view.error = None;
        self.view.phase = LookupPhase::Requesting;

        let payload = match self.backend.current(city).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(city, error = %err, "weather lookup failed");
                self.view.error = Some(LookupError::CityNotFound);
                self.view.phase = LookupPhase::Errored;
                return LookupOutcome::Errored(LookupError::CityNotFound);
            }
        };

        let record = WeatherRecord::from_backend(payload, self.next_id());

        self.view.theme = Some(ThemeTag::select(record.temperature_c, &record.condition));
        self.view.current = Some(record.clone());
        self.view.phase = LookupPhase::Displayed;

        if origin.records_history() {
            if let Err(err) = self.recent.record(record.clone()) {
                tracing::error!(error = %err, "failed to persist recent searches");
            }
        }

        LookupOutcome::Displayed(record)
    }

    /// Millisecond timestamp, bumped when two lookups land in the same millisecond.
    fn next_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{error::BackendError, model::BackendWeather, storage::MemoryStore};

    #[derive(Debug, Default)]
    struct FakeBackend {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl WeatherBackend for FakeBackend {
        async fn current(&self, city: &str) -> Result<BackendWeather, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if city == "Atlantis" {
                return Err(BackendError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    body: String::new(),
                });
            }
            Ok(BackendWeather {
                city: city.to_string(),
                country: "XX".to_string(),
                temperature: 12.0,
                humidity: 80,
                pressure: 1000,
                wind_speed: 4.0,
                visibility: 8.0,
                condition: "Light rain".to_string(),
            })
        }
    }

    fn pipeline() -> (WeatherPipeline<MemoryStore>, Arc<AtomicUsize>) {
        let backend = FakeBackend::default();
        let calls = backend.calls.clone();
        let recent = RecentCache::load(MemoryStore::new());
        (WeatherPipeline::new(Box::new(backend), recent, vec!["Tokyo".into()]), calls)
    }

    #[tokio::test]
    async fn blank_search_reports_empty_input_without_request() {
        let (mut p, calls) = pipeline();

        let out = p.search("   ").await;

        assert_eq!(out, LookupOutcome::Errored(LookupError::EmptyInput));
        assert_eq!(p.view().error, Some(LookupError::EmptyInput));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_replay_is_silent() {
        let (mut p, calls) = pipeline();

        assert_eq!(p.fetch("", Origin::Recent).await, LookupOutcome::Skipped);
        assert_eq!(p.replay_preset(" ").await, LookupOutcome::Skipped);
        assert_eq!(p.view().error, None);
        assert_eq!(p.view().phase, LookupPhase::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn search_displays_and_records() {
        let (mut p, _) = pipeline();

        let LookupOutcome::Displayed(rec) = p.search("Oslo").await else {
            panic!("expected a displayed record");
        };

        assert_eq!(rec.city_name, "Oslo");
        assert_eq!(p.view().phase, LookupPhase::Displayed);
        assert_eq!(p.view().theme, Some(ThemeTag::Rain));
        assert_eq!(p.recent().entries(), [rec]);
    }

    #[tokio::test]
    async fn not_found_keeps_previous_record_visible() {
        let (mut p, _) = pipeline();
        p.search("Oslo").await;

        let out = p.search("Atlantis").await;

        assert_eq!(out, LookupOutcome::Errored(LookupError::CityNotFound));
        assert_eq!(p.view().phase, LookupPhase::Errored);
        assert_eq!(p.view().current.as_ref().map(|r| r.city_name.as_str()), Some("Oslo"));
        assert_eq!(p.recent().entries().len(), 1);
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let (mut p, _) = pipeline();
        p.search("Atlantis").await;
        p.search("Oslo").await;

        assert_eq!(p.view().error, None);
    }

    #[tokio::test]
    async fn replays_do_not_touch_history() {
        let (mut p, calls) = pipeline();
        p.search("Oslo").await;
        p.search("Bergen").await;
        let before = p.recent().entries().to_vec();

        let replayed = p.replay_recent(1).await;
        p.replay_preset("Tokyo").await;
        p.fetch("Bergen", Origin::Recent).await;

        assert!(matches!(replayed, Some(LookupOutcome::Displayed(_))));
        assert_eq!(p.recent().entries(), before.as_slice());
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn replay_out_of_range_is_none() {
        let (mut p, calls) = pipeline();

        assert_eq!(p.replay_recent(0).await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ids_strictly_increase() {
        let (mut p, _) = pipeline();
        let mut ids = Vec::new();
        for city in ["A", "B", "C"] {
            if let LookupOutcome::Displayed(rec) = p.search(city).await {
                ids.push(rec.id);
            }
        }

        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
