use mortality::{
    FutureChildTime, MortalityStore, StatsSnapshot, StoreEvent, TimeRemaining,
};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Application state handed to every command
pub struct AppState {
    pub store: Mutex<MortalityStore>,
    /// Bumped on every applied store mutation so a view can tell it is stale
    pub revision: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        let revision = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&revision);

        let mut store = MortalityStore::new();
        store.subscribe(move |event| {
            let rev = counter.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(revision = rev, event = event_name(event), "store changed");
        });

        Self {
            store: Mutex::new(store),
            revision,
        }
    }

    pub fn store(&self) -> Result<MutexGuard<'_, MortalityStore>, String> {
        self.store
            .lock()
            .map_err(|_| "mortality store lock poisoned".to_string())
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn event_name(event: &StoreEvent) -> &'static str {
    match event {
        StoreEvent::Initialized { .. } => "initialized",
        StoreEvent::Replaced => "replaced",
        StoreEvent::Cleared => "cleared",
        StoreEvent::PersonAdded { .. } => "person_added",
        StoreEvent::PetAdded { .. } => "pet_added",
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LifeExpectancyConfig {
    pub human: f64,
    pub dog: f64,
    pub cat: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub delay_ms: u64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub life_expectancy: LifeExpectancyConfig,
    pub weeks_per_year: f64,
    pub total_weeks: f64,
    pub quality_hours_per_week: f64,
    pub reveal: RevealConfig,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RelationQuality {
    pub id: String,
    pub label: String,
    pub shared_years: f64,
    pub quality_weeks: f64,
}

/// Everything the CLI prints for one run
#[derive(Serialize, Clone, Debug)]
pub struct Report {
    pub revision: u64,
    pub stats: StatsSnapshot,
    pub time_remaining: Option<TimeRemaining>,
    pub quality_time: Vec<RelationQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub future_child: Option<FutureChildTime>,
}
