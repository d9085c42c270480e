//! Mortality Store - owns the current record and tells subscribers when it changes

use tracing::{debug, info};

use crate::calculations::{PersonStats, PetStats};
use crate::components::{EntityId, MortalityData, Person, Pet, PetKind, Relationship};
use crate::ids::{generate_id, generate_unique_id};
use crate::views::{self, StatsSnapshot};

/// Label given to the user when a record is initialized
pub const USER_LABEL: &str = "You";

/// What changed in the store. Emitted after the change is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Initialized { user_age: f64 },
    Replaced,
    Cleared,
    PersonAdded { id: EntityId, relationship: Relationship },
    PetAdded { id: EntityId, kind: PetKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent) + Send + 'static>;

/// Holds at most one [`MortalityData`] record.
///
/// Adds are ignored while no record exists. There is no removal or editing;
/// the record only grows until it is replaced or cleared.
pub struct MortalityStore {
    data: Option<MortalityData>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription_id: u64,
}

impl MortalityStore {
    pub fn new() -> Self {
        Self {
            data: None,
            subscribers: Vec::new(),
            next_subscription_id: 1,
        }
    }

    // ------------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------------

    /// Register a callback run after every applied mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&StoreEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&self, event: StoreEvent) {
        for (_, callback) in &self.subscribers {
            callback(&event);
        }
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Start a fresh record for a user of `user_age`, dropping any existing one
    pub fn initialize(&mut self, user_age: f64) {
        let user = Person {
            id: generate_id(),
            label: USER_LABEL.to_string(),
            age: user_age,
            relationship: Relationship::User,
        };
        if self.data.is_some() {
            debug!("replacing existing record");
        }
        self.data = Some(MortalityData::new(user));
        info!(user_age, "mortality record initialized");
        self.notify(StoreEvent::Initialized { user_age });
    }

    /// Replace the record wholesale with `data`
    pub fn set_data(&mut self, data: MortalityData) {
        info!(entities = data.entity_count(), "mortality record replaced");
        self.data = Some(data);
        self.notify(StoreEvent::Replaced);
    }

    pub fn clear(&mut self) {
        self.data = None;
        info!("mortality record cleared");
        self.notify(StoreEvent::Cleared);
    }

    pub fn add_parent(&mut self, age: f64, label: &str) -> Option<EntityId> {
        self.add_person(Relationship::Parent, age, label)
    }

    pub fn add_grandparent(&mut self, age: f64, label: &str) -> Option<EntityId> {
        self.add_person(Relationship::Grandparent, age, label)
    }

    pub fn add_child(&mut self, age: f64, label: &str) -> Option<EntityId> {
        self.add_person(Relationship::Child, age, label)
    }

    /// Append a pet. Returns `None` and changes nothing if uninitialized.
    pub fn add_pet(&mut self, name: &str, kind: PetKind, age: f64) -> Option<EntityId> {
        let Some(data) = self.data.as_mut() else {
            debug!(name, "ignoring add_pet: store not initialized");
            return None;
        };

        let id = generate_unique_id(|candidate| data.contains_id(candidate));
        data.pets.push(Pet {
            id: id.clone(),
            name: name.to_string(),
            kind,
            age,
        });
        debug!(id = %id, name, %kind, age, "pet added");

        self.notify(StoreEvent::PetAdded { id: id.clone(), kind });
        Some(id)
    }

    fn add_person(&mut self, relationship: Relationship, age: f64, label: &str) -> Option<EntityId> {
        let Some(data) = self.data.as_mut() else {
            debug!(%relationship, label, "ignoring add: store not initialized");
            return None;
        };

        let id = generate_unique_id(|candidate| data.contains_id(candidate));
        let person = Person {
            id: id.clone(),
            label: label.to_string(),
            age,
            relationship,
        };
        data.collection_mut(relationship)?.push(person);
        debug!(id = %id, %relationship, label, age, "person added");

        self.notify(StoreEvent::PersonAdded {
            id: id.clone(),
            relationship,
        });
        Some(id)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn data(&self) -> Option<&MortalityData> {
        self.data.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    pub fn user_stats(&self) -> Option<PersonStats> {
        views::user_stats(self.data.as_ref())
    }

    pub fn all_people_stats(&self) -> Vec<PersonStats> {
        views::all_people_stats(self.data.as_ref())
    }

    pub fn pet_stats(&self) -> Vec<PetStats> {
        views::pet_stats(self.data.as_ref())
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        views::snapshot(self.data.as_ref())
    }
}

impl Default for MortalityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_store() -> (MortalityStore, Arc<Mutex<Vec<StoreEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut store = MortalityStore::new();
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        (store, events)
    }

    #[test]
    fn test_initialize_parent_and_pet() {
        let mut store = MortalityStore::new();
        store.initialize(30.0);
        store.add_parent(60.0, "Mom");
        store.add_pet("Rex", PetKind::Dog, 3.0);

        let people = store.all_people_stats();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].shared_years_remaining, 18.0);
        assert_eq!(people[0].person.label, "Mom");

        let pets = store.pet_stats();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].life_expectancy, 12.0);
        assert_eq!(pets[0].years_remaining, 9.0);

        let user = store.user_stats().unwrap();
        assert_eq!(user.person.label, USER_LABEL);
        assert_eq!(user.person.relationship, Relationship::User);
        assert_eq!(user.shared_years_remaining, 48.0);
    }

    #[test]
    fn test_add_before_initialize_is_noop() {
        let (mut store, events) = recording_store();
        assert_eq!(store.add_parent(60.0, "Mom"), None);
        assert_eq!(store.add_pet("Rex", PetKind::Dog, 3.0), None);
        assert!(store.data().is_none());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_add_after_clear_is_noop() {
        let mut store = MortalityStore::new();
        store.initialize(30.0);
        store.add_child(2.0, "Sam");
        store.clear();

        assert_eq!(store.add_grandparent(80.0, "Gran"), None);
        assert!(!store.is_initialized());
        assert!(store.user_stats().is_none());
        assert!(store.all_people_stats().is_empty());
        assert!(store.pet_stats().is_empty());
    }

    #[test]
    fn test_initialize_overwrites() {
        let mut store = MortalityStore::new();
        store.initialize(30.0);
        store.add_parent(60.0, "Mom");
        store.add_pet("Tom", PetKind::Cat, 4.0);

        store.initialize(45.0);
        let data = store.data().unwrap();
        assert_eq!(data.user.age, 45.0);
        assert!(data.parents.is_empty());
        assert!(data.pets.is_empty());
    }

    #[test]
    fn test_ids_unique_within_record() {
        let mut store = MortalityStore::new();
        store.initialize(30.0);
        for i in 0..50 {
            store.add_child(i as f64 / 10.0, "kid");
            store.add_pet("pet", PetKind::Cat, 1.0);
        }

        let data = store.data().unwrap();
        let mut ids: Vec<&str> = data
            .relations()
            .map(|p| p.id.as_str())
            .chain(data.pets.iter().map(|p| p.id.as_str()))
            .chain(std::iter::once(data.user.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 101);
    }

    #[test]
    fn test_events_emitted_in_order() {
        let (mut store, events) = recording_store();
        store.initialize(30.0);
        let parent = store.add_parent(60.0, "Mom").unwrap();
        let pet = store.add_pet("Rex", PetKind::Dog, 3.0).unwrap();
        store.clear();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::Initialized { user_age: 30.0 },
                StoreEvent::PersonAdded {
                    id: parent,
                    relationship: Relationship::Parent
                },
                StoreEvent::PetAdded {
                    id: pet,
                    kind: PetKind::Dog
                },
                StoreEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let events = Arc::new(Mutex::new(0u32));
        let sink = Arc::clone(&events);
        let mut store = MortalityStore::new();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.initialize(30.0);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_parent(60.0, "Mom");

        assert_eq!(*events.lock().unwrap(), 1);
    }

    #[test]
    fn test_set_data_replaces_record() {
        let mut source = MortalityStore::new();
        source.initialize(50.0);
        source.add_grandparent(90.0, "Gran");
        let data = source.data().unwrap().clone();

        let (mut store, events) = recording_store();
        store.initialize(20.0);
        store.set_data(data.clone());

        assert_eq!(store.data(), Some(&data));
        assert_eq!(store.all_people_stats()[0].shared_years_remaining, 0.0);
        assert_eq!(events.lock().unwrap().last(), Some(&StoreEvent::Replaced));
    }
}
