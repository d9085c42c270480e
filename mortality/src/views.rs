//! Derived views over a mortality record
//!
//! Each view is recomputed from the record on every call. Nothing is cached,
//! so a read after any mutation always reflects it.

use serde::{Deserialize, Serialize};

use crate::calculations::{person_stats, pet_stats as stats_for_pet, PersonStats, PetStats};
use crate::components::MortalityData;

/// All three views computed from one record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub user: Option<PersonStats>,
    pub people: Vec<PersonStats>,
    pub pets: Vec<PetStats>,
}

/// The user's own stats, measured against themselves
pub fn user_stats(data: Option<&MortalityData>) -> Option<PersonStats> {
    data.map(|d| person_stats(&d.user, d.user_age()))
}

/// Parents, then grandparents, then children, each in insertion order
pub fn all_people_stats(data: Option<&MortalityData>) -> Vec<PersonStats> {
    let Some(d) = data else {
        return Vec::new();
    };
    let user_age = d.user_age();
    d.relations().map(|p| person_stats(p, user_age)).collect()
}

pub fn pet_stats(data: Option<&MortalityData>) -> Vec<PetStats> {
    let Some(d) = data else {
        return Vec::new();
    };
    let user_age = d.user_age();
    d.pets.iter().map(|p| stats_for_pet(p, user_age)).collect()
}

pub fn snapshot(data: Option<&MortalityData>) -> StatsSnapshot {
    StatsSnapshot {
        user: user_stats(data),
        people: all_people_stats(data),
        pets: pet_stats(data),
    }
}
