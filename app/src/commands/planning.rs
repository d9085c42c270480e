use mortality::calculations::{
    child_age_at_parent_death, future_child_time, quality_weeks, shared_years_remaining,
    time_remaining,
};
use mortality::{FutureChildTime, TimeRemaining};

use crate::state::{AppState, RelationQuality};

/// Remaining lifetime of the user, or `None` without a record
pub fn get_time_remaining(state: &AppState) -> Result<Option<TimeRemaining>, String> {
    let store = state.store()?;
    Ok(store.data().map(|d| time_remaining(d.user_age())))
}

/// Focused weeks left with each relation, in display order
pub fn get_quality_time(state: &AppState) -> Result<Vec<RelationQuality>, String> {
    let store = state.store()?;
    let Some(data) = store.data() else {
        return Ok(Vec::new());
    };

    let user_age = data.user_age();
    Ok(data
        .relations()
        .map(|person| {
            let shared_years = shared_years_remaining(user_age, person.age);
            RelationQuality {
                id: person.id.0.clone(),
                label: person.label.clone(),
                shared_years,
                quality_weeks: quality_weeks(shared_years),
            }
        })
        .collect())
}

pub fn get_quality_weeks(shared_years: f64) -> f64 {
    quality_weeks(shared_years)
}

pub fn get_child_age_at_parent_death(child_age: f64, parent_age: f64) -> f64 {
    child_age_at_parent_death(child_age, parent_age)
}

/// Time the user would have with a child born when they are `age_at_birth`
pub fn get_future_child_time(
    state: &AppState,
    age_at_birth: f64,
) -> Result<Option<FutureChildTime>, String> {
    let store = state.store()?;
    Ok(store
        .data()
        .map(|d| future_child_time(d.user_age(), age_at_birth)))
}
