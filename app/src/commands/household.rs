use mortality::error::validate_age;
use mortality::{MortalityData, PetKind};

use crate::state::AppState;

pub fn initialize(state: &AppState, user_age: f64) -> Result<(), String> {
    let age = validate_age(user_age).map_err(|e| e.to_string())?;
    state.store()?.initialize(age);
    Ok(())
}

pub fn clear(state: &AppState) -> Result<(), String> {
    state.store()?.clear();
    Ok(())
}

/// Returns the new id, or `None` when there is no record to add to
pub fn add_parent(state: &AppState, age: f64, label: String) -> Result<Option<String>, String> {
    let age = validate_age(age).map_err(|e| e.to_string())?;
    Ok(state.store()?.add_parent(age, &label).map(|id| id.0))
}

pub fn add_grandparent(state: &AppState, age: f64, label: String) -> Result<Option<String>, String> {
    let age = validate_age(age).map_err(|e| e.to_string())?;
    Ok(state.store()?.add_grandparent(age, &label).map(|id| id.0))
}

pub fn add_child(state: &AppState, age: f64, label: String) -> Result<Option<String>, String> {
    let age = validate_age(age).map_err(|e| e.to_string())?;
    Ok(state.store()?.add_child(age, &label).map(|id| id.0))
}

pub fn add_pet(
    state: &AppState,
    name: String,
    pet_type: String,
    age: f64,
) -> Result<Option<String>, String> {
    let kind = pet_type.parse::<PetKind>().map_err(|e| e.to_string())?;
    let age = validate_age(age).map_err(|e| e.to_string())?;
    Ok(state.store()?.add_pet(&name, kind, age).map(|id| id.0))
}

pub fn get_data(state: &AppState) -> Result<Option<MortalityData>, String> {
    Ok(state.store()?.data().cloned())
}

pub fn set_data(state: &AppState, data: MortalityData) -> Result<(), String> {
    state.store()?.set_data(data);
    Ok(())
}
