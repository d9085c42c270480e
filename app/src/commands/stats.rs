use mortality::{PersonStats, PetStats, StatsSnapshot};

use crate::state::AppState;

pub fn get_user_stats(state: &AppState) -> Result<Option<PersonStats>, String> {
    Ok(state.store()?.user_stats())
}

pub fn get_all_people_stats(state: &AppState) -> Result<Vec<PersonStats>, String> {
    Ok(state.store()?.all_people_stats())
}

pub fn get_pet_stats(state: &AppState) -> Result<Vec<PetStats>, String> {
    Ok(state.store()?.pet_stats())
}

pub fn get_snapshot(state: &AppState) -> Result<StatsSnapshot, String> {
    Ok(state.store()?.snapshot())
}

pub fn get_revision(state: &AppState) -> u64 {
    state.revision()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::household;

    #[test]
    fn test_views_follow_mutations() {
        let state = AppState::new();
        assert_eq!(get_user_stats(&state), Ok(None));
        assert_eq!(get_all_people_stats(&state), Ok(Vec::new()));

        household::initialize(&state, 30.0).unwrap();
        household::add_child(&state, 2.0, "Sam".into()).unwrap();
        household::add_parent(&state, 60.0, "Mom".into()).unwrap();
        household::add_pet(&state, "Tom".into(), "cat".into(), 14.0).unwrap();

        let people = get_all_people_stats(&state).unwrap();
        let labels: Vec<&str> = people.iter().map(|s| s.person.label.as_str()).collect();
        assert_eq!(labels, vec!["Mom", "Sam"]);

        let pets = get_pet_stats(&state).unwrap();
        assert_eq!(pets[0].years_remaining, 1.0);
        assert_eq!(pets[0].your_age_when_they_die, 31.0);

        let before = get_revision(&state);
        household::clear(&state).unwrap();
        assert!(get_revision(&state) > before);
        assert_eq!(get_snapshot(&state), Ok(StatsSnapshot::default()));
    }
}
