//! Lifespan calculations
//!
//! Pure arithmetic over a person's or pet's age and fixed life expectancies.
//! Every function is total: out-of-range ages clamp instead of failing, and
//! no input is rejected here.

use serde::{Deserialize, Serialize};

use crate::components::{Person, Pet};

/// Modeled human lifespan in years
pub const LIFE_EXPECTANCY: f64 = 78.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Weeks in a full modeled human life
pub const TOTAL_WEEKS: f64 = LIFE_EXPECTANCY * WEEKS_PER_YEAR;

pub const DOG_LIFE_EXPECTANCY: f64 = 12.0;
pub const CAT_LIFE_EXPECTANCY: f64 = 15.0;

/// Hours of focused time assumed per week spent with someone
pub const QUALITY_HOURS_PER_WEEK: f64 = 10.0;
pub const HOURS_PER_WEEK: f64 = 168.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
/// Average month length (30.44 days)
const SECONDS_PER_MONTH: f64 = 30.44 * SECONDS_PER_DAY;
/// Average year length (365.25 days)
const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

// ============================================================================
// Stats records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonStats {
    pub person: Person,
    pub weeks_lived: f64,
    pub weeks_remaining: f64,
    pub percent_lived: f64,
    pub years_remaining: f64,
    pub shared_weeks_remaining: f64,
    pub shared_years_remaining: f64,
    pub summers_remaining: f64,
    pub christmases_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStats {
    pub pet: Pet,
    pub life_expectancy: f64,
    pub years_remaining: f64,
    pub percent_lived: f64,
    pub dies_before_you: bool,
    pub your_age_when_they_die: f64,
}

/// Remaining lifetime broken into calendar-ish units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    /// Recombine the breakdown into seconds, using the same average unit lengths
    pub fn total_seconds(&self) -> f64 {
        self.years as f64 * SECONDS_PER_YEAR
            + self.months as f64 * SECONDS_PER_MONTH
            + self.weeks as f64 * SECONDS_PER_WEEK
            + self.days as f64 * SECONDS_PER_DAY
            + self.hours as f64 * SECONDS_PER_HOUR
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.seconds as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureChildTime {
    pub years_with_child: f64,
    pub child_age_at_your_death: f64,
}

// ============================================================================
// Human lifespan
// ============================================================================

pub fn weeks_lived(age: f64) -> f64 {
    (age * WEEKS_PER_YEAR).floor()
}

pub fn weeks_remaining(age: f64) -> f64 {
    ((LIFE_EXPECTANCY - age) * WEEKS_PER_YEAR).floor().max(0.0)
}

pub fn years_remaining(age: f64) -> f64 {
    (LIFE_EXPECTANCY - age).max(0.0)
}

pub fn percent_lived(age: f64) -> f64 {
    (age / LIFE_EXPECTANCY * 100.0).min(100.0)
}

/// Years both people are projected to be alive at the same time
pub fn shared_years_remaining(user_age: f64, other_age: f64) -> f64 {
    years_remaining(user_age).min(years_remaining(other_age))
}

pub fn time_remaining(age: f64) -> TimeRemaining {
    let total = ((LIFE_EXPECTANCY - age) * SECONDS_PER_YEAR).max(0.0);

    let years = (total / SECONDS_PER_YEAR).floor();
    let rest = total - years * SECONDS_PER_YEAR;
    let months = (rest / SECONDS_PER_MONTH).floor();
    let rest = rest - months * SECONDS_PER_MONTH;
    let weeks = (rest / SECONDS_PER_WEEK).floor();
    let rest = rest - weeks * SECONDS_PER_WEEK;
    let days = (rest / SECONDS_PER_DAY).floor();
    let rest = rest - days * SECONDS_PER_DAY;
    let hours = (rest / SECONDS_PER_HOUR).floor();
    let rest = rest - hours * SECONDS_PER_HOUR;
    let minutes = (rest / SECONDS_PER_MINUTE).floor();
    let rest = rest - minutes * SECONDS_PER_MINUTE;

    // float residue can leave a unit a hair below zero; never report negatives
    TimeRemaining {
        years: years.max(0.0) as u64,
        months: months.max(0.0) as u64,
        weeks: weeks.max(0.0) as u64,
        days: days.max(0.0) as u64,
        hours: hours.max(0.0) as u64,
        minutes: minutes.max(0.0) as u64,
        seconds: rest.floor().max(0.0) as u64,
    }
}

pub fn person_stats(person: &Person, user_age: f64) -> PersonStats {
    let shared_years = shared_years_remaining(user_age, person.age);

    PersonStats {
        person: person.clone(),
        weeks_lived: weeks_lived(person.age),
        weeks_remaining: weeks_remaining(person.age),
        percent_lived: percent_lived(person.age),
        years_remaining: years_remaining(person.age),
        shared_weeks_remaining: shared_years * WEEKS_PER_YEAR,
        shared_years_remaining: shared_years,
        // one of each per shared year
        summers_remaining: shared_years,
        christmases_remaining: shared_years,
    }
}

// ============================================================================
// Pets
// ============================================================================

pub fn pet_stats(pet: &Pet, user_age: f64) -> PetStats {
    let life_expectancy = pet.kind.life_expectancy();
    let pet_years_remaining = (life_expectancy - pet.age).max(0.0);
    let user_years_remaining = years_remaining(user_age);

    PetStats {
        pet: pet.clone(),
        life_expectancy,
        years_remaining: pet_years_remaining,
        percent_lived: (pet.age / life_expectancy * 100.0).min(100.0),
        dies_before_you: pet_years_remaining < user_years_remaining,
        your_age_when_they_die: user_age + pet_years_remaining,
    }
}

// ============================================================================
// Planning helpers
// ============================================================================

/// Whole weeks of focused time left in `shared_years`, at
/// [`QUALITY_HOURS_PER_WEEK`] hours a week.
pub fn quality_weeks(shared_years: f64) -> f64 {
    (shared_years * WEEKS_PER_YEAR * QUALITY_HOURS_PER_WEEK / HOURS_PER_WEEK).round()
}

/// How old a child will be when their parent reaches life expectancy
pub fn child_age_at_parent_death(child_age: f64, parent_age: f64) -> f64 {
    child_age + years_remaining(parent_age)
}

/// Time a child born when the user is `age_at_birth` would have with them.
///
/// `current_age` does not change the result; the child's age at the user's
/// death equals the years they share.
pub fn future_child_time(_current_age: f64, age_at_birth: f64) -> FutureChildTime {
    let years_with_child = years_remaining(age_at_birth);
    FutureChildTime {
        years_with_child,
        child_age_at_your_death: years_with_child,
    }
}
