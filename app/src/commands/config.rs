use mortality::calculations::{
    CAT_LIFE_EXPECTANCY, DOG_LIFE_EXPECTANCY, LIFE_EXPECTANCY, QUALITY_HOURS_PER_WEEK,
    TOTAL_WEEKS, WEEKS_PER_YEAR,
};

use crate::reveal::RevealOptions;
use crate::state::{AppConfig, LifeExpectancyConfig, RevealConfig};

pub fn get_config() -> AppConfig {
    let reveal = RevealOptions::default();
    AppConfig {
        life_expectancy: LifeExpectancyConfig {
            human: LIFE_EXPECTANCY,
            dog: DOG_LIFE_EXPECTANCY,
            cat: CAT_LIFE_EXPECTANCY,
        },
        weeks_per_year: WEEKS_PER_YEAR,
        total_weeks: TOTAL_WEEKS,
        quality_hours_per_week: QUALITY_HOURS_PER_WEEK,
        reveal: RevealConfig {
            threshold: reveal.threshold,
            delay_ms: reveal.delay_ms,
        },
    }
}
