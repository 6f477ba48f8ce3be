//! Synthetic nutrition history for the profile stats tab. The trends are
//! linear with a little jitter so the chart looks alive; nothing here is
//! derived from posted meals.

use rand::Rng;
use serde::Serialize;
use time::{Duration, OffsetDateTime};

use crate::meals::store::human_date;

pub const HISTORY_DAYS: usize = 30;
pub const SUMMARY_WINDOW: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct DailyMacros {
    pub date: String,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub calories: u32,
}

#[derive(Debug, Serialize)]
pub struct MacroSummary {
    /// Mean over the summary window, rounded.
    pub average: u32,
    /// Mean minus the first day of the window.
    pub change: i32,
}

#[derive(Debug, Serialize)]
pub struct WeeklySummary {
    pub protein: MacroSummary,
    pub carbs: MacroSummary,
    pub fat: MacroSummary,
    pub calories: MacroSummary,
}

#[derive(Debug, Serialize)]
pub struct NutritionStats {
    pub history: Vec<DailyMacros>,
    pub weekly: WeeklySummary,
}

/// One point per day ending today: protein trends up ~1.5g/day from 100,
/// carbs down 1g/day from 150, fat up 0.5g/day from 50, calories up
/// 10/day from 1800.
pub fn nutrition_history(days: usize) -> Vec<DailyMacros> {
    let mut rng = rand::thread_rng();
    let today = OffsetDateTime::now_utc().date();
    (0..days)
        .map(|i| {
            let date = today - Duration::days((days - 1 - i) as i64);
            DailyMacros {
                date: human_date(date),
                protein: point(100.0 + i as f64 * 1.5, 3.0, &mut rng),
                carbs: point(150.0 - i as f64, 3.0, &mut rng),
                fat: point(50.0 + i as f64 * 0.5, 2.0, &mut rng),
                calories: point(1800.0 + i as f64 * 10.0, 25.0, &mut rng),
            }
        })
        .collect()
}

fn point(base: f64, jitter: f64, rng: &mut impl Rng) -> u32 {
    (base + rng.gen_range(-jitter..jitter)).round().max(0.0) as u32
}

pub fn weekly_summary(history: &[DailyMacros]) -> WeeklySummary {
    let window = &history[history.len().saturating_sub(SUMMARY_WINDOW)..];
    WeeklySummary {
        protein: summarize(window, |d| d.protein),
        carbs: summarize(window, |d| d.carbs),
        fat: summarize(window, |d| d.fat),
        calories: summarize(window, |d| d.calories),
    }
}

fn summarize(window: &[DailyMacros], field: fn(&DailyMacros) -> u32) -> MacroSummary {
    if window.is_empty() {
        return MacroSummary {
            average: 0,
            change: 0,
        };
    }
    let mean = window.iter().map(|d| field(d) as f64).sum::<f64>() / window.len() as f64;
    let first = field(&window[0]) as f64;
    MacroSummary {
        average: mean.round() as u32,
        change: (mean - first).round() as i32,
    }
}

pub fn nutrition_stats() -> NutritionStats {
    let history = nutrition_history(HISTORY_DAYS);
    let weekly = weekly_summary(&history);
    NutritionStats { history, weekly }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_covers_the_requested_days() {
        let history = nutrition_history(HISTORY_DAYS);
        assert_eq!(history.len(), HISTORY_DAYS);
        assert!(history.iter().all(|d| !d.date.is_empty()));
    }

    #[test]
    fn trends_move_in_the_expected_directions() {
        let history = nutrition_history(HISTORY_DAYS);
        let first = &history[0];
        let last = &history[HISTORY_DAYS - 1];
        // 29 days of slope dwarfs the jitter on every series.
        assert!(last.protein > first.protein);
        assert!(last.carbs < first.carbs);
        assert!(last.calories > first.calories);
    }

    #[test]
    fn weekly_summary_uses_the_last_seven_days() {
        let history: Vec<DailyMacros> = (0..10)
            .map(|i| DailyMacros {
                date: format!("day {i}"),
                protein: 100 + i,
                carbs: 50,
                fat: 20,
                calories: 2000,
            })
            .collect();
        let weekly = weekly_summary(&history);
        // Window is days 3..=9, protein 103..=109, mean 106, first 103.
        assert_eq!(weekly.protein.average, 106);
        assert_eq!(weekly.protein.change, 3);
        assert_eq!(weekly.carbs.average, 50);
        assert_eq!(weekly.carbs.change, 0);
    }

    #[test]
    fn weekly_summary_tolerates_short_histories() {
        let weekly = weekly_summary(&[]);
        assert_eq!(weekly.calories.average, 0);
        assert_eq!(weekly.calories.change, 0);
    }
}
