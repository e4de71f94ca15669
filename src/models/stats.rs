// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived statistics over a user's own rows.
//!
//! These are pure reductions over already-authorized list results; they add
//! no authorization logic of their own. Every bucket in the fixed enum set
//! appears in the output even when it matched no rows.

use serde::Serialize;

use crate::models::meal_plan::{MealPlanEntryWithNutrition, MealTime};
use crate::models::schedule::{ScheduleEntryWithWorkout, Weekday};

/// Total calories planned for one meal slot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealSlotCalories {
    pub meal_time: MealTime,
    pub calories: i64,
}

/// Sum calories per meal slot across the user's plan entries.
///
/// Always returns exactly one bucket per `MealTime`, zero-filled.
pub fn calories_per_meal_slot(entries: &[MealPlanEntryWithNutrition]) -> Vec<MealSlotCalories> {
    MealTime::ALL
        .iter()
        .map(|&meal_time| MealSlotCalories {
            meal_time,
            calories: entries
                .iter()
                .filter(|e| e.meal_time == meal_time)
                .map(|e| i64::from(e.calories))
                .sum(),
        })
        .collect()
}

/// Number of workouts scheduled on one weekday.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayWorkoutCount {
    pub day_of_week: Weekday,
    pub count: u32,
}

/// Count scheduled workouts per weekday.
///
/// Always returns exactly one bucket per `Weekday`, zero-filled, in
/// calendar order.
pub fn workouts_per_weekday(entries: &[ScheduleEntryWithWorkout]) -> Vec<WeekdayWorkoutCount> {
    Weekday::ALL
        .iter()
        .map(|&day_of_week| WeekdayWorkoutCount {
            day_of_week,
            count: entries.iter().filter(|e| e.day_of_week == day_of_week).count() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal_entry(meal_time: MealTime, calories: i32) -> MealPlanEntryWithNutrition {
        MealPlanEntryWithNutrition {
            id: 1,
            user_id: 1,
            nutrition_id: 1,
            meal_time,
            day_of_week: Weekday::Monday,
            food_name: "Oatmeal (1 cup)".to_string(),
            calories,
            proteins: 6,
        }
    }

    fn schedule_entry(day_of_week: Weekday) -> ScheduleEntryWithWorkout {
        ScheduleEntryWithWorkout {
            id: 1,
            user_id: 1,
            workout_id: 1,
            day_of_week,
            exercise: "Squat".to_string(),
            description: None,
            reps: 5,
            sets: 3,
        }
    }

    #[test]
    fn test_meal_slot_buckets_are_total_over_empty_input() {
        let stats = calories_per_meal_slot(&[]);

        assert_eq!(
            stats,
            vec![
                MealSlotCalories {
                    meal_time: MealTime::Breakfast,
                    calories: 0
                },
                MealSlotCalories {
                    meal_time: MealTime::Lunch,
                    calories: 0
                },
                MealSlotCalories {
                    meal_time: MealTime::Dinner,
                    calories: 0
                },
            ]
        );
    }

    #[test]
    fn test_meal_slot_calories_sum_per_bucket() {
        let entries = vec![
            meal_entry(MealTime::Breakfast, 150),
            meal_entry(MealTime::Breakfast, 105),
            meal_entry(MealTime::Dinner, 490),
        ];

        let stats = calories_per_meal_slot(&entries);

        assert_eq!(stats[0].calories, 255); // Breakfast
        assert_eq!(stats[1].calories, 0); // Lunch still present
        assert_eq!(stats[2].calories, 490); // Dinner
    }

    #[test]
    fn test_weekday_buckets_are_total_over_empty_input() {
        let stats = workouts_per_weekday(&[]);

        assert_eq!(stats.len(), 7);
        assert!(stats.iter().all(|s| s.count == 0));
        assert_eq!(stats[0].day_of_week, Weekday::Monday);
        assert_eq!(stats[6].day_of_week, Weekday::Sunday);
    }

    #[test]
    fn test_weekday_counts() {
        let entries = vec![
            schedule_entry(Weekday::Monday),
            schedule_entry(Weekday::Monday),
            schedule_entry(Weekday::Friday),
        ];

        let stats = workouts_per_weekday(&entries);

        assert_eq!(stats[0].count, 2); // Monday
        assert_eq!(stats[4].count, 1); // Friday
        assert_eq!(stats[6].count, 0); // Sunday
    }
}
