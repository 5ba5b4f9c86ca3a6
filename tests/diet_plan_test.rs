// ABOUTME: Integration tests for category diet plans, plan scaling and the full health report
// ABOUTME: Also covers advice text cleanup used when remote tips arrive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use aura_bmi_server::{ActivityLevel, ProfileInput};
use aura_intelligence::{
    analyze_profile, plan_for, plan_for_keys, quick_tips, sanitize_advice_text, Category,
};
use chrono::Utc;

#[test]
fn test_every_category_has_meals_and_tips() {
    for category in Category::ALL {
        for level in ActivityLevel::ALL {
            let plan = plan_for(category, level);
            assert_eq!(plan.category, category);
            assert!(!plan.meals.is_empty(), "{category} has no meals");
            assert!(!plan.tips.is_empty(), "{category} has no tips");
            assert!(plan.meals.iter().all(|meal| !meal.items.is_empty()));
        }
        assert_eq!(quick_tips(category).len(), 4);
    }
}

#[test]
fn test_plan_label_uses_plan_factor() {
    let plan = plan_for(Category::Overweight, ActivityLevel::Moderate);
    assert_eq!(plan.title, "Weight Loss Diet Plan");
    assert_eq!(
        plan.calorie_label,
        "1800-2160 calories (adjusted for moderate activity)"
    );

    let sedentary = plan_for(Category::Overweight, ActivityLevel::Sedentary);
    assert_eq!(sedentary.adjusted_calories, sedentary.base_calories);
}

#[test]
fn test_very_active_label_keeps_kebab_key() {
    let plan = plan_for(Category::Normal, ActivityLevel::VeryActive);
    assert!(plan
        .calorie_label
        .ends_with("calories (adjusted for very-active activity)"));
}

#[test]
fn test_unknown_keys_fall_back() {
    let plan = plan_for_keys("mystery", "light");
    assert_eq!(plan.category, Category::Normal);

    let plan = plan_for_keys("obese", "couch");
    assert_eq!(plan.category, Category::Obese);
    assert!((plan.calorie_multiplier - 1.0).abs() < f64::EPSILON);
    assert_eq!(plan.adjusted_calories, plan.base_calories);
    assert!(plan.calorie_label.ends_with("(adjusted for couch activity)"));
}

#[test]
fn test_report_keeps_both_calorie_figures() {
    let profile = ProfileInput {
        height: 180.0,
        weight: 95.0,
        age: 30,
        gender: "male".to_owned(),
        activity_level: "moderate".to_owned(),
        goal: Some("lose".to_owned()),
    }
    .validate()
    .unwrap();

    let report = analyze_profile(&profile);
    assert_eq!(report.bmi.category, Category::Overweight);
    assert_eq!(report.plan.category, Category::Overweight);
    assert_eq!(report.quick_tips, quick_tips(Category::Overweight));

    // The plan band is display-only and independent of the energy target
    assert_eq!(report.plan.adjusted_calories.min, 1800);
    assert!(report.energy.target_calories > 2000.0);

    let recorded_at = Utc::now();
    let snapshot = report.snapshot(recorded_at);
    assert!((snapshot.bmi - report.bmi.bmi).abs() < f64::EPSILON);
    assert_eq!(snapshot.category, Category::Overweight);
    assert_eq!(snapshot.activity_level, ActivityLevel::Moderate);
    assert_eq!(snapshot.recorded_at, recorded_at);
}

#[test]
fn test_report_serializes_camel_case() {
    let profile = ProfileInput {
        height: 170.0,
        weight: 70.0,
        age: 25,
        gender: "female".to_owned(),
        activity_level: "light".to_owned(),
        goal: None,
    }
    .validate()
    .unwrap();

    let json = serde_json::to_value(analyze_profile(&profile)).unwrap();
    assert_eq!(json["bmi"]["category"], "normal");
    assert_eq!(json["bmi"]["idealRangeLabel"], "18.5 - 24.9");
    assert!(json["energy"]["targetCalories"].is_number());
    assert!(json["plan"]["calorieLabel"].is_string());
    assert!(json["quickTips"].is_array());
}

#[test]
fn test_sanitize_markdown_advice() {
    let text = "## Your Plan\n\n1. **Eat more protein**\n- Walk 30 minutes\n\n* Sleep 8 hours\n2) Drink water\n• Stretch\n3. Rest\n4. Extra";
    let tips = sanitize_advice_text(text);
    assert_eq!(
        tips,
        vec![
            "Your Plan",
            "Eat more protein",
            "Walk 30 minutes",
            "Sleep 8 hours",
            "Drink water",
            "Stretch",
        ]
    );
}

#[test]
fn test_sanitize_blank_text() {
    assert!(sanitize_advice_text("").is_empty());
    assert!(sanitize_advice_text("\n  \n-\n").is_empty());
}
