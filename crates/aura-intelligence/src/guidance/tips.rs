// ABOUTME: Short heuristic tips shown next to a freshly computed BMI
// ABOUTME: Four per category, independent of the full diet plan tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use crate::bmi_classifier::Category;

const UNDERWEIGHT: [&str; 4] = [
    "Consider adding nutrient-dense, calorie-rich foods to your diet",
    "Include strength training to build healthy muscle mass",
    "Eat more frequently throughout the day with balanced snacks",
    "Consult with a nutritionist for a personalized meal plan",
];

const NORMAL: [&str; 4] = [
    "Maintain your current healthy weight through balanced nutrition",
    "Aim for 150 minutes of moderate aerobic activity per week",
    "Stay hydrated with 8-10 glasses of water daily",
    "Ensure 7-9 hours of quality sleep each night",
];

const OVERWEIGHT: [&str; 4] = [
    "Focus on creating a sustainable calorie deficit through diet",
    "Incorporate both cardio and strength training into your routine",
    "Track your food intake to identify areas for improvement",
    "Set realistic weight loss goals of 0.5-1kg per week",
];

const OBESE: [&str; 4] = [
    "Consult with healthcare professionals for personalized guidance",
    "Start with low-impact exercises like walking or swimming",
    "Focus on whole foods and limit processed items",
    "Consider working with a registered dietitian",
];

/// Quick tips for a category
#[must_use]
pub const fn quick_tips(category: Category) -> &'static [&'static str] {
    match category {
        Category::Underweight => &UNDERWEIGHT,
        Category::Normal => &NORMAL,
        Category::Overweight => &OVERWEIGHT,
        Category::Obese => &OBESE,
    }
}
