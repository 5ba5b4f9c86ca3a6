// ABOUTME: Static diet plan reference tables, one per BMI category
// ABOUTME: Meals carry time labels, approximate calories and per-item macro grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use super::{CalorieRange, FoodItem, Meal, PlanTemplate};

const fn item(name: &'static str, protein_g: u16, carbs_g: u16, fats_g: u16) -> FoodItem {
    FoodItem {
        name,
        protein_g,
        carbs_g,
        fats_g,
    }
}

pub(super) static UNDERWEIGHT: PlanTemplate = PlanTemplate {
    title: "Weight Gain Diet Plan",
    description: "Nutrient-dense, calorie-rich foods for healthy weight gain",
    calories: CalorieRange { min: 2500, max: 3000 },
    meals: &[
        Meal {
            name: "Breakfast",
            time: "7:00 AM - 8:00 AM",
            calories: 600,
            items: &[
                item("3 whole eggs (scrambled/omelette)", 21, 2, 15),
                item("2 slices whole grain toast with peanut butter", 12, 30, 16),
                item("1 banana", 1, 27, 0),
                item("1 glass whole milk (250ml)", 8, 12, 8),
            ],
        },
        Meal {
            name: "Mid-Morning Snack",
            time: "10:00 AM",
            calories: 400,
            items: &[
                item("Mixed nuts (almonds, cashews, walnuts) - 1/4 cup", 7, 9, 18),
                item("Dried fruits (dates, raisins)", 1, 30, 0),
                item("Protein smoothie", 25, 35, 5),
            ],
        },
        Meal {
            name: "Lunch",
            time: "12:30 PM - 1:30 PM",
            calories: 800,
            items: &[
                item("Brown rice or whole wheat roti - 2 cups", 10, 90, 4),
                item("Grilled chicken/fish/paneer - 200g", 40, 0, 10),
                item("Mixed vegetable curry", 5, 20, 8),
                item("1 cup yogurt", 10, 12, 8),
            ],
        },
        Meal {
            name: "Evening Snack",
            time: "4:00 PM - 5:00 PM",
            calories: 450,
            items: &[
                item("Cheese sandwich (2 slices)", 15, 28, 12),
                item("Fresh fruit juice", 2, 26, 0),
                item("Handful of trail mix", 5, 15, 10),
            ],
        },
        Meal {
            name: "Dinner",
            time: "7:30 PM - 8:30 PM",
            calories: 700,
            items: &[
                item("Quinoa or brown rice - 1.5 cups", 12, 75, 6),
                item("Lean protein (fish/chicken/tofu) - 200g", 40, 0, 10),
                item("Roasted vegetables", 4, 15, 5),
                item("Avocado salad", 3, 12, 15),
            ],
        },
        Meal {
            name: "Before Bed",
            time: "10:00 PM",
            calories: 300,
            items: &[
                item("Casein protein shake or warm milk", 25, 10, 5),
                item("Small bowl of oats with honey", 6, 40, 3),
            ],
        },
    ],
    tips: &[
        "Eat every 2-3 hours to increase calorie intake",
        "Include healthy fats like nuts, seeds, and avocados",
        "Add protein powder to smoothies and shakes",
        "Focus on strength training to build muscle mass",
        "Avoid skipping meals",
        "Stay hydrated with 8-10 glasses of water",
    ],
};

pub(super) static NORMAL: PlanTemplate = PlanTemplate {
    title: "Balanced Maintenance Diet",
    description: "Maintain your healthy weight with balanced nutrition",
    calories: CalorieRange { min: 2000, max: 2200 },
    meals: &[
        Meal {
            name: "Breakfast",
            time: "7:00 AM - 8:00 AM",
            calories: 450,
            items: &[
                item("Oatmeal with berries and honey", 10, 45, 8),
                item("2 boiled eggs", 14, 1, 10),
                item("1 glass low-fat milk or green tea", 8, 12, 2),
            ],
        },
        Meal {
            name: "Mid-Morning Snack",
            time: "10:30 AM",
            calories: 200,
            items: &[
                item("Apple or orange", 1, 25, 0),
                item("Small handful of almonds (10-12)", 6, 6, 14),
            ],
        },
        Meal {
            name: "Lunch",
            time: "1:00 PM - 2:00 PM",
            calories: 600,
            items: &[
                item("Brown rice or whole wheat roti - 1.5 cups", 8, 68, 3),
                item("Grilled chicken/fish/lentils - 150g", 30, 15, 5),
                item("Mixed vegetable salad", 3, 10, 2),
                item("Buttermilk or yogurt", 8, 10, 4),
            ],
        },
        Meal {
            name: "Evening Snack",
            time: "5:00 PM",
            calories: 250,
            items: &[
                item("Whole grain crackers with hummus", 5, 20, 8),
                item("Green tea", 0, 0, 0),
                item("Carrot/cucumber sticks", 1, 5, 0),
            ],
        },
        Meal {
            name: "Dinner",
            time: "7:00 PM - 8:00 PM",
            calories: 550,
            items: &[
                item("Grilled vegetables", 4, 15, 3),
                item("Lean protein (fish/chicken/tofu) - 150g", 30, 0, 8),
                item("Quinoa or brown rice - 1 cup", 8, 50, 4),
                item("Green salad", 2, 8, 2),
            ],
        },
    ],
    tips: &[
        "Maintain regular meal times",
        "Stay hydrated with 8-10 glasses of water daily",
        "Include variety of colorful vegetables",
        "Exercise 150 minutes per week",
        "Get 7-9 hours of quality sleep",
        "Practice mindful eating",
    ],
};

pub(super) static OVERWEIGHT: PlanTemplate = PlanTemplate {
    title: "Weight Loss Diet Plan",
    description: "Create a sustainable calorie deficit for healthy weight loss",
    calories: CalorieRange { min: 1500, max: 1800 },
    meals: &[
        Meal {
            name: "Breakfast",
            time: "7:00 AM - 8:00 AM",
            calories: 350,
            items: &[
                item("Vegetable omelette (2 eggs)", 14, 5, 10),
                item("1 slice whole grain toast", 4, 15, 1),
                item("Green tea or black coffee", 0, 0, 0),
            ],
        },
        Meal {
            name: "Mid-Morning Snack",
            time: "10:30 AM",
            calories: 150,
            items: &[
                item("Greek yogurt with berries", 10, 15, 3),
                item("Herbal tea", 0, 0, 0),
            ],
        },
        Meal {
            name: "Lunch",
            time: "1:00 PM - 2:00 PM",
            calories: 450,
            items: &[
                item("Large mixed salad with olive oil dressing", 5, 15, 10),
                item("Grilled chicken/fish - 120g", 25, 0, 5),
                item("1/2 cup brown rice or quinoa", 4, 25, 2),
            ],
        },
        Meal {
            name: "Evening Snack",
            time: "4:30 PM",
            calories: 120,
            items: &[
                item("Cucumber and celery sticks", 1, 5, 0),
                item("Small apple", 0, 15, 0),
                item("Green tea", 0, 0, 0),
            ],
        },
        Meal {
            name: "Dinner",
            time: "7:00 PM",
            calories: 400,
            items: &[
                item("Vegetable soup", 4, 15, 2),
                item("Grilled fish or tofu - 120g", 25, 0, 5),
                item("Steamed vegetables", 3, 10, 1),
                item("Small portion of brown rice (optional)", 2, 20, 1),
            ],
        },
    ],
    tips: &[
        "Reduce portion sizes gradually",
        "Avoid sugary drinks and processed foods",
        "Drink water before meals",
        "Incorporate cardio and strength training",
        "Track your food intake",
        "Aim for 0.5-1kg weight loss per week",
    ],
};

pub(super) static OBESE: PlanTemplate = PlanTemplate {
    title: "Medical Weight Management Plan",
    description: "Comprehensive approach to significant weight reduction",
    calories: CalorieRange { min: 1200, max: 1500 },
    meals: &[
        Meal {
            name: "Breakfast",
            time: "7:00 AM - 8:00 AM",
            calories: 280,
            items: &[
                item("Egg white omelette with spinach", 12, 3, 2),
                item("1/2 cup oatmeal", 3, 20, 2),
                item("Green tea", 0, 0, 0),
            ],
        },
        Meal {
            name: "Mid-Morning Snack",
            time: "10:00 AM",
            calories: 100,
            items: &[
                item("Small portion of berries", 1, 12, 0),
                item("Herbal tea", 0, 0, 0),
            ],
        },
        Meal {
            name: "Lunch",
            time: "12:30 PM - 1:30 PM",
            calories: 400,
            items: &[
                item("Large vegetable salad", 4, 12, 5),
                item("Grilled chicken breast - 100g", 25, 0, 3),
                item("1/3 cup brown rice", 2, 15, 1),
            ],
        },
        Meal {
            name: "Afternoon Snack",
            time: "3:30 PM",
            calories: 80,
            items: &[
                item("Cucumber slices", 1, 4, 0),
                item("Green tea", 0, 0, 0),
            ],
        },
        Meal {
            name: "Dinner",
            time: "6:30 PM",
            calories: 350,
            items: &[
                item("Clear vegetable soup", 3, 10, 1),
                item("Steamed fish or tofu - 100g", 22, 0, 4),
                item("Steamed broccoli and carrots", 4, 15, 0),
            ],
        },
    ],
    tips: &[
        "Consult with a registered dietitian",
        "Start with low-impact exercises (walking, swimming)",
        "Monitor blood sugar and blood pressure regularly",
        "Eliminate processed foods and added sugars",
        "Join a support group for accountability",
        "Consider working with a healthcare team",
        "Set realistic, achievable goals",
    ],
};
