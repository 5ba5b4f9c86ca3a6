// ABOUTME: Coach prompt templates for remote diet advice and short tips
// ABOUTME: Fills the AURA coach persona with the assembled advice payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use aura_core::constants::advice::MAX_ADVICE_TIPS;

use super::AdviceRequest;

/// Persona and rules shared by every advice prompt
pub const COACH_SYSTEM_PROMPT: &str = "You are \"AURA\", a warm health coach inside a BMI and \
nutrition app. Give general wellness guidance only and never a medical diagnosis. Never mention \
that you are an AI or which model you run on. Keep language simple and empathetic.";

fn or_dash<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "-".to_owned(), ToString::to_string)
}

fn profile_block(request: &AdviceRequest) -> String {
    let history = request
        .history
        .iter()
        .map(|entry| format!("{}:{}", entry.date.as_deref().unwrap_or(""), entry.bmi))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "- Name: {name}\n\
- Age: {age}\n\
- Gender: {gender}\n\
- Height: {height} cm\n\
- Weight: {weight} kg\n\
- BMI: {bmi}\n\
- Category: {category}\n\
- Activity Level: {activity}\n\
- Goal: {goal}\n\
- Past BMI Records: {history}\n\
- Last Advice: {last_advice}\n\
- Dietary Preference: {diet_type}\n",
        name = request.name.as_deref().unwrap_or("Friend"),
        age = or_dash(request.age.as_ref()),
        gender = or_dash(request.gender.as_ref()),
        height = or_dash(request.height.as_ref()),
        weight = or_dash(request.weight.as_ref()),
        bmi = request.bmi,
        category = request.category,
        activity = or_dash(request.activity_level.as_ref()),
        goal = request.goal.as_deref().unwrap_or("Maintain"),
        last_advice = request.last_advice.as_deref().unwrap_or(""),
        diet_type = request.diet_type.as_deref().unwrap_or(""),
    )
}

/// Full coaching prompt for the diet advice endpoint
#[must_use]
pub fn diet_advice_prompt(request: &AdviceRequest) -> String {
    format!(
        "### Inputs:\n{}\n\
### Tasks:\n\
1) Explain the BMI and what it means for this person in plain words; say whether it is healthy or needs attention.\n\
2) Give personalized diet advice: an estimated TDEE, a macro split, and 3-4 practical food or habit tips. \
Prefer Indian/Asian food examples when nothing else is specified.\n\
3) Add 1-2 sentences of motivation.\n\
4) If past records are given, briefly compare the last reading with the current one.\n\n\
### Rules:\n\
- Stay under 300 words.\n\
- Answer in concise markdown with the sections: BMI Summary, Diet & Nutrition Plan, Progress Insight (only with history), Motivation.\n",
        profile_block(request)
    )
}

/// Prompt asking for short standalone tips, one per line
#[must_use]
pub fn quick_tips_prompt(request: &AdviceRequest) -> String {
    format!(
        "### Inputs:\n{}\n\
### Task:\n\
Write at most {MAX_ADVICE_TIPS} short, practical diet or habit tips for this person. \
One tip per line, no headings, no introduction, each under 20 words.\n",
        profile_block(request)
    )
}
