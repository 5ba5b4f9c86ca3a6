// ABOUTME: Core data models shared across the workspace
// ABOUTME: Re-exports the validated profile and its enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

mod profile;

pub use profile::{ActivityLevel, Gender, Goal, Profile, ProfileInput};
