// ABOUTME: Turns free-form advice text into a short list of clean tip lines
// ABOUTME: Strips bullets, numbering, heading hashes and bold markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::sync::LazyLock;

use aura_core::constants::advice::MAX_ADVICE_TIPS;
use regex::Regex;

/// Leading list or heading markers, possibly stacked ("## 1. ...")
static LEADING_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "# ", "### ", "- ", "* ", "• ", "1. ", "2) "
    Regex::new(r"^(?:#+\s*|[-*•](?:\s+|$)|\d+[.)](?:\s+|$))+").ok()
});

fn clean_line(line: &str) -> &str {
    let mut text = line.trim();

    if let Some(pattern) = LEADING_MARKER.as_ref() {
        if let Some(found) = pattern.find(text) {
            text = text[found.end()..].trim();
        }
    }

    if let Some(inner) = text
        .strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
    {
        text = inner.trim();
    }

    text
}

/// Split advice text into at most six display lines
///
/// Blank lines and lines that are only markers are dropped.
#[must_use]
pub fn sanitize_advice_text(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .take(MAX_ADVICE_TIPS)
        .map(str::to_owned)
        .collect()
}
