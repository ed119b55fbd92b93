// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action classification for finished turns.
//!
//! Two strategies are available. Keyword classification inspects the final
//! response text with ordered, case-insensitive rules; the first matching
//! rule wins. Last-tool classification derives the category from the last
//! tool executed during the turn and falls back to `Response` when the
//! turn used no tools.

use frontdesk_config::ClassificationMode;
use frontdesk_core::ActionCategory;

/// Keyword rules in priority order. Booking outranks calendar so that a
/// reply confirming a booking of an available slot classifies as `Booking`.
const RULES: &[(&[&str], ActionCategory)] = &[
    (&["booking", "appointed"], ActionCategory::Booking),
    (&["transfer"], ActionCategory::Transfer),
    (&["calendar", "available"], ActionCategory::Calendar),
];

/// Classify by scanning the final response text.
pub fn classify_keywords(final_text: &str) -> ActionCategory {
    let lower = final_text.to_lowercase();
    for (needles, category) in RULES {
        if needles.iter().any(|n| lower.contains(n)) {
            return *category;
        }
    }
    ActionCategory::Response
}

/// Classify by the last tool the turn executed.
pub fn classify_last_tool(last_tool: Option<&str>) -> ActionCategory {
    match last_tool {
        Some("book_appointment") => ActionCategory::Booking,
        Some("transfer_to_human") => ActionCategory::Transfer,
        Some("check_availability") => ActionCategory::Calendar,
        _ => ActionCategory::Response,
    }
}

/// Apply the configured classification strategy.
pub fn classify_turn(
    mode: ClassificationMode,
    final_text: &str,
    last_tool: Option<&str>,
) -> ActionCategory {
    match mode {
        ClassificationMode::Keywords => classify_keywords(final_text),
        ClassificationMode::LastTool => classify_last_tool(last_tool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_priority_booking_beats_calendar() {
        assert_eq!(
            classify_keywords("Your booking takes one of the available slots."),
            ActionCategory::Booking
        );
    }

    #[test]
    fn keyword_rules_are_case_insensitive() {
        assert_eq!(classify_keywords("TRANSFER in progress"), ActionCategory::Transfer);
        assert_eq!(
            classify_keywords("Friday is AVAILABLE all morning"),
            ActionCategory::Calendar
        );
    }

    #[test]
    fn appointed_counts_as_booking() {
        assert_eq!(
            classify_keywords("You are appointed for Tuesday at 3pm"),
            ActionCategory::Booking
        );
    }

    #[test]
    fn appointment_alone_is_not_a_keyword() {
        assert_eq!(
            classify_keywords("Shall I cancel that appointment for you?"),
            ActionCategory::Response
        );
    }

    #[test]
    fn no_keyword_means_plain_response() {
        assert_eq!(
            classify_keywords("We open at nine and close at five."),
            ActionCategory::Response
        );
    }

    #[test]
    fn last_tool_mapping() {
        assert_eq!(
            classify_last_tool(Some("book_appointment")),
            ActionCategory::Booking
        );
        assert_eq!(
            classify_last_tool(Some("check_availability")),
            ActionCategory::Calendar
        );
        assert_eq!(
            classify_last_tool(Some("transfer_to_human")),
            ActionCategory::Transfer
        );
        assert_eq!(classify_last_tool(None), ActionCategory::Response);
        assert_eq!(classify_last_tool(Some("unknown")), ActionCategory::Response);
    }

    #[test]
    fn mode_selects_strategy() {
        let text = "Your booking is saved!";
        assert_eq!(
            classify_turn(frontdesk_config::ClassificationMode::Keywords, text, None),
            ActionCategory::Booking
        );
        assert_eq!(
            classify_turn(frontdesk_config::ClassificationMode::LastTool, text, None),
            ActionCategory::Response
        );
    }
}
