// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical notification message bodies.
//!
//! Kept in one place so the tools and the scheduler send identical copy.

const DEFAULT_REVIEW_LINK: &str = "https://g.page/r/frontdesk/review";

/// Booking confirmation sent right after a booking is made.
pub fn confirmation(customer_name: &str, when: &str) -> String {
    format!(
        "Hi {customer_name}, your appointment is confirmed for {when}. \
         Reply to this number if you need to make changes."
    )
}

/// 24-hour reminder sent by the scheduler.
pub fn reminder(customer_name: &str, when: &str) -> String {
    format!(
        "Hi {customer_name}, this is a reminder about your appointment \
         tomorrow at {when}. See you then!"
    )
}

/// Post-appointment review request sent by the scheduler.
pub fn review(customer_name: &str, review_link: Option<&str>) -> String {
    let link = review_link.unwrap_or(DEFAULT_REVIEW_LINK);
    format!(
        "Hi {customer_name}, thanks for visiting us! We'd love to hear \
         your feedback: {link}"
    )
}

/// Alert sent to the business owner when a customer asks for a human.
pub fn transfer_alert(user_id: &str, reason: &str) -> String {
    format!("[Transfer] User {user_id}: {reason}")
}
