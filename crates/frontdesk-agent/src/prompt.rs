// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt assembly.

use frontdesk_storage::FaqEntry;

/// Built-in receptionist persona, used when no prompt is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a friendly and professional virtual receptionist for a small business. \
You help customers check appointment availability, book appointments, and \
answer questions about the business. When a customer needs something you \
cannot handle, transfer them to a human. Keep replies short and courteous. \
Use the provided tools for availability checks, bookings, and transfers; \
never invent appointment times.";

/// Build the full system prompt: the persona followed by the FAQ knowledge
/// base. The FAQ section is omitted entirely when there are no entries.
pub fn build_system_prompt(base: &str, faq: &[FaqEntry]) -> String {
    if faq.is_empty() {
        return base.to_string();
    }
    let mut prompt = String::from(base);
    prompt.push_str("\n\n## FAQ Knowledge Base\n");
    for entry in faq {
        prompt.push_str(&format!("\nQ: {}\nA: {}\n", entry.question, entry.answer));
    }
    prompt
}
