// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query functions over the storage schema, one module per entity.

pub mod bookings;
pub mod conversations;
pub mod faq;
pub mod messages;
pub mod transfers;
