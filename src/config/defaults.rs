// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Auto-removal delay
//! - **Display**: Toast card geometry

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Delay before a toast without explicit duration is removed (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2500;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default toast card width (in logical pixels).
pub const DEFAULT_TOAST_WIDTH: f32 = 320.0;

/// Minimum toast card width.
pub const MIN_TOAST_WIDTH: f32 = 160.0;

/// Maximum toast card width.
pub const MAX_TOAST_WIDTH: f32 = 640.0;

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(MIN_TOAST_WIDTH < DEFAULT_TOAST_WIDTH);
    assert!(DEFAULT_TOAST_WIDTH < MAX_TOAST_WIDTH);
};
