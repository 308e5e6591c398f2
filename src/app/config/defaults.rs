// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slide**: Carousel slide display bounds
//! - **Indicator**: Indicator dot sizing
//! - **Notification**: Toast auto-dismiss timing

// ==========================================================================
// Slide Defaults
// ==========================================================================

/// Default rendered height of a carousel slide in logical pixels.
pub const DEFAULT_SLIDE_HEIGHT: f32 = 420.0;

/// Minimum allowed slide height.
pub const MIN_SLIDE_HEIGHT: f32 = 120.0;

/// Maximum allowed slide height.
pub const MAX_SLIDE_HEIGHT: f32 = 1200.0;

// ==========================================================================
// Indicator Defaults
// ==========================================================================

/// Diameter of an indicator dot.
pub const INDICATOR_SIZE: f32 = 12.0;

/// Gap between indicator dots.
pub const INDICATOR_SPACING: f32 = 8.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Tick interval driving notification auto-dismiss (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slide height validation
    assert!(MIN_SLIDE_HEIGHT > 0.0);
    assert!(MAX_SLIDE_HEIGHT > MIN_SLIDE_HEIGHT);
    assert!(DEFAULT_SLIDE_HEIGHT >= MIN_SLIDE_HEIGHT);
    assert!(DEFAULT_SLIDE_HEIGHT <= MAX_SLIDE_HEIGHT);

    // Indicator validation
    assert!(INDICATOR_SIZE > 0.0);
    assert!(INDICATOR_SPACING >= 0.0);

    // Notification validation
    assert!(NOTIFICATION_TICK_MS > 0);
};
