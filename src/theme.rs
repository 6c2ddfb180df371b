//! Theme module for tipcalc
//!
//! This module provides a centralized color palette and styling constants
//! for the calculator screen.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color for panels (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

/// Rounded corners for every panel
pub const ROUNDED_BORDERS: BorderType = BorderType::Rounded;

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent color, used for the focused field (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Green for a successful result (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber for toasts (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
