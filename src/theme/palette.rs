//! Color constants and font size tokens for consistent theming.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Score display text color (yellow-gold).
pub const SCORE_TEXT: Color = Color::srgb(1.0, 0.85, 0.0);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for pause/modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel background (dark blue-gray, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light blue-gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.275, 0.4, 0.75);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.384, 0.6, 0.82);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.239, 0.286, 0.6);

// === Level Colors ===

pub const BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.12);
pub const PLATFORM: Color = Color::srgb(0.3, 0.3, 0.4);
pub const HAZARD: Color = Color::srgb(0.9, 0.35, 0.1);
pub const COLLECTIBLE: Color = Color::srgb(1.0, 0.85, 0.0);
pub const ITEM: Color = Color::srgb(0.2, 0.8, 0.9);
pub const HEART: Color = Color::srgb(0.95, 0.3, 0.55);

// === Character Colors ===

pub const PLAYER: Color = Color::srgb(0.2, 0.8, 0.2);
pub const PATROL_AGENT: Color = Color::srgb(0.8, 0.2, 0.2);
pub const CORPSE: Color = Color::srgb(0.35, 0.25, 0.25);

// === Health Bar Colors ===

pub const HEALTH_BAR_BG: Color = Color::srgb(0.8, 0.1, 0.1);
pub const HEALTH_BAR_FILL: Color = Color::srgb(0.1, 0.9, 0.1);

// === Debug Gizmo Colors ===

pub const GIZMO_ROUTE: Color = Color::srgb(1.0, 1.0, 0.0);
pub const GIZMO_WAYPOINT_TARGET: Color = Color::srgb(1.0, 0.0, 0.0);
pub const GIZMO_DETECTION_IDLE: Color = Color::srgb(0.0, 1.0, 0.0);
pub const GIZMO_DETECTION_ALERT: Color = Color::srgb(1.0, 0.0, 0.0);
pub const GIZMO_GROUND_PROBE: Color = Color::srgb(0.3, 0.6, 1.0);

// === Font Size Tokens ===

pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
