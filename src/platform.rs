//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the save/submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for wizard help text
/// - macOS: "Cmd+S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Step navigation shortcuts, Ctrl on every platform
pub const NEXT_STEP_SHORTCUT: &str = "Ctrl+N";
pub const PREV_STEP_SHORTCUT: &str = "Ctrl+B";

/// Whether `modifiers` carry the command key
///
/// Ctrl is accepted everywhere since many macOS terminals never forward Cmd.
pub fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SAVE_MODIFIER)
}
