//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers that turn `s` into the submit shortcut.
/// Ctrl works everywhere; Cmd (SUPER) is accepted too so macOS users
/// can use the native chord when their terminal forwards it.
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
