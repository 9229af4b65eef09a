// src/ui/elements/mod.rs

// Main editor view
pub mod editor;
// Blocking success/error notification
pub mod feedback_popup;
// Path entry with browse and load buttons
pub mod path_bar;
