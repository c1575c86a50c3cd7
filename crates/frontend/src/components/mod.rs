pub mod control_buttons;
pub mod help_overlay;
pub mod map_key;
pub mod map_view;
pub mod report_popup;
pub mod search_popup;
