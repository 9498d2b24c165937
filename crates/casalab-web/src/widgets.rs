pub mod icon;
pub mod lang_switch;
pub mod logo;
pub mod magnetic;
pub mod scroll_reveal;
pub mod spotlight;
