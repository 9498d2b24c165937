pub mod digital;
pub mod essence;
pub mod logos;
pub mod palette;
pub mod sensory;
pub mod typography;
pub mod voice;
