pub mod actions;
pub mod disclosure;
pub mod platform;
pub mod sections;
