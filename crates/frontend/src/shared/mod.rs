pub mod components;
pub mod icons;
pub mod scroll;
pub mod tabs;
