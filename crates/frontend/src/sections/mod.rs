pub mod about;
pub mod contact;
pub mod hero;
pub mod menu;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use menu::MenuSection;
