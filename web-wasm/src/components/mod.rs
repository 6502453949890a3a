pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod not_found;
pub mod project_card;
pub mod projects;
pub mod services;
pub mod tabs;
pub mod typewriter;
pub mod whatsapp_button;
