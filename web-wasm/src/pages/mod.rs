pub mod home;
pub mod project_detail;
pub mod projects;
pub mod service_detail;
