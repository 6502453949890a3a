//! Johnek Architects Common Library
//!
//! WebサイトとCLIで共有される型とロジック

pub mod types;
pub mod error;
pub mod filter;
pub mod reveal;
pub mod scroll;
pub mod share;
pub mod route;
pub mod stats;
pub mod contact;
pub mod catalog;
pub mod site;

pub use types::{ContentItem, Project, ProjectStatus, Service, ServiceCategory, SiteContent};
pub use error::{Error, Result};
pub use filter::{filter, FilterState, ALL_CATEGORIES};
pub use reveal::{advance, reveal_at, RevealConfig, RevealState};
pub use scroll::should_reveal;
pub use share::WhatsAppLink;
pub use route::{Route, Section};
pub use stats::{find_by_slug, ProjectStats};
pub use contact::ContactForm;
pub use catalog::{SiteData, Issue};
