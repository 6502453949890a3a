//! サイト全体の固定値

pub const FIRM_NAME: &str = "Johnek Architects";

pub const FOUNDED_YEAR: u32 = 1998;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "+1234567890";

pub const CONTACT_EMAIL: &str = "info@johnekarchitects.com";

pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

/// 受賞数（サイト掲載値）
pub const AWARDS_WON: usize = 8;

/// トップページに並べるプロジェクト数
pub const HOME_FEATURED_LIMIT: usize = 6;

/// トップページのプロジェクト絞り込みボタン
pub const HOME_PROJECT_CATEGORIES: [&str; 4] = ["residential", "commercial", "cultural", "hospitality"];

/// 起動時のスプラッシュ表示時間（ms）
pub const LOADING_DELAY_MS: u64 = 800;

/// マウント後にアニメーションを開始するまで（ms）
pub const MOUNT_ANIMATION_DELAY_MS: u64 = 100;

/// ナビバーの問い合わせボタンが遷移するまで（ms）
pub const CONTACT_BUTTON_DELAY_MS: u64 = 300;

/// ヒーローのキャッチコピーの文字間隔（ms）
pub const HERO_TAGLINE_DELAY_MS: u64 = 50;

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Privacy Policy", href: "#" },
    FooterLink { label: "Terms of Service", href: "#" },
    FooterLink { label: "Sitemap", href: "#" },
    FooterLink { label: "Careers", href: "#" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "LinkedIn", icon: "in" },
    SocialLink { label: "Instagram", icon: "ig" },
    SocialLink { label: "Twitter", icon: "𝕏" },
    SocialLink { label: "Pinterest", icon: "P" },
];

/// 創業からの年数
pub fn years_of_practice(current_year: u32) -> u32 {
    current_year.saturating_sub(FOUNDED_YEAR)
}
