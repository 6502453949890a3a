//! スクロール位置による表示切り替え

/// プロジェクト詳細: ページ高の40%を過ぎたらWhatsAppボタンを出す
pub const PROJECT_REVEAL_FRACTION: f64 = 0.4;

/// サービス詳細: ページ高の30%
pub const SERVICE_REVEAL_FRACTION: f64 = 0.3;

/// ナビバーを不透明にするスクロール量（px）
pub const NAVBAR_SOLID_OFFSET: f64 = 20.0;

/// サービス詳細のヘッダーを縮めるスクロール量（px）
pub const HEADER_COMPACT_OFFSET: f64 = 100.0;

/// ヒーロー背景の視差係数（0.5 × 0.3）
pub const PARALLAX_FACTOR: f64 = 0.15;

/// `scroll_y > document_height * fraction`
///
/// 境界ちょうどでは表示しない。ヒステリシスなし。
pub fn should_reveal(scroll_y: f64, document_height: f64, fraction: f64) -> bool {
    scroll_y > document_height * fraction
}

/// 固定オフセットを超えたか
pub fn past_offset(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// ヒーロー背景の縦方向オフセット（px）
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_reveal_thresholds() {
        assert!(!should_reveal(0.0, 1000.0, 0.3));
        assert!(should_reveal(400.0, 1000.0, 0.3));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        assert!(!should_reveal(300.0, 1000.0, 0.3));
        assert!(should_reveal(300.5, 1000.0, 0.3));
    }

    #[test]
    fn test_project_fraction() {
        assert!(!should_reveal(400.0, 1000.0, PROJECT_REVEAL_FRACTION));
        assert!(should_reveal(401.0, 1000.0, PROJECT_REVEAL_FRACTION));
    }

    #[test]
    fn test_navbar_offset() {
        assert!(!past_offset(20.0, NAVBAR_SOLID_OFFSET));
        assert!(past_offset(21.0, NAVBAR_SOLID_OFFSET));
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(200.0) - 30.0).abs() < 1e-9);
    }
}
