// ========================================
// ページ強化レイヤの設定
// ========================================

/// ページ側のDOM契約（ID・クラス名）とテーマ値をまとめた設定
///
/// デフォルト値はサーバーレンダリングされたテンプレートと
/// 共有スタイルシートの契約に合わせてある。
#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    /// 予測フォームのID
    pub form_id: String,
    /// 送信ボタンのID
    pub submit_button_id: String,
    /// ナビリンクのクラス名
    pub nav_link_class: String,
    /// ボタン内テキストインジケータのクラス名
    pub button_text_class: String,
    /// ボタン内ローダーインジケータのクラス名
    pub button_loader_class: String,
    /// アクティブリンクの文字色（テーマ変数）
    pub active_text_color: String,
    /// アクティブリンクの背景（テーマ変数）
    pub active_background: String,
    /// 送信中のボタン不透明度
    pub pending_opacity: String,
    /// 通常時のボタン不透明度
    pub idle_opacity: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            form_id: "predictForm".to_string(),
            submit_button_id: "submitBtn".to_string(),
            nav_link_class: "nav-link".to_string(),
            button_text_class: "btn-text".to_string(),
            button_loader_class: "btn-loader".to_string(),
            active_text_color: "var(--text-primary)".to_string(),
            active_background: "var(--bg-glass)".to_string(),
            pending_opacity: "0.7".to_string(),
            idle_opacity: "1".to_string(),
        }
    }
}
