// ========================================
// ナビゲーションハイライト
// ========================================
// 現在のパスと各ナビリンクのhrefを比較し、一致したリンクに
// アクティブ用のテーマスタイルを適用する。

use crate::config::EnhanceConfig;
use crate::page::{ElementHandle, PageHandle};

/// hrefが現在のパスに対してアクティブかどうかを判定
///
/// 完全一致、またはルート以外のhrefが現在パスの前方一致の場合にアクティブ。
/// ルート("/")は完全一致のみ（前方一致を許すと全ページがホームに一致する）。
pub fn is_active_path(href: &str, current_path: &str) -> bool {
    href == current_path || (href != "/" && current_path.starts_with(href))
}

/// ナビリンクをハイライトする。適用した件数を返す。
///
/// 一致しないリンクには一切触れない。リンクが存在しなければ何もしない。
pub fn highlight_active_links<P: PageHandle>(page: &P, config: &EnhanceConfig) -> usize {
    let current_path = match page.current_path() {
        Some(path) => path,
        None => {
            log::warn!("Current path unavailable, skipping nav highlight");
            return 0;
        }
    };

    log::debug!(
        "Highlighting nav links for path '{}' ({:?} backend)",
        current_path,
        page.backend()
    );

    let mut applied = 0;
    for link in page.elements_by_class(&config.nav_link_class) {
        let href = match link.attribute("href") {
            Some(href) => href,
            None => continue,
        };
        if is_active_path(&href, &current_path) {
            link.set_style_property("color", &config.active_text_color);
            link.set_style_property("background", &config.active_background);
            applied += 1;
            log::debug!("Nav link '{}' is active for path '{}'", href, current_path);
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MemoryElement, MemoryPage};

    fn nav_page(path: &str, hrefs: &[&str]) -> MemoryPage {
        let mut page = MemoryPage::new(path);
        for href in hrefs {
            page.push(
                MemoryElement::new("a")
                    .with_class("nav-link")
                    .with_attribute("href", href),
            );
        }
        page
    }

    #[test]
    fn test_exact_match_is_active() {
        assert!(is_active_path("/predict", "/predict"));
        assert!(is_active_path("/history", "/history"));
    }

    #[test]
    fn test_prefix_match_is_active() {
        assert!(is_active_path("/predict", "/predict/history"));
        assert!(!is_active_path("/history", "/predict/history"));
    }

    #[test]
    fn test_root_only_matches_exactly() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/", "/predict"));
        assert!(!is_active_path("/", "/predict/history"));
    }

    #[test]
    fn test_highlight_applies_theme_styles() {
        let page = nav_page("/predict", &["/", "/predict", "/history"]);
        let config = EnhanceConfig::default();

        assert_eq!(highlight_active_links(&page, &config), 1);

        let links = page.elements_by_class("nav-link");
        assert_eq!(
            links[1].style_property("color").as_deref(),
            Some("var(--text-primary)")
        );
        assert_eq!(
            links[1].style_property("background").as_deref(),
            Some("var(--bg-glass)")
        );
        // 一致しないリンクは未変更
        assert_eq!(links[0].style_property("color"), None);
        assert_eq!(links[2].style_property("color"), None);
    }

    #[test]
    fn test_history_page_highlights_section_link() {
        // /predict/history では /predict が前方一致、/ は対象外
        let page = nav_page("/predict/history", &["/", "/predict"]);
        let config = EnhanceConfig::default();

        assert_eq!(highlight_active_links(&page, &config), 1);

        let links = page.elements_by_class("nav-link");
        assert_eq!(links[0].style_property("background"), None);
        assert!(links[1].style_property("background").is_some());
    }

    #[test]
    fn test_root_page_highlights_home_link() {
        let page = nav_page("/", &["/", "/predict"]);
        let config = EnhanceConfig::default();

        assert_eq!(highlight_active_links(&page, &config), 1);

        let links = page.elements_by_class("nav-link");
        assert!(links[0].style_property("color").is_some());
        assert_eq!(links[1].style_property("color"), None);
    }

    #[test]
    fn test_no_links_is_silent_noop() {
        let page = MemoryPage::new("/predict");
        let config = EnhanceConfig::default();
        assert_eq!(highlight_active_links(&page, &config), 0);
    }

    #[test]
    fn test_link_without_href_is_skipped() {
        let mut page = MemoryPage::new("/predict");
        page.push(MemoryElement::new("a").with_class("nav-link"));
        let config = EnhanceConfig::default();

        assert_eq!(highlight_active_links(&page, &config), 0);

        let links = page.elements_by_class("nav-link");
        assert_eq!(links[0].style_property("color"), None);
    }
}
