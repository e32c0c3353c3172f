// ========================================
// フォーム送信フィードバック
// ========================================
// submitで送信ボタンを無効化してローダーを表示し、
// resetで元の状態に戻す。ブラウザ標準の送信処理は妨げない。

use crate::config::EnhanceConfig;
use crate::page::{ElementHandle, PageHandle};

// インジケータの表示値（テンプレート側の契約で固定）
const TEXT_VISIBLE: &str = "inline";
const LOADER_VISIBLE: &str = "inline-flex";
const HIDDEN: &str = "none";

/// 送信中の見た目を適用する
///
/// ボタンと子要素はイベントごとに検索し直す。イベント間で
/// 要素参照を保持しないため、DOMの差し替え後も正しく動作する。
/// テキストとローダーは同時に表示されない。
pub fn apply_submit_feedback<P: PageHandle>(page: &P, config: &EnhanceConfig) {
    let button = match page.element_by_id(&config.submit_button_id) {
        Some(button) => button,
        None => {
            log::debug!(
                "Submit button '{}' not found, skipping feedback",
                config.submit_button_id
            );
            return;
        }
    };

    if let Some(text) = button.descendant_by_class(&config.button_text_class) {
        text.set_style_property("display", HIDDEN);
    }
    if let Some(loader) = button.descendant_by_class(&config.button_loader_class) {
        loader.set_style_property("display", LOADER_VISIBLE);
    }
    button.set_disabled(true);
    button.set_style_property("opacity", &config.pending_opacity);
}

/// リセット時に送信前の見た目へ戻す
pub fn apply_reset_feedback<P: PageHandle>(page: &P, config: &EnhanceConfig) {
    let button = match page.element_by_id(&config.submit_button_id) {
        Some(button) => button,
        None => {
            log::debug!(
                "Submit button '{}' not found, skipping feedback",
                config.submit_button_id
            );
            return;
        }
    };

    if let Some(text) = button.descendant_by_class(&config.button_text_class) {
        text.set_style_property("display", TEXT_VISIBLE);
    }
    if let Some(loader) = button.descendant_by_class(&config.button_loader_class) {
        loader.set_style_property("display", HIDDEN);
    }
    button.set_disabled(false);
    button.set_style_property("opacity", &config.idle_opacity);
}

/// submit/resetリスナーをフォームへ登録する（WASM環境）
///
/// フォームが存在しないページではリスナーを登録せず、何もしない。
#[cfg(target_arch = "wasm32")]
pub fn attach_form_feedback(config: &EnhanceConfig) {
    use crate::page::web::WebPage;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::window;

    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let form = match document.get_element_by_id(&config.form_id) {
        Some(form) => form,
        None => {
            log::debug!("Form '{}' not found, feedback disabled", config.form_id);
            return;
        }
    };

    // submitイベント
    let submit_config = config.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(page) = WebPage::from_window() {
            apply_submit_feedback(&page, &submit_config);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();

    // resetイベント
    let reset_config = config.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(page) = WebPage::from_window() {
            apply_reset_feedback(&page, &reset_config);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("reset", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();

    log::info!("Form feedback listeners registered on '{}'", config.form_id);
}
