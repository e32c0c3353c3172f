// WASM専用のエントリーポイント

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::EnhanceConfig;
use crate::form;
use crate::nav;
use crate::page::web::WebPage;

#[wasm_bindgen(start)]
pub fn main() {
    // パニック時のエラーメッセージをブラウザコンソールに表示
    console_error_panic_hook::set_once();

    // WebAssembly用のロガーを初期化
    console_log::init_with_level(log::Level::Info).expect("error initializing log");

    log::info!("Page enhancement starting...");

    run_when_ready();
}

/// DOMの解析完了を待ってから初期化を実行する
///
/// モジュールの読み込みが解析完了後になるケースでは即時実行し、
/// どちらの経路でも初期化は一度だけ行われる。
fn run_when_ready() {
    use web_sys::window;

    let document = match window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            init_enhancements();
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    } else {
        init_enhancements();
    }
}

/// 両コンポーネントを初期化する
fn init_enhancements() {
    let config = EnhanceConfig::default();

    if let Some(page) = WebPage::from_window() {
        let applied = nav::highlight_active_links(&page, &config);
        log::info!("Nav highlight applied to {} link(s)", applied);
    }

    form::attach_form_feedback(&config);

    log::info!("Page enhancement initialized");
}
