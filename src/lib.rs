pub mod config;
pub mod form;
pub mod nav;
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod wasm_entry;

pub use config::EnhanceConfig;
pub use page::{ElementHandle, PageBackend, PageHandle};

/// ログレベルを初期化する関数（ネイティブ環境用）
///
/// WASM環境ではエントリーポイント側がconsole_logを初期化するため不要。
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub fn init_logger(level: log::LevelFilter) {
    use env_logger::Builder;
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        Builder::from_default_env()
            .filter_level(level)
            .format_timestamp_secs()
            .try_init()
            .ok(); // エラーを無視
    });
}

#[cfg(all(test, not(target_arch = "wasm32"), feature = "native"))]
mod tests {
    #[test]
    fn test_init_logger_is_idempotent() {
        // 二重初期化してもパニックしない
        crate::init_logger(log::LevelFilter::Debug);
        crate::init_logger(log::LevelFilter::Info);
    }
}
