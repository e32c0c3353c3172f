// ========================================
// ページ抽象レイヤ
// ========================================
// グローバルなDOMを直接触らず、必ずハンドル経由で操作する。
// WASM環境ではweb-sys実装、それ以外ではメモリ実装を使う。

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryElement, MemoryPage};
#[cfg(target_arch = "wasm32")]
pub use web::{WebElement, WebPage};

/// ページバックエンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBackend {
    /// ブラウザの実DOM（web-sys）
    Web,
    /// メモリ上の要素ツリー（ヘッドレス・テスト用）
    Memory,
}

/// ドキュメント全体へのハンドル
pub trait PageHandle {
    type Element: ElementHandle;

    /// バックエンドの種類を返す
    fn backend(&self) -> PageBackend;

    /// 現在のナビゲーションパスを返す（取得できない場合はNone）
    fn current_path(&self) -> Option<String>;

    /// IDで要素を検索
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// クラス名で要素をドキュメント順に列挙
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}

/// 単一要素へのハンドル
pub trait ElementHandle: Sized {
    /// 属性値を取得
    fn attribute(&self, name: &str) -> Option<String>;

    /// インラインスタイルを設定
    fn set_style_property(&self, name: &str, value: &str);

    /// disabledフラグを設定（対応しない要素では何もしない）
    fn set_disabled(&self, disabled: bool);

    /// クラス名で子孫要素を1つ検索（自身は含まない）
    fn descendant_by_class(&self, class: &str) -> Option<Self>;
}
