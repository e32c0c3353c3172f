// web-sysによるページ実装（WASM環境）

use wasm_bindgen::JsCast;
use web_sys::window;

use super::{ElementHandle, PageBackend, PageHandle};

/// ブラウザの実DOMを操作するページハンドル
pub struct WebPage {
    document: web_sys::Document,
}

impl WebPage {
    /// 現在のウィンドウからページハンドルを取得
    pub fn from_window() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl PageHandle for WebPage {
    type Element = WebElement;

    fn backend(&self) -> PageBackend {
        PageBackend::Web
    }

    fn current_path(&self) -> Option<String> {
        window()?.location().pathname().ok()
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let list = self.document.get_elements_by_class_name(class);
        let mut elements = Vec::new();
        for index in 0..list.length() {
            if let Some(element) = list.item(index) {
                elements.push(WebElement(element));
            }
        }
        elements
    }
}

/// ブラウザの実DOM要素
pub struct WebElement(web_sys::Element);

impl ElementHandle for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        if let Some(element) = self.0.dyn_ref::<web_sys::HtmlElement>() {
            let _ = element.style().set_property(name, value);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(disabled);
        }
    }

    fn descendant_by_class(&self, class: &str) -> Option<Self> {
        let selector = format!(".{}", class);
        self.0
            .query_selector(&selector)
            .ok()
            .flatten()
            .map(WebElement)
    }
}
