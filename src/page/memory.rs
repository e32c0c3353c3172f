// メモリ上のページ実装
// ブラウザなしで同じコードパスを駆動するためのバックエンド。
// テストとヘッドレス確認用にHTML文字列の書き出しもできる。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{ElementHandle, PageBackend, PageHandle};

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    disabled: bool,
    children: Vec<Rc<RefCell<ElementData>>>,
}

/// メモリ上の単一要素
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    /// 指定されたタグ名で要素を作成
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(self, child: MemoryElement) -> Self {
        self.0.borrow_mut().children.push(Rc::clone(&child.0));
        self
    }

    /// 設定済みのインラインスタイルを取得
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.0.borrow().styles.get(name).cloned()
    }

    /// disabledフラグを取得
    pub fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }
}

impl ElementHandle for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(name.to_string(), value.to_string());
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn descendant_by_class(&self, class: &str) -> Option<Self> {
        let data = self.0.borrow();
        for child in &data.children {
            if let Some(found) = find_by_class(child, class) {
                return Some(MemoryElement(found));
            }
        }
        None
    }
}

/// メモリ上のページ
pub struct MemoryPage {
    path: String,
    roots: Vec<Rc<RefCell<ElementData>>>,
}

impl MemoryPage {
    /// 指定されたパスで空のページを作成
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            roots: Vec::new(),
        }
    }

    /// ルート要素を追加
    pub fn push(&mut self, element: MemoryElement) {
        self.roots.push(element.0);
    }

    /// ツリー全体をHTML文字列として書き出す（ヘッドレス確認用）
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            render_html(root, &mut out);
        }
        out
    }
}

impl PageHandle for MemoryPage {
    type Element = MemoryElement;

    fn backend(&self) -> PageBackend {
        PageBackend::Memory
    }

    fn current_path(&self) -> Option<String> {
        Some(self.path.clone())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        for root in &self.roots {
            if let Some(found) = find_by_id(root, id) {
                return Some(MemoryElement(found));
            }
        }
        None
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        let mut elements = Vec::new();
        for root in &self.roots {
            collect_by_class(root, class, &mut elements);
        }
        elements
    }
}

fn find_by_id(node: &Rc<RefCell<ElementData>>, id: &str) -> Option<Rc<RefCell<ElementData>>> {
    let data = node.borrow();
    if data.id.as_deref() == Some(id) {
        return Some(Rc::clone(node));
    }
    for child in &data.children {
        if let Some(found) = find_by_id(child, id) {
            return Some(found);
        }
    }
    None
}

fn find_by_class(node: &Rc<RefCell<ElementData>>, class: &str) -> Option<Rc<RefCell<ElementData>>> {
    let data = node.borrow();
    if data.classes.iter().any(|c| c == class) {
        return Some(Rc::clone(node));
    }
    for child in &data.children {
        if let Some(found) = find_by_class(child, class) {
            return Some(found);
        }
    }
    None
}

fn collect_by_class(
    node: &Rc<RefCell<ElementData>>,
    class: &str,
    elements: &mut Vec<MemoryElement>,
) {
    let data = node.borrow();
    if data.classes.iter().any(|c| c == class) {
        elements.push(MemoryElement(Rc::clone(node)));
    }
    for child in &data.children {
        collect_by_class(child, class, elements);
    }
}

fn render_html(node: &Rc<RefCell<ElementData>>, out: &mut String) {
    let data = node.borrow();
    out.push('<');
    out.push_str(&data.tag);
    if let Some(id) = &data.id {
        out.push_str(&format!(" id=\"{}\"", id));
    }
    if !data.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", data.classes.join(" ")));
    }
    let mut attributes: Vec<_> = data.attributes.iter().collect();
    attributes.sort();
    for (name, value) in attributes {
        out.push_str(&format!(" {}=\"{}\"", name, value));
    }
    if !data.styles.is_empty() {
        let mut styles: Vec<_> = data.styles.iter().collect();
        styles.sort();
        let style_text: Vec<String> = styles
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect();
        out.push_str(&format!(" style=\"{}\"", style_text.join(" ")));
    }
    if data.disabled {
        out.push_str(" disabled");
    }
    out.push('>');
    for child in &data.children {
        render_html(child, out);
    }
    out.push_str(&format!("</{}>", data.tag));
}
