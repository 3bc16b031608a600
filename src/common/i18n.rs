// src/common/i18n.rs

use std::collections::HashMap;

const DEFAULT_LANG: &str = "en";

const EN: &[(&str, &str)] = &[
    ("error.product_not_found", "Product {id} does not exist."),
    ("error.location_not_found", "Location {id} does not exist."),
    ("error.duplicate_barcode", "Barcode {barcode} is already in use."),
    ("error.insufficient_stock", "Insufficient stock! Current stock: {available} {unit}."),
    (
        "error.product_referenced",
        "Product {id} has stock or transaction records and cannot be deleted.",
    ),
    (
        "error.location_referenced",
        "Location {id} has stock or transaction records and cannot be deleted.",
    ),
    ("error.invalid_input", "Invalid input: {detail}"),
    ("error.validation", "One or more fields are invalid. {detail}"),
    ("error.internal", "An unexpected error occurred."),
    ("product.created", "Product {id} created."),
    ("product.updated", "Product {id} updated."),
    ("product.deleted", "Product {id} deleted."),
    ("location.created", "Location {id} created."),
    ("location.updated", "Location {id} updated."),
    ("location.deleted", "Location {id} deleted."),
    (
        "inbound.done",
        "Inbound complete! {product} at {location} increased by {quantity} {unit} ({before} -> {after}).",
    ),
    (
        "outbound.done",
        "Outbound complete! {product} from {location} decreased by {quantity} {unit} ({before} -> {after}).",
    ),
    (
        "stockcount.done",
        "Stock count complete! {product} at {location}: system {system}, actual {actual}, difference {difference}.",
    ),
];

const ZH: &[(&str, &str)] = &[
    ("error.product_not_found", "商品 {id} 不存在！"),
    ("error.location_not_found", "儲位 {id} 不存在！"),
    ("error.duplicate_barcode", "條碼 {barcode} 已存在！"),
    ("error.insufficient_stock", "庫存不足！目前庫存：{available} {unit}"),
    ("error.product_referenced", "商品 {id} 已有庫存或交易記錄，無法刪除！"),
    ("error.location_referenced", "儲位 {id} 已有庫存或交易記錄，無法刪除！"),
    ("error.invalid_input", "輸入無效：{detail}"),
    ("error.validation", "欄位驗證失敗。{detail}"),
    ("error.internal", "發生未預期的錯誤。"),
    ("product.created", "商品 {id} 新增成功！"),
    ("product.updated", "商品 {id} 更新成功！"),
    ("product.deleted", "商品 {id} 刪除成功！"),
    ("location.created", "儲位 {id} 新增成功！"),
    ("location.updated", "儲位 {id} 更新成功！"),
    ("location.deleted", "儲位 {id} 刪除成功！"),
    ("inbound.done", "入庫成功！{product} 在 {location} 增加 {quantity} {unit}（{before} -> {after}）"),
    ("outbound.done", "出庫成功！{product} 從 {location} 減少 {quantity} {unit}（{before} -> {after}）"),
    (
        "stockcount.done",
        "盤點完成！{product} 在 {location}：系統數量 {system}，實際數量 {actual}，差異 {difference}",
    ),
];

/// Message templates per language. Placeholders are written `{name}`.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs = HashMap::new();
        catalogs.insert("en", EN.iter().copied().collect());
        catalogs.insert("zh", ZH.iter().copied().collect());
        Self { catalogs }
    }

    /// Looks the key up in `lang`, then in English, then gives the key back.
    pub fn translate(&self, lang: &str, key: &str, args: &[(&str, String)]) -> String {
        let template = self
            .catalogs
            .get(lang)
            .and_then(|c| c.get(key))
            .or_else(|| self.catalogs.get(DEFAULT_LANG).and_then(|c| c.get(key)))
            .copied()
            .unwrap_or(key);

        args.iter().fold(template.to_string(), |msg, (name, value)| {
            msg.replace(&format!("{{{name}}}"), value)
        })
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_english_key_has_a_chinese_translation() {
        let store = I18nStore::new();
        for (key, _) in EN {
            assert!(store.catalogs["zh"].contains_key(key), "missing zh for {key}");
        }
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let store = I18nStore::new();
        let msg = store.translate("pt", "product.created", &[("id", "P004".into())]);
        assert_eq!(msg, "Product P004 created.");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(I18nStore::new().translate("en", "no.such.key", &[]), "no.such.key");
    }
}
