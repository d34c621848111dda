// Small browser helpers shared by components.
use wasm_bindgen::JsValue;

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Locale date for a gallery card.
pub fn format_created_at(ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
}

pub fn object_count_label(n: usize) -> String {
    if n == 1 { "1 object".to_string() } else { format!("{} objects", n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_count_is_pluralised() {
        assert_eq!(object_count_label(0), "0 objects");
        assert_eq!(object_count_label(1), "1 object");
        assert_eq!(object_count_label(12), "12 objects");
    }
}
