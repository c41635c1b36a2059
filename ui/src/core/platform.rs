//! Platform glue: environment language and the page origin.

/// The environment's preferred language as a BCP-47-like tag (`pl-PL`).
#[cfg(target_arch = "wasm32")]
pub fn environment_language() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .filter(|tag| !tag.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn environment_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| normalize_posix_locale(&value))
}

/// `uk_UA.UTF-8@euro` → `uk-UA`. The `C`/`POSIX` locales name no language.
pub fn normalize_posix_locale(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next().unwrap_or_default().trim();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Origin of the page serving the site; the contact form posts back here.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Point the document's `lang` attribute at `code`.
#[cfg(target_arch = "wasm32")]
pub fn set_document_language(code: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        if let Err(err) = root.set_attribute("lang", code) {
            tracing::debug!(error = ?err, code, "document lang not updated");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_language(_code: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_locales_normalize_to_language_tags() {
        assert_eq!(normalize_posix_locale("uk_UA.UTF-8").as_deref(), Some("uk-UA"));
        assert_eq!(normalize_posix_locale("pl_PL@euro").as_deref(), Some("pl-PL"));
        assert_eq!(normalize_posix_locale("en").as_deref(), Some("en"));
        assert_eq!(normalize_posix_locale("C.UTF-8"), None);
        assert_eq!(normalize_posix_locale("POSIX"), None);
        assert_eq!(normalize_posix_locale(""), None);
    }
}
