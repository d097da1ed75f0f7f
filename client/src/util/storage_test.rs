use super::*;

#[test]
fn non_blank_drops_empty_and_whitespace_tokens() {
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some(String::new())), None);
    assert_eq!(non_blank(Some("  ".to_owned())), None);
    assert_eq!(non_blank(Some("tok".to_owned())), Some("tok".to_owned()));
}

#[test]
fn browser_store_uses_bricks_token_key() {
    let store = BrowserTokenStore::new(crate::config::TOKEN_STORAGE_KEY);
    assert_eq!(store, BrowserTokenStore::new("bricks_token"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_noop_off_browser() {
    let store = BrowserTokenStore::new("k");
    store.save("tok");
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
}
