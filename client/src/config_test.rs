use super::*;

#[test]
fn normalize_base_url_defaults_when_unset() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_defaults_when_blank() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.test//")), "https://api.example.test");
}

#[test]
fn normalize_base_url_keeps_path_prefix() {
    assert_eq!(normalize_base_url(Some(" http://10.0.0.5:4000/v1 ")), "http://10.0.0.5:4000/v1");
}
