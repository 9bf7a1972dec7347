use super::*;

fn fonts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts")
}

#[test]
fn font_paths_follow_family_stem_convention() {
    let (r, b) = font_paths(Path::new("public/fonts"), "NotoSans");
    assert_eq!(r, Path::new("public/fonts/NotoSans-Regular.ttf"));
    assert_eq!(b, Path::new("public/fonts/NotoSans-Bold.ttf"));
}

#[test]
fn loads_vendored_pair_and_detects_family() {
    let fonts = FontAsset::load(fonts_dir(), "DejaVuSans").unwrap();
    assert_eq!(fonts.family(), "DejaVu Sans");
    assert_eq!(fonts.fontdb().len(), 2);
    assert_ne!(fonts.bytes(FontWeight::Regular), fonts.bytes(FontWeight::Bold));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = FontAsset::load(fonts_dir(), "DoesNotExist").unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("DoesNotExist-Regular.ttf"));
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = FontAsset::from_bytes(b"not a font".to_vec(), b"nope".to_vec()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn css_weights() {
    assert_eq!(FontWeight::Regular.css_weight(), 400);
    assert_eq!(FontWeight::Bold.css_weight(), 700);
}
