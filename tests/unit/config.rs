use super::*;

#[test]
fn empty_object_takes_site_defaults() {
    let cfg = SiteConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.fonts.family, "NotoSans");
    assert_eq!(cfg.home_category, "Portfolio");
    assert_eq!(cfg.branding(), Branding::default());
}

#[test]
fn partial_sections_merge_with_defaults() {
    let json = r#"{
        "site": { "domain": "example.org" },
        "content": [
            { "id": "first.md", "title": "First", "description": "One" },
            { "id": "second.md", "title": "Second", "description": "Two", "category": "Rust" }
        ]
    }"#;
    let cfg = SiteConfig::from_reader(json.as_bytes()).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.site.title, "Max Bytefield");
    assert_eq!(cfg.branding().domain, "example.org");
    assert_eq!(cfg.content.len(), 2);
    assert_eq!(cfg.content[0].category, None);
}

#[test]
fn routes_apply_default_category_and_home_metadata() {
    let mut cfg = SiteConfig {
        default_category: "Notes".to_owned(),
        ..SiteConfig::default()
    };
    cfg.content.push(ContentItem {
        id: "a.md".to_owned(),
        title: "A".to_owned(),
        description: "a".to_owned(),
        category: None,
    });
    let routes = cfg.routes();
    assert_eq!(routes.len(), 4);
    assert_eq!(routes[0].route, "blog/a");
    assert_eq!(routes[0].request.category, "Notes");
    assert_eq!(routes[1].route, "home");
    assert_eq!(routes[1].request.title, cfg.site.title);
    assert_eq!(routes[1].request.category, "Portfolio");
    assert_eq!(routes[3].route, "blog/a/dark");
}

#[test]
fn blank_category_falls_back_to_default() {
    let json = r#"{
        "content": [
            { "id": "a.md", "title": "A", "description": "a", "category": "" },
            { "id": "b.md", "title": "B", "description": "b", "category": "  " },
            { "id": "c.md", "title": "C", "description": "c", "category": "Rust" }
        ]
    }"#;
    let cfg = SiteConfig::from_reader(json.as_bytes()).unwrap();
    let routes = cfg.routes();
    let categories: Vec<&str> = routes.iter().map(|r| r.request.category.as_str()).collect();
    assert_eq!(
        categories,
        ["Blog", "Blog", "Rust", "Portfolio", "Portfolio", "Blog", "Blog", "Rust"]
    );
}

#[test]
fn empty_author_falls_back_to_title() {
    let mut cfg = SiteConfig::default();
    cfg.site.author.clear();
    cfg.site.title = "Someone".to_owned();
    assert_eq!(cfg.branding().name, "Someone");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SiteConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, OgError::Serde(_)));
}

#[test]
fn bad_ids_and_empty_family_fail_validation() {
    let mut cfg = SiteConfig::default();
    cfg.content.push(ContentItem {
        id: "../escape.md".to_owned(),
        title: "t".to_owned(),
        description: "d".to_owned(),
        category: None,
    });
    assert!(cfg.validate().unwrap_err().is_config());

    cfg.content[0].id = ".md".to_owned();
    assert!(cfg.validate().unwrap_err().is_config());

    let cfg = SiteConfig {
        fonts: FontConfig {
            family: " ".to_owned(),
            ..FontConfig::default()
        },
        ..SiteConfig::default()
    };
    assert!(cfg.validate().unwrap_err().is_config());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = SiteConfig::load("/definitely/not/here/site.json").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn relative_font_dir_resolves_next_to_config() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("site.json");
    let cfg = SiteConfig::load(&path).unwrap();
    assert_eq!(cfg.fonts.dir, path.parent().unwrap().join("fonts"));
    cfg.load_fonts().unwrap();
}
