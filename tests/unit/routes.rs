use super::*;

fn home() -> HomeEntry {
    HomeEntry {
        title: "Max Bytefield".to_owned(),
        description: "Full-stack developer".to_owned(),
        category: "Portfolio".to_owned(),
    }
}

fn item(id: &str, category: Option<&str>) -> ContentItem {
    ContentItem {
        id: id.to_owned(),
        title: format!("Title of {id}"),
        description: "desc".to_owned(),
        category: category.map(str::to_owned),
    }
}

#[test]
fn no_content_still_yields_both_home_cards() {
    let routes = enumerate_routes(&[], &home());
    let keys: Vec<&str> = routes.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(keys, ["home", "home/dark"]);
    assert_eq!(routes[0].request.theme, Theme::Light);
    assert_eq!(routes[1].request.theme, Theme::Dark);
    assert_eq!(routes[1].request.category, "Portfolio");
}

#[test]
fn two_cards_per_item_plus_home_in_source_order() {
    let items = [item("hello-world.md", None), item("rust-tips.md", Some("Rust"))];
    let routes = enumerate_routes(&items, &home());
    let keys: Vec<&str> = routes.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(
        keys,
        [
            "blog/hello-world",
            "blog/rust-tips",
            "home",
            "home/dark",
            "blog/hello-world/dark",
            "blog/rust-tips/dark",
        ]
    );
    assert_eq!(routes.len(), items.len() * 2 + 2);
    assert_eq!(routes.iter().filter(|r| r.route == "home").count(), 1);
    assert_eq!(routes.iter().filter(|r| r.route == "home/dark").count(), 1);
}

#[test]
fn missing_category_defaults_to_blog() {
    let routes = enumerate_routes(&[item("a.md", None), item("b.md", Some("Rust"))], &home());
    assert_eq!(routes[0].request.category, "Blog");
    assert_eq!(routes[1].request.category, "Rust");

    let routes = enumerate_routes(&[item("e.md", Some("")), item("w.md", Some(" \t"))], &home());
    assert_eq!(routes[0].request.category, "Blog");
    assert_eq!(routes[1].request.category, "Blog");
}

#[test]
fn percent_encoded_paths_resolve_to_decoded_routes() {
    let table = RouteTable::new(enumerate_routes(&[item("café.md", None)], &home())).unwrap();
    let r = table.resolve_path("/og/blog/caf%C3%A9.png").unwrap();
    assert_eq!(r.route, "blog/café");
    assert_eq!(
        route_from_og_path("/og/blog/a%20b/dark.png?x=%FF").as_deref(),
        Some("blog/a b/dark")
    );
    assert_eq!(route_from_og_path("/og/blog/caf%C3.png"), None);
}

#[test]
fn only_a_trailing_md_suffix_is_stripped() {
    assert_eq!(item("notes.md", None).route(), "blog/notes");
    assert_eq!(item("a.md.backup", None).route(), "blog/a.md.backup");
    assert_eq!(item("plain", None).route(), "blog/plain");
}

#[test]
fn og_paths_round_trip_through_the_table() {
    let table = RouteTable::new(enumerate_routes(&[item("x.md", None)], &home())).unwrap();
    assert_eq!(table.len(), 4);
    let r = table.resolve_path("/og/blog/x/dark.png").unwrap();
    assert_eq!(r.request.theme, Theme::Dark);
    assert_eq!(r.og_path(), "/og/blog/x/dark.png");
    assert!(table.resolve_path("/og/home.png?v=2").is_some());
    assert!(table.resolve_path("/og/nope.png").is_none());
    assert!(table.resolve_path("/og/.png").is_none());
    assert!(table.resolve_path("/blog/x").is_none());
}

#[test]
fn duplicate_routes_are_a_config_error() {
    let routes = enumerate_routes(&[item("x.md", None), item("x", None)], &home());
    let err = RouteTable::new(routes).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("blog/x"));
}
