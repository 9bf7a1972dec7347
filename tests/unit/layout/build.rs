use super::*;
use crate::layout::NodeKind;
use crate::palette::{DARK, LIGHT, Theme};

fn request(theme: Theme) -> PagePreviewRequest {
    PagePreviewRequest::new("Hello World", "My first post", "Blog", theme)
}

fn texts(node: &LayoutNode) -> Vec<String> {
    let mut out = Vec::new();
    node.walk(&mut |n| {
        if let NodeKind::Text(t) = &n.kind {
            out.push(t.content.clone());
        }
    });
    out
}

#[test]
fn four_regions_top_to_bottom() {
    let root = build_layout(&request(Theme::Light), &LIGHT, &Branding::default());
    assert_eq!(root.style.direction, Direction::Column);
    assert_eq!(root.children().len(), 4);
    assert_eq!(
        texts(&root),
        vec![
            "BLOG",
            "Hello World",
            "My first post",
            "Max Bytefield",
            "maxbytefield.dev"
        ]
    );
}

#[test]
fn root_is_fixed_canvas_with_base_background() {
    let root = build_layout(&request(Theme::Dark), &DARK, &Branding::default());
    assert_eq!(root.style.width, Some(1200.0));
    assert_eq!(root.style.height, Some(630.0));
    assert_eq!(root.style.background, Some(Fill::Solid(DARK.base)));
}

#[test]
fn badge_gradient_blends_both_accents_translucently() {
    let root = build_layout(&request(Theme::Light), &LIGHT, &Branding::default());
    let badge = &root.children()[0].children()[0];
    assert_eq!(
        badge.style.background,
        Some(Fill::HorizontalGradient {
            from: LIGHT.blue.with_alpha(ACCENT_ALPHA),
            to: LIGHT.mauve.with_alpha(ACCENT_ALPHA),
        })
    );
    assert_eq!(badge.style.border.unwrap().widths, Edges::all(2.0));
}

#[test]
fn every_color_comes_from_the_selected_palette() {
    for (theme, palette) in [(Theme::Light, &LIGHT), (Theme::Dark, &DARK)] {
        let root = build_layout(&request(theme), palette, &Branding::default());
        root.walk(&mut |n| {
            if let NodeKind::Text(t) = &n.kind {
                assert!(palette.contains_rgb(t.color));
            }
            if let Some(b) = n.style.border {
                assert!(palette.contains_rgb(b.color));
            }
            match n.style.background {
                Some(Fill::Solid(c)) => assert!(palette.contains_rgb(c)),
                Some(Fill::HorizontalGradient { from, to }) => {
                    assert!(palette.contains_rgb(from));
                    assert!(palette.contains_rgb(to));
                }
                None => {}
            }
        });
    }
}

#[test]
fn text_limits_and_auto_margin() {
    let root = build_layout(&request(Theme::Light), &LIGHT, &Branding::default());
    let title = &root.children()[1];
    let description = &root.children()[2];
    assert_eq!(title.style.max_width, Some(TITLE_MAX_WIDTH));
    assert_eq!(description.style.max_width, Some(DESCRIPTION_MAX_WIDTH));
    assert_eq!(description.style.margin.bottom, Spacing::Auto);
}

#[test]
fn whitespace_collapses_and_category_is_uppercased() {
    let req = PagePreviewRequest::new("  a\n\n b\t c ", "d", "rust tips", Theme::Light);
    let root = build_layout(&req, &LIGHT, &Branding::default());
    let t = texts(&root);
    assert_eq!(t[0], "RUST TIPS");
    assert_eq!(t[1], "a b c");
}

#[test]
fn only_ascii_whitespace_collapses() {
    assert_eq!(collapse_whitespace("Hello\u{a0}World"), "Hello\u{a0}World");
    assert_eq!(collapse_whitespace("a\u{c}\r\n b"), "a b");
    assert_eq!(collapse_whitespace(" \u{a0} "), "\u{a0}");
    assert_eq!(collapse_whitespace("\t\n "), "");

    let req = PagePreviewRequest::new("10\u{a0}km  run", "d", "c", Theme::Light);
    let root = build_layout(&req, &LIGHT, &Branding::default());
    assert_eq!(texts(&root)[1], "10\u{a0}km run");
}

#[test]
fn long_strings_are_kept_whole() {
    let long = "x".repeat(300);
    let req = PagePreviewRequest::new(long.clone(), "d", "c", Theme::Light);
    let root = build_layout(&req, &LIGHT, &Branding::default());
    assert_eq!(texts(&root)[1], long);
}
