use super::*;
use crate::assets::fonts::FontAsset;
use crate::layout::build::{TITLE_MAX_WIDTH, build_layout};
use crate::model::{Branding, PagePreviewRequest};
use crate::palette::{LIGHT, Theme};

fn engine() -> TextLayoutEngine {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts");
    let fonts = FontAsset::load(dir, "DejaVuSans").unwrap();
    TextLayoutEngine::new(&fonts).unwrap()
}

fn card(title: &str) -> LayoutNode {
    let req = PagePreviewRequest::new(title, "My first post", "Blog", Theme::Light);
    build_layout(&req, &LIGHT, &Branding::default())
}

#[test]
fn root_fills_the_canvas() {
    let root = card("Hello World");
    let placed = solve_layout(&root, Canvas::OG, &mut engine()).unwrap();
    assert_eq!(placed.rect.x, 0.0);
    assert_eq!(placed.rect.y, 0.0);
    assert_eq!(placed.rect.w, 1200.0);
    assert_eq!(placed.rect.h, 630.0);
    assert_eq!(placed.children.len(), 4);
}

#[test]
fn regions_are_stacked_inside_padding() {
    let root = card("Hello World");
    let placed = solve_layout(&root, Canvas::OG, &mut engine()).unwrap();
    let header = &placed.children[0];
    let title = &placed.children[1];
    let description = &placed.children[2];
    let footer = &placed.children[3];

    assert_eq!(header.rect.x, 96.0);
    assert_eq!(header.rect.y, 64.0);
    assert!(title.rect.y >= header.rect.y + header.rect.h + 36.0 - 0.01);
    assert!(description.rect.y >= title.rect.y + title.rect.h + 28.0 - 0.01);
    // `margin-bottom: auto` on the description pushes the footer to the bottom padding edge.
    let footer_bottom = footer.rect.y + footer.rect.h;
    assert!((footer_bottom - (630.0 - 64.0)).abs() < 0.01);
}

#[test]
fn title_never_exceeds_its_max_width() {
    let root = card(&"word ".repeat(80));
    let placed = solve_layout(&root, Canvas::OG, &mut engine()).unwrap();
    let title = &placed.children[1];
    assert!(title.rect.w <= TITLE_MAX_WIDTH + 0.01);
    let block = title.text.as_ref().unwrap();
    assert!(block.lines.len() > 2);
}

#[test]
fn overflowing_content_keeps_the_root_size() {
    let root = card(&"x".repeat(300));
    let placed = solve_layout(&root, Canvas::OG, &mut engine()).unwrap();
    assert_eq!(placed.rect.h, 630.0);
    let title = &placed.children[1];
    assert!(!title.text.as_ref().unwrap().lines.is_empty());
}

#[test]
fn footer_labels_sit_at_opposite_ends() {
    let root = card("Hello World");
    let placed = solve_layout(&root, Canvas::OG, &mut engine()).unwrap();
    let footer = &placed.children[3];
    let left = &footer.children[0];
    let right = &footer.children[1];
    assert!((left.rect.x - 96.0).abs() < 0.01);
    assert!((right.rect.x + right.rect.w - (1200.0 - 96.0)).abs() < 0.01);
    assert!(left.rect.y > footer.rect.y + 36.0);
}

#[test]
fn negative_padding_is_a_layout_error() {
    let bad = LayoutNode::container(
        BoxStyle {
            padding: Edges::all(-1.0),
            ..BoxStyle::default()
        },
        vec![],
    );
    let err = solve_layout(&bad, Canvas::OG, &mut engine()).unwrap_err();
    assert!(matches!(err, OgError::Layout(_)));
}

#[test]
fn text_errors_from_measurement_propagate() {
    let mut root = card("Hello World");
    if let NodeKind::Container(children) = &mut root.kind
        && let NodeKind::Text(spec) = &mut children[1].kind
    {
        spec.style.size_px = f32::NAN;
    }
    let err = solve_layout(&root, Canvas::OG, &mut engine()).unwrap_err();
    assert!(matches!(err, OgError::Layout(_)));
}
