//! Which preview images a site needs, and how their URLs map back to requests.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::foundation::error::{OgError, OgResult};
use crate::model::PagePreviewRequest;
use crate::palette::Theme;

/// URL prefix preview images are served under.
pub const OG_PREFIX: &str = "/og/";
/// Route of the light home card.
pub const HOME_ROUTE: &str = "home";
/// Category used when a content item declares none.
pub const DEFAULT_CATEGORY: &str = "Blog";

/// One piece of site content that gets a preview card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentItem {
    /// Content id, usually the source file name (`hello-world.md`).
    pub id: String,
    /// Page title.
    pub title: String,
    /// Page summary.
    pub description: String,
    /// Badge label; [`DEFAULT_CATEGORY`] when absent or blank.
    #[serde(default)]
    pub category: Option<String>,
}

impl ContentItem {
    /// `blog/<id>` with a trailing `.md` removed.
    pub fn route(&self) -> String {
        let slug = self.id.strip_suffix(".md").unwrap_or(&self.id);
        format!("blog/{slug}")
    }

    /// The category, unless it is missing or only whitespace.
    pub fn declared_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Metadata for the two fixed home cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeEntry {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Badge label.
    pub category: String,
}

/// A resolved `(route, request)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRoute {
    /// Route key without prefix or extension (`blog/hello-world/dark`).
    pub route: String,
    /// Request rendered for this route.
    pub request: PagePreviewRequest,
}

impl PreviewRoute {
    /// Public URL path, `/og/<route>.png`.
    pub fn og_path(&self) -> String {
        og_path(&self.route)
    }
}

/// `/og/<route>.png`.
pub fn og_path(route: &str) -> String {
    format!("{OG_PREFIX}{route}.png")
}

/// Inverse of [`og_path`] for a raw request URL: query and fragment are dropped and the path is
/// percent-decoded. `None` when `path` is not a preview URL or does not decode to UTF-8.
pub fn route_from_og_path(path: &str) -> Option<String> {
    let raw = path.split(['?', '#']).next().unwrap_or(path);
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    decoded
        .strip_prefix(OG_PREFIX)?
        .strip_suffix(".png")
        .filter(|r| !r.is_empty())
        .map(str::to_owned)
}

fn themed_route(base: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => base.to_owned(),
        Theme::Dark => format!("{base}/dark"),
    }
}

/// Enumerate every preview card: light content cards, the two home cards, dark content cards.
pub fn enumerate_routes(items: &[ContentItem], home: &HomeEntry) -> Vec<PreviewRoute> {
    let item_route = |item: &ContentItem, theme: Theme| PreviewRoute {
        route: themed_route(&item.route(), theme),
        request: PagePreviewRequest::new(
            item.title.clone(),
            item.description.clone(),
            item.declared_category().unwrap_or(DEFAULT_CATEGORY),
            theme,
        ),
    };

    let mut out = Vec::with_capacity(items.len() * 2 + 2);
    out.extend(items.iter().map(|i| item_route(i, Theme::Light)));
    for theme in Theme::ALL {
        out.push(PreviewRoute {
            route: themed_route(HOME_ROUTE, theme),
            request: PagePreviewRequest::new(
                home.title.clone(),
                home.description.clone(),
                home.category.clone(),
                theme,
            ),
        });
    }
    out.extend(items.iter().map(|i| item_route(i, Theme::Dark)));
    out
}

/// Route lookup for serving `/og/<route>.png`.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, PreviewRoute>,
}

impl RouteTable {
    /// Index routes, rejecting duplicates.
    pub fn new(routes: Vec<PreviewRoute>) -> OgResult<Self> {
        let mut map = BTreeMap::new();
        for r in routes {
            let key = r.route.clone();
            if map.insert(key.clone(), r).is_some() {
                return Err(OgError::config(format!("duplicate preview route '{key}'")));
            }
        }
        Ok(Self { routes: map })
    }

    /// Look up a route key.
    pub fn get(&self, route: &str) -> Option<&PreviewRoute> {
        self.routes.get(route)
    }

    /// Resolve a full `/og/<route>.png` URL path.
    pub fn resolve_path(&self, path: &str) -> Option<&PreviewRoute> {
        route_from_og_path(path).and_then(|r| self.get(&r))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true` when no routes are indexed.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PreviewRoute> {
        self.routes.values()
    }
}

#[cfg(test)]
#[path = "../tests/unit/routes.rs"]
mod tests;
