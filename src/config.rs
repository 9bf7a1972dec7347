use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::fonts::FontAsset;
use crate::foundation::error::{OgError, OgResult};
use crate::model::Branding;
use crate::routes::{ContentItem, HomeEntry, PreviewRoute, RouteTable, enumerate_routes};

/// Site-wide metadata shown on the home cards and in the footer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Home card title.
    pub title: String,
    /// Home card description.
    pub description: String,
    /// Footer name; falls back to `title` when empty.
    pub author: String,
    /// Footer domain.
    pub domain: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Max Bytefield".to_owned(),
            description: "Full-stack developer, coffee enthusiast, and occasional debugger of \
                          life's mysteries"
                .to_owned(),
            author: "Max Bytefield".to_owned(),
            domain: "maxbytefield.dev".to_owned(),
        }
    }
}

/// Where the two font faces live.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory holding `<family>-Regular.ttf` and `<family>-Bold.ttf`.
    pub dir: PathBuf,
    /// File stem shared by both faces.
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/fonts"),
            family: "NotoSans".to_owned(),
        }
    }
}

/// JSON site description driving `build`, `routes` and `serve`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Home card and footer metadata.
    pub site: SiteMeta,
    /// Font location.
    pub fonts: FontConfig,
    /// Badge label of the home cards.
    pub home_category: String,
    /// Badge label for content without a category.
    pub default_category: String,
    /// Content items in source order.
    pub content: Vec<ContentItem>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            fonts: FontConfig::default(),
            home_category: "Portfolio".to_owned(),
            default_category: crate::routes::DEFAULT_CATEGORY.to_owned(),
            content: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a site config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OgResult<Self> {
        serde_json::from_reader(r).map_err(|e| OgError::serde(format!("parse site config: {e}")))
    }

    /// Parse and validate a site config from disk.
    ///
    /// A relative `fonts.dir` is resolved against the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> OgResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OgError::config(format!("open site config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if cfg.fonts.dir.is_relative()
            && let Some(parent) = path.parent()
        {
            cfg.fonts.dir = parent.join(&cfg.fonts.dir);
        }
        cfg.validate()?;
        tracing::debug!(
            path = %path.display(),
            items = cfg.content.len(),
            "loaded site config"
        );
        Ok(cfg)
    }

    /// Reject configs that could never render.
    pub fn validate(&self) -> OgResult<()> {
        if self.fonts.family.trim().is_empty() {
            return Err(OgError::config("fonts.family must not be empty"));
        }
        if self.default_category.trim().is_empty() {
            return Err(OgError::config("default_category must not be empty"));
        }
        for (i, item) in self.content.iter().enumerate() {
            let slug = item.id.strip_suffix(".md").unwrap_or(&item.id);
            if slug.trim().is_empty() {
                return Err(OgError::config(format!("content[{i}] has an empty id")));
            }
            if slug.starts_with('/') || slug.ends_with('/') || slug.contains("..") {
                return Err(OgError::config(format!(
                    "content[{i}] id '{}' is not a relative slug",
                    item.id
                )));
            }
        }
        Ok(())
    }

    /// Footer labels.
    pub fn branding(&self) -> Branding {
        let name = if self.site.author.trim().is_empty() {
            self.site.title.clone()
        } else {
            self.site.author.clone()
        };
        Branding {
            name,
            domain: self.site.domain.clone(),
        }
    }

    /// Metadata for the home cards.
    pub fn home(&self) -> HomeEntry {
        HomeEntry {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            category: self.home_category.clone(),
        }
    }

    /// Every preview route in enumeration order.
    pub fn routes(&self) -> Vec<PreviewRoute> {
        let items: Vec<ContentItem> = self
            .content
            .iter()
            .map(|item| ContentItem {
                category: Some(
                    item.declared_category()
                        .unwrap_or(&self.default_category)
                        .to_owned(),
                ),
                ..item.clone()
            })
            .collect();
        enumerate_routes(&items, &self.home())
    }

    /// Routes indexed for lookup; duplicate routes are a config error.
    pub fn route_table(&self) -> OgResult<RouteTable> {
        RouteTable::new(self.routes())
    }

    /// Load the configured regular + bold faces.
    pub fn load_fonts(&self) -> OgResult<FontAsset> {
        FontAsset::load(&self.fonts.dir, &self.fonts.family)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
