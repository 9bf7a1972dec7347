use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::foundation::error::{OgError, OgResult};

/// The two weights a preview card uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// 400.
    Regular,
    /// 700.
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// Regular + bold faces of a single family, loaded once and shared by every render.
///
/// Cloning is cheap; the blobs and the SVG font database are reference counted.
#[derive(Clone)]
pub struct FontAsset {
    family: String,
    regular: Arc<Vec<u8>>,
    bold: Arc<Vec<u8>>,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("family", &self.family)
            .field("regular_len", &self.regular.len())
            .field("bold_len", &self.bold.len())
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

/// `<dir>/<stem>-Regular.ttf` and `<dir>/<stem>-Bold.ttf`.
pub fn font_paths(dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{stem}-Regular.ttf")),
        dir.join(format!("{stem}-Bold.ttf")),
    )
}

impl FontAsset {
    /// Load `<stem>-Regular.ttf` and `<stem>-Bold.ttf` from `dir`.
    pub fn load(dir: impl AsRef<Path>, stem: &str) -> OgResult<Self> {
        let (regular, bold) = font_paths(dir.as_ref(), stem);
        Self::load_files(&regular, &bold)
    }

    /// Load an explicit regular/bold file pair.
    pub fn load_files(regular: &Path, bold: &Path) -> OgResult<Self> {
        let regular_bytes = read_font(regular)?;
        let bold_bytes = read_font(bold)?;
        Self::from_bytes(regular_bytes, bold_bytes)
    }

    /// Build from in-memory font files.
    pub fn from_bytes(regular: Vec<u8>, bold: Vec<u8>) -> OgResult<Self> {
        let mut db = usvg::fontdb::Database::new();

        db.load_font_data(regular.clone());
        let family = db
            .faces()
            .next()
            .and_then(|f| f.families.first())
            .map(|(name, _)| name.clone())
            .ok_or_else(|| OgError::config("regular font data is not a readable font"))?;

        let before = db.len();
        db.load_font_data(bold.clone());
        if db.len() == before {
            return Err(OgError::config("bold font data is not a readable font"));
        }

        let bold_family_matches = db
            .faces()
            .skip(before)
            .any(|f| f.families.iter().any(|(name, _)| *name == family));
        if !bold_family_matches {
            return Err(OgError::config(format!(
                "bold font does not belong to family '{family}'"
            )));
        }

        tracing::debug!(family = %family, faces = db.len(), "font asset prepared");

        Ok(Self {
            family,
            regular: Arc::new(regular),
            bold: Arc::new(bold),
            fontdb: Arc::new(db),
        })
    }

    /// Family name as declared by the regular face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font file bytes for a weight.
    pub fn bytes(&self, weight: FontWeight) -> &[u8] {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Font database holding exactly the two faces, for SVG text resolution.
    pub fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        Arc::clone(&self.fontdb)
    }
}

fn read_font(path: &Path) -> OgResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| OgError::config(format!("read font '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
