//! Battlefield quad layout loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::{EnchantmentQuad, Vec2};

use crate::loaders::{LoadResult, read_file};

/// One quad as authored in data; the center is derived on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadRon {
    /// Top-left, top-right, bottom-right, bottom-left.
    pub corners: Vec<Vec2>,
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl QuadRon {
    fn into_quad(self) -> Option<EnchantmentQuad> {
        let [top_left, top_right, bottom_right, bottom_left] = self.corners[..] else {
            return None;
        };
        Some(
            EnchantmentQuad::new(top_left, top_right, bottom_right, bottom_left)
                .with_offset(self.offset)
                .with_scale(self.scale),
        )
    }
}

/// Battlefield structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattlefieldRon {
    pub quads: Vec<QuadRon>,
}

/// Loader for battlefield quad layouts.
pub struct BattlefieldLoader;

impl BattlefieldLoader {
    /// Load a quad layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EnchantmentQuad>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Parse a quad layout. Non-finite corners are rejected here so the
    /// controller never receives a quad that cannot be hit-tested.
    pub fn parse(content: &str) -> LoadResult<Vec<EnchantmentQuad>> {
        let battlefield: BattlefieldRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battlefield RON: {}", e))?;

        let mut quads = Vec::with_capacity(battlefield.quads.len());
        for (index, authored) in battlefield.quads.into_iter().enumerate() {
            let corners = authored.corners.len();
            let Some(quad) = authored.into_quad() else {
                anyhow::bail!("Battlefield quad {} has {} corners, expected 4", index, corners);
            };
            if !quad.is_valid() {
                anyhow::bail!("Battlefield quad {} has non-finite corners", index);
            }
            quads.push(quad);
        }

        tracing::debug!(count = quads.len(), "loaded battlefield quads");
        Ok(quads)
    }
}
