//! SVG import and export for designer state.

use std::path::Path;

use gemcad_core::{Error, Result};

use super::DesignerState;
use crate::import::{ImportSummary, SvgImporter};
use crate::svg_renderer::{export_layer, export_svg};

impl DesignerState {
    /// Imports SVG content into the active layer as one undo step.
    pub fn import_svg(&mut self, content: &str) -> Result<ImportSummary> {
        let layer = self.scene.active_layer_name().to_string();
        self.import_svg_into(&layer, content)
    }

    pub fn import_svg_into(&mut self, layer: &str, content: &str) -> Result<ImportSummary> {
        let summary = SvgImporter::new().import_into(&mut self.scene, layer, content)?;
        if summary.imported > 0 {
            self.is_modified = true;
        }
        Ok(summary)
    }

    pub fn import_svg_file(&mut self, path: impl AsRef<Path>) -> Result<ImportSummary> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Importing SVG from {}", path.display());
        self.import_svg(&content)
    }

    /// The active layer as an SVG document.
    pub fn export_svg(&self) -> String {
        export_svg(&self.scene)
    }

    pub fn export_layer(&self, layer: &str) -> Result<String> {
        Ok(export_layer(&self.scene, layer)?)
    }

    pub fn export_svg_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.export_svg()).map_err(|e| {
            Error::other(format!("Failed to write {}: {}", path.display(), e))
        })?;
        tracing::info!(
            "Exported layer '{}' to {}",
            self.scene.active_layer_name(),
            path.display()
        );
        Ok(())
    }
}
