//! Layer panel operations for designer state.

use gemcad_core::SceneError;

use super::DesignerState;

impl DesignerState {
    /// Adds a layer and returns its name. The active layer does not change.
    pub fn add_layer(&mut self, name: Option<&str>) -> Result<String, SceneError> {
        let name = self.scene.add_layer(name)?;
        self.is_modified = true;
        Ok(name)
    }

    /// Deletes a layer. The `"Base"` layer is protected.
    pub fn delete_layer(&mut self, name: &str) -> Result<(), SceneError> {
        let was_active = self.scene.active_layer_name() == name;
        self.scene.delete_layer(name)?;
        if was_active {
            self.controller.cancel(&mut self.scene);
            self.selection.clear();
        }
        self.is_modified = true;
        Ok(())
    }

    pub fn rename_layer(&mut self, name: &str, new_name: &str) -> Result<(), SceneError> {
        self.scene.rename_layer(name, new_name)?;
        self.is_modified = true;
        Ok(())
    }

    /// Switches the active layer. Any gesture in progress is abandoned and the
    /// selection is cleared, since selection indices belong to one layer.
    pub fn set_active_layer(&mut self, name: &str) -> Result<(), SceneError> {
        if !self.scene.has_layer(name) {
            return Err(SceneError::UnknownLayer {
                name: name.to_string(),
            });
        }
        self.controller.cancel(&mut self.scene);
        self.scene.set_active_layer(name)?;
        self.selection.clear();
        Ok(())
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.scene.layer_names()
    }

    pub fn active_layer_name(&self) -> &str {
        self.scene.active_layer_name()
    }
}
