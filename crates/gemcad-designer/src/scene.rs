//! Layered scene model.
//!
//! A [`Scene`] is an ordered list of named [`Layer`]s plus a pointer to the
//! active one. Each layer owns its element list through its own [`History`],
//! so undo on one layer never touches another. The `"Base"` layer always
//! exists and cannot be deleted or renamed.

use std::ops::Range;

use gemcad_core::constants::{BASE_LAYER_NAME, DEFAULT_HISTORY_DEPTH, LAYER_NAME_PREFIX};
use gemcad_core::SceneError;

use crate::history::History;
use crate::model::Element;

/// A named, ordered bucket of elements. Later elements paint on top.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    history: History<Vec<Element>>,
}

impl Layer {
    fn new(name: String, history_depth: usize) -> Self {
        Self {
            name,
            history: History::new(Vec::new(), history_depth),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        self.history.current()
    }

    pub fn len(&self) -> usize {
        self.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    pub fn history(&self) -> &History<Vec<Element>> {
        &self.history
    }

    pub fn is_protected(&self) -> bool {
        self.name == BASE_LAYER_NAME
    }

    fn commit(&mut self, elements: Vec<Element>) {
        self.history.commit(elements);
    }

    fn commit_separate(&mut self, elements: Vec<Element>) {
        self.history.commit_separate(elements);
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SceneError::ElementIndexOutOfRange {
                layer: self.name.clone(),
                index,
                len: self.len(),
            })
        }
    }
}

/// The editable document: layers in creation order and the active layer.
#[derive(Debug, Clone)]
pub struct Scene {
    layers: Vec<Layer>,
    active: usize,
    history_depth: usize,
}

impl Scene {
    /// Creates a scene containing only the `"Base"` layer.
    pub fn new() -> Self {
        Self::with_history_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Creates a scene whose layers keep at most `history_depth` states each.
    pub fn with_history_depth(history_depth: usize) -> Self {
        Self {
            layers: vec![Layer::new(BASE_LAYER_NAME.to_string(), history_depth)],
            active: 0,
            history_depth,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names in creation order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.layer(name).is_some()
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    pub fn active_layer_name(&self) -> &str {
        self.active_layer().name()
    }

    /// Elements of the active layer in paint order.
    pub fn active_elements(&self) -> &[Element] {
        self.active_layer().elements()
    }

    /// Elements of the named layer.
    pub fn elements(&self, layer: &str) -> Result<&[Element], SceneError> {
        Ok(self.find(layer)?.1.elements())
    }

    /// Total number of elements across all layers.
    pub fn element_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Appends `element` to `layer`, returning its index.
    pub fn add_element(&mut self, layer: &str, element: Element) -> Result<usize, SceneError> {
        let layer = self.find_mut(layer)?;
        let mut elements = layer.elements().to_vec();
        elements.push(element);
        let index = elements.len() - 1;
        layer.commit(elements);
        tracing::debug!("Added element {} to layer '{}'", index, layer.name);
        Ok(index)
    }

    /// Appends all `elements` to `layer` as a single undo step.
    ///
    /// The step is never merged into an open drag batch. Returns the index
    /// range of the new elements. An empty batch records nothing.
    pub fn add_elements(
        &mut self,
        layer: &str,
        new_elements: Vec<Element>,
    ) -> Result<Range<usize>, SceneError> {
        let layer = self.find_mut(layer)?;
        let start = layer.len();
        if new_elements.is_empty() {
            return Ok(start..start);
        }
        let mut elements = layer.elements().to_vec();
        elements.extend(new_elements);
        let end = elements.len();
        layer.commit_separate(elements);
        tracing::debug!("Added {} elements to layer '{}'", end - start, layer.name);
        Ok(start..end)
    }

    /// Replaces the element at `index`, returning the previous element.
    pub fn replace_element(
        &mut self,
        layer: &str,
        index: usize,
        element: Element,
    ) -> Result<Element, SceneError> {
        let layer = self.find_mut(layer)?;
        layer.check_index(index)?;
        let mut elements = layer.elements().to_vec();
        let previous = std::mem::replace(&mut elements[index], element);
        layer.commit(elements);
        Ok(previous)
    }

    /// Removes and returns the element at `index`.
    pub fn remove_element(&mut self, layer: &str, index: usize) -> Result<Element, SceneError> {
        let layer = self.find_mut(layer)?;
        layer.check_index(index)?;
        let mut elements = layer.elements().to_vec();
        let removed = elements.remove(index);
        layer.commit(elements);
        tracing::debug!("Removed element {} from layer '{}'", index, layer.name);
        Ok(removed)
    }

    /// Adds a layer after the existing ones and returns its name.
    ///
    /// Without a name, the first free `"Layer N"` is used. The active layer
    /// is not changed.
    pub fn add_layer(&mut self, name: Option<&str>) -> Result<String, SceneError> {
        let name = match name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(SceneError::InvalidLayerName {
                        reason: "name is empty".to_string(),
                    });
                }
                if self.has_layer(name) {
                    return Err(SceneError::DuplicateLayer {
                        name: name.to_string(),
                    });
                }
                name.to_string()
            }
            None => self.next_layer_name(),
        };

        self.layers
            .push(Layer::new(name.clone(), self.history_depth));
        tracing::info!("Created layer '{}'", name);
        Ok(name)
    }

    /// Deletes a layer and its history.
    ///
    /// Deleting the active layer activates the layer created just before it.
    pub fn delete_layer(&mut self, name: &str) -> Result<(), SceneError> {
        let (index, layer) = self.find(name)?;
        if layer.is_protected() {
            return Err(SceneError::ProtectedLayer {
                name: name.to_string(),
            });
        }

        self.layers.remove(index);
        if self.active == index {
            self.active = index.saturating_sub(1);
        } else if self.active > index {
            self.active -= 1;
        }
        tracing::info!(
            "Deleted layer '{}', active layer is '{}'",
            name,
            self.active_layer_name()
        );
        Ok(())
    }

    /// Renames a layer, keeping its elements and history.
    pub fn rename_layer(&mut self, name: &str, new_name: &str) -> Result<(), SceneError> {
        let new_name = new_name.trim();
        let (index, layer) = self.find(name)?;
        if layer.is_protected() {
            return Err(SceneError::ProtectedLayer {
                name: name.to_string(),
            });
        }
        if new_name.is_empty() {
            return Err(SceneError::InvalidLayerName {
                reason: "name is empty".to_string(),
            });
        }
        if new_name != name && self.has_layer(new_name) {
            return Err(SceneError::DuplicateLayer {
                name: new_name.to_string(),
            });
        }
        self.layers[index].name = new_name.to_string();
        Ok(())
    }

    pub fn set_active_layer(&mut self, name: &str) -> Result<(), SceneError> {
        let (index, _) = self.find(name)?;
        self.active = index;
        tracing::debug!("Active layer is now '{}'", name);
        Ok(())
    }

    /// Undoes the last change on the active layer. Returns `false` at the
    /// oldest state.
    pub fn undo(&mut self) -> bool {
        self.layers[self.active].history.undo().is_some()
    }

    /// Redoes the last undone change on the active layer. Returns `false`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.layers[self.active].history.redo().is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.active_layer().history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.active_layer().history.can_redo()
    }

    /// Starts collapsing commits on `layer` into one undo step.
    pub fn begin_batch(&mut self, layer: &str) -> Result<(), SceneError> {
        self.find_mut(layer)?.history.begin_batch();
        Ok(())
    }

    pub fn end_batch(&mut self, layer: &str) -> Result<(), SceneError> {
        self.find_mut(layer)?.history.end_batch();
        Ok(())
    }

    fn next_layer_name(&self) -> String {
        let mut n = self.layers.len();
        loop {
            let candidate = format!("{} {}", LAYER_NAME_PREFIX, n);
            if !self.has_layer(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn find(&self, name: &str) -> Result<(usize, &Layer), SceneError> {
        self.layers
            .iter()
            .enumerate()
            .find(|(_, l)| l.name == name)
            .ok_or_else(|| SceneError::UnknownLayer {
                name: name.to_string(),
            })
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Layer, SceneError> {
        self.layers
            .iter_mut()
            .find(|l| l.name == name)
            .ok_or_else(|| SceneError::UnknownLayer {
                name: name.to_string(),
            })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
