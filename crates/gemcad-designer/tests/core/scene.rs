use gemcad_core::SceneError;
use gemcad_designer::{Element, Scene};

#[test]
fn test_base_layer_is_protected() {
    let mut scene = Scene::new();
    scene.add_element("Base", Element::circle(0.0, 0.0, 1.0)).unwrap();

    assert_eq!(
        scene.delete_layer("Base"),
        Err(SceneError::ProtectedLayer {
            name: "Base".to_string()
        })
    );
    assert_eq!(scene.layer_names(), vec!["Base"]);
    assert_eq!(scene.elements("Base").unwrap().len(), 1);
}

#[test]
fn test_layer_names_follow_layer_count() {
    let mut scene = Scene::new();
    let first = scene.add_layer(None).unwrap();
    let second = scene.add_layer(None).unwrap();
    assert_eq!(first, "Layer 1");
    assert_eq!(second, "Layer 2");

    scene.delete_layer("Layer 1").unwrap();
    // Two layers remain, and "Layer 2" is taken.
    assert_eq!(scene.add_layer(None).unwrap(), "Layer 3");
}

#[test]
fn test_mutations_commit_only_the_affected_layer() {
    let mut scene = Scene::new();
    scene.add_layer(Some("Gems")).unwrap();
    scene.add_element("Gems", Element::circle(1.0, 1.0, 1.0)).unwrap();

    assert!(!scene.can_undo());
    scene.set_active_layer("Gems").unwrap();
    assert!(scene.can_undo());
}

#[test]
fn test_replace_returns_previous() {
    let mut scene = Scene::new();
    scene.add_element("Base", Element::rect(0.0, 0.0, 1.0, 1.0)).unwrap();
    let previous = scene
        .replace_element("Base", 0, Element::rect(5.0, 5.0, 1.0, 1.0))
        .unwrap();
    assert_eq!(previous, Element::rect(0.0, 0.0, 1.0, 1.0));
    assert!(scene.undo());
    assert_eq!(scene.active_elements()[0], previous);
}

#[test]
fn test_deleting_layer_drops_its_history() {
    let mut scene = Scene::new();
    scene.add_layer(Some("Temp")).unwrap();
    scene.add_element("Temp", Element::circle(0.0, 0.0, 1.0)).unwrap();
    scene.set_active_layer("Temp").unwrap();
    scene.delete_layer("Temp").unwrap();

    assert_eq!(scene.active_layer_name(), "Base");
    assert!(!scene.undo());
    assert_eq!(scene.element_count(), 0);
}
