use gemcad_designer::{
    CanvasOutcome, DesignLine, DesignRectangle, DesignerState, DrawingMode, Key, KeyInput, Point,
    Region, Shape,
};

#[test]
fn test_draw_rect_undo_redo() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Rectangle);
    state.pointer_down(Point::new(10.0, 10.0)).unwrap();
    state.pointer_move(Point::new(50.0, 40.0)).unwrap();
    let outcome = state.pointer_up(Point::new(50.0, 40.0)).unwrap();
    assert_eq!(outcome, CanvasOutcome::Committed(0));

    let expected = Shape::Rectangle(DesignRectangle::new(10.0, 10.0, 40.0, 30.0));
    assert_eq!(state.scene().active_elements()[0].shape, expected);

    assert_eq!(state.key_down(KeyInput::ctrl('z')).unwrap(), CanvasOutcome::Undone);
    assert!(state.scene().active_elements().is_empty());

    assert_eq!(state.key_down(KeyInput::ctrl('y')).unwrap(), CanvasOutcome::Redone);
    assert_eq!(state.scene().active_elements()[0].shape, expected);
}

#[test]
fn test_shift_ctrl_z_redoes() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Line);
    state.pointer_down(Point::new(0.0, 0.0)).unwrap();
    state.pointer_up(Point::new(0.0, 0.0)).unwrap();
    assert_eq!(
        state.scene().active_elements()[0].shape,
        Shape::Line(DesignLine::new(Point::default(), Point::default()))
    );

    state.key_down(KeyInput::meta('z')).unwrap();
    assert!(state.scene().active_elements().is_empty());
    state.key_down(KeyInput::ctrl_shift('z')).unwrap();
    assert_eq!(state.scene().active_elements().len(), 1);
}

#[test]
fn test_undo_at_initial_state_is_noop() {
    let mut state = DesignerState::new();
    assert_eq!(state.key_down(KeyInput::ctrl('z')).unwrap(), CanvasOutcome::None);
    assert_eq!(state.key_down(KeyInput::ctrl('y')).unwrap(), CanvasOutcome::None);
}

#[test]
fn test_drag_moves_selected_element() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::Rectangle);
    state.pointer_down(Point::new(0.0, 0.0)).unwrap();
    state.pointer_up(Point::new(10.0, 10.0)).unwrap();

    state.set_mode(DrawingMode::Select);
    assert_eq!(
        state.pointer_down(Point::new(5.0, 5.0)).unwrap(),
        CanvasOutcome::Selected(0)
    );
    state.pointer_move(Point::new(8.0, 9.0)).unwrap();
    state.pointer_up(Point::new(8.0, 9.0)).unwrap();

    assert_eq!(
        state.scene().active_elements()[0].shape,
        Shape::Rectangle(DesignRectangle::new(3.0, 4.0, 10.0, 10.0))
    );
    // One undo per drag move.
    assert!(state.undo());
    assert_eq!(
        state.scene().active_elements()[0].shape,
        Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 10.0, 10.0))
    );
}

#[test]
fn test_quick_select_region() {
    let mut state = DesignerState::new();
    state.set_mode(DrawingMode::QuickSelect);
    let outcome = state.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert_eq!(
        outcome,
        CanvasOutcome::RegionSelected(Region::new(Point::new(100.0, 100.0), 40.0))
    );
    assert!(state.controller().state().is_idle());
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut state = DesignerState::new();
    assert_eq!(
        state.key_down(KeyInput::plain(Key::Delete)).unwrap(),
        CanvasOutcome::None
    );
}
