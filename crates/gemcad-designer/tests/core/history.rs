use gemcad_designer::{Element, History, Scene};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Mutation {
    Add(f64, f64),
    Remove(usize),
    Move(usize, f64),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Mutation::Add(x, y)),
        (0usize..8).prop_map(Mutation::Remove),
        (0usize..8, -10.0..10.0f64).prop_map(|(i, d)| Mutation::Move(i, d)),
    ]
}

/// Applies `m`, returning whether a state was committed.
fn apply(scene: &mut Scene, m: &Mutation) -> bool {
    let len = scene.active_elements().len();
    match *m {
        Mutation::Add(x, y) => scene.add_element("Base", Element::circle(x, y, 1.0)).is_ok(),
        Mutation::Remove(i) if i < len => scene.remove_element("Base", i).is_ok(),
        Mutation::Move(i, d) if i < len => {
            let moved = scene.active_elements()[i].translated(d, d);
            scene.replace_element("Base", i, moved).is_ok()
        }
        _ => false,
    }
}

proptest! {
    #[test]
    fn undo_restores_every_prior_state(mutations in prop::collection::vec(mutation(), 1..30)) {
        let mut scene = Scene::new();
        let mut snapshots = vec![scene.active_elements().to_vec()];
        for m in &mutations {
            if apply(&mut scene, m) {
                snapshots.push(scene.active_elements().to_vec());
            }
        }

        for expected in snapshots.iter().rev().skip(1) {
            prop_assert!(scene.undo());
            prop_assert_eq!(scene.active_elements(), expected.as_slice());
        }
        prop_assert!(!scene.undo());

        for expected in snapshots.iter().skip(1) {
            prop_assert!(scene.redo());
            prop_assert_eq!(scene.active_elements(), expected.as_slice());
        }
        prop_assert!(!scene.redo());
    }

    #[test]
    fn undo_then_redo_is_identity(mutations in prop::collection::vec(mutation(), 1..20)) {
        let mut scene = Scene::new();
        for m in &mutations {
            apply(&mut scene, m);
        }
        let before = scene.active_elements().to_vec();
        if scene.undo() {
            prop_assert!(scene.redo());
        }
        prop_assert_eq!(scene.active_elements(), before.as_slice());
    }
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut history = History::new(Vec::<u32>::new(), 10);
    history.commit(vec![1]);
    history.commit(vec![1, 2]);
    history.undo();
    history.commit(vec![1, 3]);

    assert!(!history.can_redo());
    assert_eq!(history.current(), &vec![1, 3]);
    assert_eq!(history.undo().cloned(), Some(vec![1]));
}
