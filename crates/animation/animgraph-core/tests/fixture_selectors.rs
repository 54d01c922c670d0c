use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use animgraph_core::{
    parse_selector_json, AnimGraphInstance, AnimState, CharAnimState, GameTime, GraphLogic,
    LocoState, Mixer, NodeId, OutputPort, SelectorDef, SelectorError, StateSelector,
    TemplateRegistry,
};
use animgraph_test_fixtures::selectors;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// Looping clip: logic advances its phase, restarting on the first tick in a state.
struct Clip {
    node: NodeId,
    phase: f32,
    shutdowns: Arc<AtomicUsize>,
}

impl AnimGraphInstance for Clip {
    fn output(&self) -> OutputPort {
        OutputPort::new(self.node, 0)
    }

    fn apply_presentation_state(&mut self, _time: GameTime, _dt: f32) {}

    fn shutdown(&mut self) {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }

    fn graph_logic(&mut self) -> Option<&mut dyn GraphLogic> {
        Some(self)
    }
}

impl GraphLogic for Clip {
    fn update_presentation_state(&mut self, first_update: bool, _time: GameTime, dt: f32) {
        if first_update {
            self.phase = 0.0;
        }
        self.phase += dt;
    }
}

fn registry(names: &[&str], shutdowns: &Arc<AtomicUsize>) -> TemplateRegistry {
    let mut reg = TemplateRegistry::new();
    for name in names {
        let shutdowns = shutdowns.clone();
        reg.register(*name, move |node| {
            Ok(Box::new(Clip {
                node,
                phase: 0.0,
                shutdowns: shutdowns.clone(),
            }) as Box<dyn AnimGraphInstance>)
        });
    }
    reg
}

fn load(name: &str) -> SelectorDef {
    let json = selectors::json(name).expect("fixture json");
    parse_selector_json(&json).expect("fixture should parse")
}

#[test]
fn character_fixture_builds_one_controller_per_state() {
    let def = load("character");
    assert_eq!(def.name, "character_locomotion");

    let shutdowns = Arc::new(AtomicUsize::new(0));
    let mut reg = registry(&["stand", "run", "jump", "in_air", "squash"], &shutdowns);
    let mut sel = StateSelector::new(&def, &mut reg).unwrap();

    assert_eq!(sel.controller_count(), 5);
    assert_eq!(sel.transition_time(AnimState::Run, AnimState::Jump), Some(0.1));
    assert_eq!(sel.transition_time(AnimState::Run, AnimState::Stand), Some(0.2));
    assert_eq!(sel.transition_time(AnimState::Stand, AnimState::InAir), Some(0.05));
    assert_eq!(sel.transition_time(AnimState::Jump, AnimState::Run), Some(0.0));

    sel.shutdown();
    assert_eq!(shutdowns.load(Ordering::SeqCst), 5);
}

#[test]
fn character_fixture_blend_shares_sum_to_one() {
    let def = load("character");
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let mut reg = registry(&["stand", "run", "jump", "in_air", "squash"], &shutdowns);
    let mut sel = StateSelector::new(&def, &mut reg).unwrap();

    let mut time = GameTime::new(60);
    let dt = time.tick_duration();
    let script = [
        (LocoState::Stand, 0, 10),
        (LocoState::GroundMove, 10, 20),
        (LocoState::Jump, 30, 3),
        (LocoState::InAir, 33, 15),
        (LocoState::Stand, 48, 5),
        (LocoState::Dead, 53, 12),
    ];
    for (loco, loco_tick, frames) in script {
        let snapshot = CharAnimState::new(loco, loco_tick);
        for _ in 0..frames {
            time.advance();
            sel.update_graph_logic(&snapshot, time, dt);
            sel.apply_presentation_state(&snapshot, time, dt);
            let total: f32 = AnimState::ALL.iter().map(|s| sel.blend_weight(*s)).sum();
            approx(total, 1.0, 1e-4);
            for state in AnimState::ALL {
                let w = sel.state_weight(state);
                assert!((0.0..=1.0).contains(&w), "{state:?} weight {w}");
            }
        }
    }

    assert_eq!(sel.current_state(), Some(AnimState::Dead));
    assert_eq!(sel.previous_state(), Some(AnimState::Stand));
    // 12 frames at 60Hz outlast the 0.1s transition into Dead.
    approx(sel.state_weight(AnimState::Dead), 1.0, 1e-5);
}

#[test]
fn jump_snaps_in_with_zero_transition_time() {
    let def = load("character");
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let mut reg = registry(&["stand", "run", "jump", "in_air", "squash"], &shutdowns);
    let mut sel = StateSelector::new(&def, &mut reg).unwrap();
    let time = GameTime::default();

    sel.apply_presentation_state(&CharAnimState::new(LocoState::GroundMove, 0), time, 0.02);
    sel.apply_presentation_state(&CharAnimState::new(LocoState::Jump, 1), time, 0.02);
    assert_eq!(sel.state_weight(AnimState::Jump), 1.0);
    assert_eq!(sel.mixer().input_weight(sel.entry(AnimState::Run).unwrap().port), 0.0);
}

#[test]
fn airborne_fixture_shares_controllers_and_keeps_first_run_binding() {
    let def = load("airborne-shared");
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let mut reg = registry(&["ground", "air", "sprint"], &shutdowns);
    let mut sel = StateSelector::new(&def, &mut reg).unwrap();

    // "sprint" is still instantiated for the ignored Run binding.
    assert_eq!(sel.controller_count(), 3);
    let stand = sel.entry(AnimState::Stand).unwrap().controller;
    assert_eq!(sel.entry(AnimState::Run).unwrap().controller, stand);
    assert_eq!(
        sel.entry(AnimState::Jump).unwrap().controller,
        sel.entry(AnimState::InAir).unwrap().controller
    );
    // The transition table belongs to the template and comes from its first binding.
    assert_eq!(sel.transition_time(AnimState::InAir, AnimState::Run), Some(0.1));
    assert!(sel.entry(AnimState::Dead).is_none());

    let time = GameTime::default();
    sel.apply_presentation_state(&CharAnimState::new(LocoState::DoubleJump, 0), time, 0.02);
    assert_eq!(sel.current_state(), Some(AnimState::Jump));
    // Dead is not in this fixture's table.
    sel.apply_presentation_state(&CharAnimState::new(LocoState::Dead, 1), time, 0.02);
    assert_eq!(sel.current_state(), Some(AnimState::Stand));

    sel.shutdown();
    assert_eq!(shutdowns.load(Ordering::SeqCst), 3);
}

#[test]
fn missing_template_fails_construction() {
    let def = load("character");
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let mut reg = registry(&["stand", "run", "jump"], &shutdowns);
    let err = StateSelector::new(&def, &mut reg).unwrap_err();
    assert_eq!(err, SelectorError::UnknownTemplate("in_air".into()));
    assert_eq!(shutdowns.load(Ordering::SeqCst), 3);
}

#[test]
fn negative_time_fixture_is_rejected() {
    let json = selectors::json("negative-time").unwrap();
    assert!(matches!(
        parse_selector_json(&json),
        Err(SelectorError::InvalidDefinition(_))
    ));
}
