use criterion::{black_box, criterion_group, criterion_main, Criterion};

use animgraph_core::{
    parse_selector_json, AnimGraphInstance, CharAnimState, GameTime, LocoState, NodeId,
    OutputPort, StateSelector, TemplateRegistry,
};
use animgraph_test_fixtures::selectors;

struct Pose {
    node: NodeId,
}

impl AnimGraphInstance for Pose {
    fn output(&self) -> OutputPort {
        OutputPort::new(self.node, 0)
    }
    fn apply_presentation_state(&mut self, _time: GameTime, _dt: f32) {}
    fn shutdown(&mut self) {}
}

fn build_selector() -> StateSelector {
    let json = selectors::json("character").expect("character fixture");
    let def = parse_selector_json(&json).expect("parse character fixture");
    let mut reg = TemplateRegistry::new();
    for name in ["stand", "run", "jump", "in_air", "squash"] {
        reg.register(name, |node| Ok(Box::new(Pose { node }) as Box<dyn AnimGraphInstance>));
    }
    StateSelector::new(&def, &mut reg).expect("build selector")
}

fn bench_selector_tick(c: &mut Criterion) {
    let script = [
        LocoState::Stand,
        LocoState::GroundMove,
        LocoState::Jump,
        LocoState::InAir,
        LocoState::GroundMove,
    ];

    c.bench_function("selector_tick_locomotion_cycle", |b| {
        let mut sel = build_selector();
        let mut time = GameTime::new(60);
        let dt = time.tick_duration();
        b.iter(|| {
            time.advance();
            let loco = script[(time.tick as usize / 20) % script.len()];
            let snapshot = CharAnimState::new(loco, time.tick / 20);
            sel.update_graph_logic(black_box(&snapshot), time, dt);
            sel.apply_presentation_state(black_box(&snapshot), time, dt);
        });
    });
}

criterion_group!(benches, bench_selector_tick);
criterion_main!(benches);
