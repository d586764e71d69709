use criterion::{criterion_group, criterion_main, Criterion};
use minidock_core::FrameClock;
use minidock_testing::{TestFrameScheduler, TestHost, TestInvalidator, TestPanelView};
use minidock_ui::{PanelBehavior, PanelConfig, PlayerPanelBehavior};
use minidock_ui_layout::{Constraints, Size};
use std::rc::Rc;

fn measure_pass(c: &mut Criterion) {
    let scheduler = TestFrameScheduler::new();
    let clock = FrameClock::new(Rc::new(scheduler));
    let mut behavior = PlayerPanelBehavior::new(
        PanelConfig::default(),
        clock,
        Rc::new(TestInvalidator::new()),
    );
    let host = TestHost::new(Size::new(1080.0, 1920.0));
    let mut view = TestPanelView::new(Size::new(1080.0, 1920.0));
    let constraints = Constraints::loose(1080.0, 1920.0);

    c.bench_function("player_measure_layout", |b| {
        b.iter(|| {
            behavior.on_measure(&host, &mut view, constraints);
            behavior.on_layout(&host, &mut view);
        })
    });
}

criterion_group!(benches, measure_pass);
criterion_main!(benches);
