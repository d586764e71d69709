//! Side panel geometry derived from the player panel.

use minidock_core::FrameClock;
use minidock_testing::{events, layout_pass, TestFrameScheduler, TestHost, TestInvalidator, TestPanelView};
use minidock_ui::{PanelBehavior, PanelConfig, PlayerPanelBehavior, SidePanelBehavior};
use minidock_ui_layout::{Constraints, Size};
use std::rc::Rc;

fn player(config: PanelConfig) -> PlayerPanelBehavior {
    let scheduler = TestFrameScheduler::new();
    let clock = FrameClock::new(Rc::new(scheduler));
    PlayerPanelBehavior::new(config, clock, Rc::new(TestInvalidator::new()))
}

/// Collapses the player against a 400x250 container so that its published
/// frame is exactly {0, 200, 300, 250}.
fn collapsed_player(host: &TestHost, view: &mut TestPanelView) -> PlayerPanelBehavior {
    let config = PanelConfig {
        collapsed_width: 300.0,
        collapsed_height: 50.0,
        ..PanelConfig::default()
    };
    let mut behavior = player(config);
    let constraints = Constraints::loose(400.0, 250.0);

    layout_pass(&mut behavior, host, view, constraints);
    behavior.on_intercept_pointer_event(host, view, &events::down(350.0, 100.0, 0));
    behavior.on_intercept_pointer_event(host, view, &events::move_to(350.0, 120.0, 10));
    behavior.on_pointer_event(host, view, &events::move_to(350.0, 320.0, 20));
    behavior.on_pointer_event(host, view, &events::move_to(350.0, 320.0, 120));
    behavior.on_pointer_event(host, view, &events::up(350.0, 320.0, 130));
    assert!(!behavior.is_flinging());
    layout_pass(&mut behavior, host, view, constraints);

    let frame = view.placed_frame().expect("layout happened");
    assert_eq!((frame.left, frame.top, frame.right, frame.bottom), (0.0, 200.0, 300.0, 250.0));
    behavior
}

#[test]
fn side_panel_sits_flush_against_the_player() {
    let host = TestHost::new(Size::new(400.0, 250.0));
    let mut player_view = TestPanelView::new(Size::new(400.0, 250.0));
    let player = collapsed_player(&host, &mut player_view);

    let invalidator = TestInvalidator::new();
    let mut side = SidePanelBehavior::new(Rc::new(invalidator.clone()));
    assert!(side.layout_depends_on(&player));
    side.on_dependency_changed(&player);
    assert_eq!(invalidator.request_count(), 1);

    let mut side_view = TestPanelView::new(Size::new(400.0, 250.0));
    let measured = layout_pass(&mut side, &host, &mut side_view, Constraints::loose(400.0, 250.0));
    assert_eq!(measured, Size::new(100.0, 50.0));

    let frame = side_view.placed_frame().expect("layout happened");
    assert_eq!((frame.left, frame.top, frame.right, frame.bottom), (300.0, 200.0, 400.0, 250.0));
    assert_eq!(frame.right, frame.left + measured.width);
    assert_eq!(frame.bottom, frame.top + measured.height);
}

#[test]
fn side_panel_follows_the_player_between_passes() {
    let host = TestHost::new(Size::new(400.0, 1000.0));
    let mut player_view = TestPanelView::new(Size::new(400.0, 1000.0));
    let mut player_behavior = player(PanelConfig::default());
    let constraints = Constraints::loose(400.0, 1000.0);

    layout_pass(&mut player_behavior, &host, &mut player_view, constraints);

    let mut side = SidePanelBehavior::new(Rc::new(TestInvalidator::new()));
    side.on_dependency_changed(&player_behavior);
    let mut side_view = TestPanelView::new(Size::new(400.0, 1000.0));

    // Expanded: the player spans the full width, leaving the side panel
    // zero-width at the player's full height.
    let measured = layout_pass(&mut side, &host, &mut side_view, constraints);
    assert_eq!(measured, Size::new(0.0, 1000.0));

    // Drag the player part-way down and re-run both passes; the side panel
    // re-derives its geometry from the fresh frame without being re-wired.
    player_behavior.on_intercept_pointer_event(&host, &mut player_view, &events::down(200.0, 100.0, 0));
    player_behavior.on_intercept_pointer_event(&host, &mut player_view, &events::move_to(200.0, 120.0, 10));
    player_behavior.on_pointer_event(&host, &mut player_view, &events::move_to(200.0, 595.0, 20));
    player_behavior.on_pointer_event(&host, &mut player_view, &events::move_to(200.0, 595.0, 120));
    player_behavior.on_pointer_event(&host, &mut player_view, &events::up(200.0, 595.0, 130));
    layout_pass(&mut player_behavior, &host, &mut player_view, constraints);

    let player_frame = player_view.placed_frame().expect("layout happened");
    let measured = layout_pass(&mut side, &host, &mut side_view, constraints);
    assert_eq!(measured.width, 400.0 - player_frame.right);
    assert_eq!(measured.height, player_frame.bottom - player_frame.top);

    let frame = side_view.placed_frame().expect("layout happened");
    assert_eq!(frame.left, player_frame.right);
    assert_eq!(frame.top, player_frame.top);
    assert_eq!(frame.bottom, player_frame.bottom);
}

#[test]
fn missing_dependency_leaves_constraints_and_zero_edges() {
    let host = TestHost::new(Size::new(400.0, 250.0));
    let mut side = SidePanelBehavior::new(Rc::new(TestInvalidator::new()));
    let mut side_view = TestPanelView::new(Size::new(123.0, 45.0));

    let measured = layout_pass(&mut side, &host, &mut side_view, Constraints::loose(400.0, 250.0));
    assert_eq!(measured, Size::new(123.0, 45.0));

    let frame = side_view.placed_frame().expect("layout happened");
    assert_eq!((frame.left, frame.top, frame.bottom), (0.0, 0.0, 0.0));
    assert_eq!(frame.right, measured.width);
}

#[test]
fn removed_dependency_resets_to_defaults() {
    let host = TestHost::new(Size::new(400.0, 250.0));
    let mut player_view = TestPanelView::new(Size::new(400.0, 250.0));
    let player = collapsed_player(&host, &mut player_view);

    let invalidator = TestInvalidator::new();
    let mut side = SidePanelBehavior::new(Rc::new(invalidator.clone()));
    side.on_dependency_changed(&player);
    let mut side_view = TestPanelView::new(Size::new(123.0, 45.0));
    layout_pass(&mut side, &host, &mut side_view, Constraints::loose(400.0, 250.0));

    side.on_dependency_removed();
    assert_eq!(invalidator.request_count(), 2);

    let measured = layout_pass(&mut side, &host, &mut side_view, Constraints::loose(400.0, 250.0));
    assert_eq!(measured, Size::new(123.0, 45.0));
    let frame = side_view.placed_frame().expect("layout happened");
    assert_eq!((frame.left, frame.top, frame.bottom), (0.0, 0.0, 0.0));
}

#[test]
fn dropped_player_behaves_like_a_missing_dependency() {
    let host = TestHost::new(Size::new(400.0, 250.0));
    let mut player_view = TestPanelView::new(Size::new(400.0, 250.0));
    let player = collapsed_player(&host, &mut player_view);

    let mut side = SidePanelBehavior::new(Rc::new(TestInvalidator::new()));
    side.on_dependency_changed(&player);
    drop(player);

    let mut side_view = TestPanelView::new(Size::new(123.0, 45.0));
    let measured = layout_pass(&mut side, &host, &mut side_view, Constraints::loose(400.0, 250.0));
    assert_eq!(measured, Size::new(123.0, 45.0));
    let frame = side_view.placed_frame().expect("layout happened");
    assert_eq!((frame.left, frame.top, frame.bottom), (0.0, 0.0, 0.0));
}

#[test]
fn side_panels_do_not_depend_on_each_other() {
    let side_a = SidePanelBehavior::new(Rc::new(TestInvalidator::new()));
    let side_b = SidePanelBehavior::new(Rc::new(TestInvalidator::new()));
    assert!(!side_a.layout_depends_on(&side_b));
}
