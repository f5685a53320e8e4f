use fantasy_map_navigator::core::{PanelAccent, PopupAction};
use fantasy_map_navigator::{
    AppCommand, AppController, AppIntent, AppState, CoursePhase, DistancePhase, MapSurface,
    NavigatorOptions, ToolKind, Waypoint,
};

/// Optionen mit 1:1-Umrechnung und ohne Regel-Link für lesbare Erwartungswerte.
fn unit_state() -> AppState {
    AppState::with_options(NavigatorOptions {
        scale_factor: 1.0,
        kilometer_to_miles: 1.0,
        travel_rules_link: None,
        ..NavigatorOptions::default()
    })
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, lat: f64, lng: f64) {
    send(
        controller,
        state,
        AppIntent::MapClicked {
            pos: Waypoint::new(lat, lng),
        },
    );
}

#[test]
fn test_initial_state_shows_idle_instructions() {
    let state = AppState::new();

    let distance = state.scene.control(ToolKind::DistanceTool);
    let course = state.scene.control(ToolKind::CoursePlotter);

    assert!(!distance.active);
    assert_eq!(distance.title, "Click to start measuring distance");
    assert!(!course.active);
    assert_eq!(
        course.title,
        "Click to start plotting a course with multiple waypoints"
    );
    assert!(state.scene.is_clear());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_map_click_without_tool_logs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);

    assert!(state.command_log.is_empty());
    assert!(state.scene.is_clear());
}

#[test]
fn test_distance_measurement_flow() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::DistanceTool,
        },
    );
    assert_eq!(
        state.scene.control(ToolKind::DistanceTool).title,
        "Click on map to place start point"
    );

    click(&mut controller, &mut state, 0.0, 0.0);
    assert_eq!(state.modes.distance().phase(), DistancePhase::AwaitingEnd);
    assert_eq!(state.scene.marker_count(), 1);
    assert_eq!(state.scene.polyline_count(), 0);

    click(&mut controller, &mut state, 3.0, 4.0);
    assert_eq!(state.modes.distance().phase(), DistancePhase::Measured);
    assert_eq!(state.scene.marker_count(), 2);
    assert_eq!(state.scene.polyline_count(), 1);

    let popup_id = state.modes.distance().popup().expect("Ergebnis-Popup erwartet");
    let popup = state.scene.popup(popup_id).expect("Popup auf der Oberfläche");
    assert_eq!(popup.position, Waypoint::new(1.5, 2.0));
    assert_eq!(popup.content.title, "Distance: 5.0 km");
    assert_eq!(
        popup.content.lines,
        vec![
            "(5.0 miles)".to_string(),
            String::new(),
            "Travel Times:".to_string(),
            "Fast: 1h 15 min".to_string(),
            "Normal: 1h 40 min".to_string(),
            "Slow: 2h 30 min".to_string(),
        ]
    );
    assert_eq!(popup.content.actions, vec![PopupAction::NewMeasurement]);
    assert_eq!(
        state.scene.control(ToolKind::DistanceTool).title,
        "Drag markers to adjust, click map for new measurement"
    );

    // Dritter Klick beginnt eine neue Messung
    click(&mut controller, &mut state, 10.0, 10.0);
    assert_eq!(state.modes.distance().phase(), DistancePhase::AwaitingEnd);
    assert_eq!(state.scene.marker_count(), 1);
    assert_eq!(state.scene.polyline_count(), 0);
    assert_eq!(state.scene.popup_count(), 0);
}

#[test]
fn test_dragging_distance_marker_updates_popup_in_place() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::DistanceTool,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);
    let popup_id = state.modes.distance().popup().expect("Popup erwartet");
    let end_marker = state
        .scene
        .marker_at(Waypoint::new(3.0, 4.0), 0.1)
        .expect("End-Marker erwartet");

    send(
        &mut controller,
        &mut state,
        AppIntent::MarkerDragged {
            marker: end_marker,
            pos: Waypoint::new(6.0, 8.0),
        },
    );

    assert_eq!(state.modes.distance().popup(), Some(popup_id));
    let popup = state.scene.popup(popup_id).expect("Popup bleibt offen");
    assert_eq!(popup.content.title, "Distance: 10.0 km");
    assert_eq!(popup.position, Waypoint::new(3.0, 4.0));
    assert_eq!(state.scene.polyline_count(), 1);
}

#[test]
fn test_new_measurement_action_clears_but_stays_active() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::DistanceTool,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PopupActionTriggered {
            action: PopupAction::NewMeasurement,
        },
    );

    assert!(state.scene.is_clear());
    assert_eq!(state.active_tool(), Some(ToolKind::DistanceTool));
    assert_eq!(state.modes.distance().phase(), DistancePhase::Idle);
}

#[test]
fn test_course_plotting_flow() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    assert_eq!(state.scene.panel_count(), 1);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);
    click(&mut controller, &mut state, 3.0, 10.0);

    let course = state.modes.course();
    assert_eq!(course.waypoint_count(), 3);
    assert_eq!(state.scene.marker_count(), 3);
    assert_eq!(state.scene.polyline_count(), 1);

    let panel_id = course.panel().expect("Panel erwartet");
    let panel = state.scene.panel(panel_id).expect("Panel auf der Oberfläche");
    assert_eq!(panel.content.title, "Course Route (3 waypoints)");
    assert_eq!(panel.content.lines[0], "Total Distance: 11.0 km (11.0 miles)");
    assert!(panel
        .content
        .lines
        .contains(&"Fast: 2h 45 min (0.3 days)".to_string()));
    assert!(panel
        .content
        .lines
        .contains(&"Slow: 5h 30 min (0.7 days)".to_string()));
    assert_eq!(
        state.scene.control(ToolKind::CoursePlotter).title,
        "Click on map to add waypoints (3 added). Click \"Finish Route\" in popup when done."
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::PopupActionTriggered {
            action: PopupAction::ShowSummary,
        },
    );
    let popup_id = state.modes.course().popup().expect("Zusammenfassung erwartet");
    let popup = state.scene.popup(popup_id).expect("Popup auf der Oberfläche");
    assert_eq!(popup.position, Waypoint::new(1.5, 5.0));
    assert_eq!(popup.content.lines[0], "Total Distance: 11.0 km");
    assert_eq!(
        popup.content.actions,
        vec![PopupAction::ClearRoute, PopupAction::FinishRoute]
    );
}

#[test]
fn test_finish_route_stops_clicks_and_keeps_overlays() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PopupActionTriggered {
            action: PopupAction::FinishRoute,
        },
    );

    assert_eq!(state.modes.course().phase(), CoursePhase::Finished);
    assert_eq!(state.active_tool(), Some(ToolKind::CoursePlotter));
    assert!(state.scene.click_subscribers().is_empty());

    let panel_id = state.modes.course().panel().expect("Panel bleibt");
    assert_eq!(
        state.scene.panel(panel_id).map(|p| p.accent),
        Some(PanelAccent::Finished)
    );

    // Klicks erreichen das Werkzeug nicht mehr
    click(&mut controller, &mut state, 9.0, 9.0);
    assert_eq!(state.modes.course().waypoint_count(), 2);
    assert_eq!(state.scene.marker_count(), 2);
    assert_eq!(state.scene.polyline_count(), 1);
}

#[test]
fn test_remove_waypoint_renumbers_markers() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);
    click(&mut controller, &mut state, 3.0, 10.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PopupActionTriggered {
            action: PopupAction::RemoveWaypoint(0),
        },
    );

    let course = state.modes.course();
    assert_eq!(course.waypoint_count(), 2);
    assert_eq!(course.waypoint(0), Some(Waypoint::new(3.0, 4.0)));
    let labels: Vec<String> = course
        .markers()
        .iter()
        .filter_map(|&id| state.scene.marker(id))
        .map(|m| m.spec.label.clone())
        .collect();
    assert_eq!(labels, vec!["Waypoint 1".to_string(), "Waypoint 2".to_string()]);
    assert_eq!(state.scene.marker_count(), 2);
}

#[test]
fn test_remove_waypoint_out_of_range_reports_error() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::PopupActionTriggered {
            action: PopupAction::RemoveWaypoint(5),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.modes.course().waypoint_count(), 1);
}

#[test]
fn test_summary_with_single_waypoint_reports_error() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);

    let result = controller.handle_command(&mut state, AppCommand::ShowRouteSummary);

    assert!(result.is_err());
    assert_eq!(state.scene.popup_count(), 0);
}

#[test]
fn test_escape_cancels_input_then_closes_tool() {
    let mut controller = AppController::new();
    let mut state = unit_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::ToggleToolRequested {
            tool: ToolKind::CoursePlotter,
        },
    );
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 3.0, 4.0);

    send(&mut controller, &mut state, AppIntent::CancelRequested);
    assert_eq!(state.active_tool(), Some(ToolKind::CoursePlotter));
    assert_eq!(state.modes.course().waypoint_count(), 0);
    assert_eq!(state.scene.marker_count(), 0);
    assert_eq!(state.scene.panel_count(), 1);

    send(&mut controller, &mut state, AppIntent::CancelRequested);
    assert_eq!(state.active_tool(), None);
    assert!(state.scene.is_clear());
    assert!(state.scene.click_subscribers().is_empty());
}

#[test]
fn test_camera_intents_update_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let start_zoom = state.view.view.zoom;
    let start_center = state.view.view.center;

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
    );
    assert_eq!(state.view.viewport_size, [800.0, 600.0]);

    send(
        &mut controller,
        &mut state,
        AppIntent::CameraPan {
            delta_px: glam::DVec2::new(32.0, 0.0),
        },
    );
    assert!(state.view.view.center.lng < start_center.lng);

    send(
        &mut controller,
        &mut state,
        AppIntent::CameraZoom {
            delta: -1.0,
            focus: None,
        },
    );
    assert_eq!(state.view.view.zoom, start_zoom - 1.0);

    send(&mut controller, &mut state, AppIntent::ResetViewRequested);
    assert_eq!(state.view.view.center, start_center);
    assert_eq!(state.view.view.zoom, start_zoom);
}
