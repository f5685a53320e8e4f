use super::super::{NavigationTool, ToolAction, ToolContext};
use super::state::{DistancePhase, DistanceTool};
use crate::core::{Cursor, MapScene, MapSurface, MarkerColor, MarkerSlot, PopupAction, ToolKind, Waypoint};
use crate::shared::NavigatorOptions;
use approx::assert_relative_eq;

fn unit_options() -> NavigatorOptions {
    NavigatorOptions {
        scale_factor: 1.0,
        travel_rules_link: None,
        ..NavigatorOptions::default()
    }
}

fn ctx<'a>(scene: &'a mut MapScene, options: &'a NavigatorOptions) -> ToolContext<'a> {
    ToolContext::new(scene, options)
}

fn active_tool(scene: &mut MapScene, options: &NavigatorOptions) -> DistanceTool {
    let mut tool = DistanceTool::new();
    tool.activate(&mut ctx(scene, options));
    tool
}

#[test]
fn test_activate_subscribes_and_sets_crosshair() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let tool = active_tool(&mut scene, &options);

    assert!(tool.is_active());
    assert_eq!(tool.phase(), DistancePhase::Idle);
    assert_eq!(scene.click_subscribers(), vec![ToolKind::DistanceTool]);
    assert_eq!(scene.cursor(), Cursor::Crosshair);

    let control = scene.control(ToolKind::DistanceTool);
    assert!(control.active);
    assert_eq!(control.title, "Click on map to place start point");
}

#[test]
fn test_click_on_inactive_tool_is_ignored() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = DistanceTool::new();

    let action = tool.on_click(Waypoint::new(1.0, 1.0), &mut ctx(&mut scene, &options));
    assert_eq!(action, ToolAction::Ignored);
    assert!(scene.is_clear());
    assert!(tool.start().is_none());
}

#[test]
fn test_first_click_places_start_marker_only() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    let action = tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    assert_eq!(action, ToolAction::Continue);
    assert_eq!(tool.phase(), DistancePhase::AwaitingEnd);
    assert_eq!(tool.marker_count(), 1);
    assert_eq!(scene.marker_count(), 1);
    assert_eq!(scene.polyline_count(), 0);
    assert_eq!(scene.popup_count(), 0);

    let marker = scene
        .marker(tool.start_marker.expect("Start-Marker erwartet"))
        .expect("Marker auf der Oberfläche erwartet");
    assert_eq!(marker.spec.color, MarkerColor::Green);
    assert_eq!(marker.spec.label, "Start Point");
    assert_eq!(
        scene.control(ToolKind::DistanceTool).title,
        "Click on map to place end point"
    );
}

#[test]
fn test_second_click_completes_measurement() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    let action = tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));

    assert_eq!(action, ToolAction::Completed);
    assert_eq!(tool.phase(), DistancePhase::Measured);
    assert_relative_eq!(tool.map_distance().unwrap_or_default(), 5.0);
    assert_eq!(scene.marker_count(), 2);

    let line = scene
        .polyline(tool.line().expect("Linie erwartet"))
        .expect("Linie auf der Oberfläche erwartet");
    assert_eq!(
        line.points,
        vec![Waypoint::new(0.0, 0.0), Waypoint::new(3.0, 4.0)]
    );
    assert_eq!(line.style.dash, Some((5.0, 5.0)));

    let popup = scene
        .popup(tool.popup().expect("Popup erwartet"))
        .expect("Popup auf der Oberfläche erwartet");
    assert_relative_eq!(popup.position.lat, 1.5);
    assert_relative_eq!(popup.position.lng, 2.0);
    assert_eq!(popup.content.title, "Distance: 5.0 km");
    assert_eq!(popup.content.lines[0], "(3.1 miles)");
    assert!(popup.content.lines.contains(&"Fast: 0h 47 min".to_string()));
    assert_eq!(popup.content.actions, vec![PopupAction::NewMeasurement]);

    let end = scene
        .marker(tool.end_marker.expect("End-Marker erwartet"))
        .expect("Marker erwartet");
    assert_eq!(end.spec.color, MarkerColor::Red);
    assert_eq!(
        scene.control(ToolKind::DistanceTool).title,
        "Drag markers to adjust, click map for new measurement"
    );
}

#[test]
fn test_third_click_restarts_measurement() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    let c = Waypoint::new(-10.0, 20.0);
    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));
    let action = tool.on_click(c, &mut ctx(&mut scene, &options));

    assert_eq!(action, ToolAction::Continue);
    assert_eq!(tool.start(), Some(c));
    assert_eq!(tool.end(), None);
    assert_eq!(tool.phase(), DistancePhase::AwaitingEnd);
    assert_eq!(scene.marker_count(), 1);
    assert_eq!(scene.polyline_count(), 0);
    assert_eq!(scene.popup_count(), 0);
    assert!(tool.line().is_none());
    assert!(tool.popup().is_none());
}

#[test]
fn test_drag_updates_line_and_popup_in_place() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));
    let popup_before = tool.popup();
    let line_before = tool.line();
    scene.clear_journal();

    tool.on_marker_drag(
        MarkerSlot::End,
        Waypoint::new(6.0, 8.0),
        &mut ctx(&mut scene, &options),
    )
    .expect("Drag erwartet");

    assert_eq!(tool.end(), Some(Waypoint::new(6.0, 8.0)));
    assert_eq!(tool.popup(), popup_before);
    assert_eq!(tool.line(), line_before);
    // Kein neues Popup, keine neue Linie
    assert!(scene.journal().is_empty());

    let popup = scene
        .popup(tool.popup().expect("Popup erwartet"))
        .expect("Popup erwartet");
    assert_eq!(popup.content.title, "Distance: 10.0 km");
    assert_relative_eq!(popup.position.lat, 3.0);
    assert_relative_eq!(popup.position.lng, 4.0);

    let line = scene
        .polyline(tool.line().expect("Linie erwartet"))
        .expect("Linie erwartet");
    assert_eq!(line.points[1], Waypoint::new(6.0, 8.0));
}

#[test]
fn test_drag_start_while_awaiting_end_moves_start_only() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_marker_drag(
        MarkerSlot::Start,
        Waypoint::new(1.0, 1.0),
        &mut ctx(&mut scene, &options),
    )
    .expect("Drag erwartet");

    assert_eq!(tool.start(), Some(Waypoint::new(1.0, 1.0)));
    assert_eq!(scene.polyline_count(), 0);
    assert_eq!(scene.popup_count(), 0);
}

#[test]
fn test_drag_without_marker_is_noop() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = DistanceTool::new();

    let result = tool.on_marker_drag(
        MarkerSlot::End,
        Waypoint::new(1.0, 1.0),
        &mut ctx(&mut scene, &options),
    );
    assert!(result.is_ok());
    assert!(tool.end().is_none());
    assert!(scene.is_clear());
}

#[test]
fn test_new_measurement_keeps_tool_active() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));
    tool.new_measurement(&mut ctx(&mut scene, &options));

    assert!(tool.is_active());
    assert_eq!(tool.phase(), DistancePhase::Idle);
    assert!(scene.is_clear());
    assert_eq!(scene.click_subscribers(), vec![ToolKind::DistanceTool]);
}

#[test]
fn test_deactivate_removes_everything() {
    let mut scene = MapScene::new();
    let options = unit_options();
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));
    tool.deactivate(&mut ctx(&mut scene, &options));

    assert!(!tool.is_active());
    assert!(tool.waypoints().is_empty());
    assert!(scene.is_clear());
    assert!(scene.click_subscribers().is_empty());
    assert_eq!(scene.cursor(), Cursor::Default);

    let control = scene.control(ToolKind::DistanceTool);
    assert!(!control.active);
    assert_eq!(control.title, "Click to start measuring distance");
}

#[test]
fn test_rules_link_is_appended_when_configured() {
    let mut scene = MapScene::new();
    let options = NavigatorOptions {
        scale_factor: 1.0,
        ..NavigatorOptions::default()
    };
    let mut tool = active_tool(&mut scene, &options);

    tool.on_click(Waypoint::new(0.0, 0.0), &mut ctx(&mut scene, &options));
    tool.on_click(Waypoint::new(3.0, 4.0), &mut ctx(&mut scene, &options));

    let popup = scene
        .popup(tool.popup().expect("Popup erwartet"))
        .expect("Popup erwartet");
    let last = popup.content.lines.last().cloned().unwrap_or_default();
    assert!(last.contains("https://2e.aonprd.com/Rules.aspx?ID=2581"));
}
