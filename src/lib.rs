//! Fantasy Map Navigator Library.
//! Werkzeuge, Reiseberechnung und Kartenmodell als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CoursePhase, CoursePlotterTool,
    DistancePhase, DistanceTool, ModeController, NavigationTool, ToolAction, ToolContext,
    ToolError, ViewState,
};
pub use core::{MapScene, MapSurface, MapView, ToolKind, Waypoint};
pub use shared::{NavigatorOptions, Pace, TravelEstimate};
