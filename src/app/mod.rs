//! Application-Layer: Controller, State, Events und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Hält Kartenoberfläche, Werkzeuge, Ansicht und Optionen.
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, ViewState};
pub use tools::{
    CoursePhase, CoursePlotterTool, DistancePhase, DistanceTool, ModeController, NavigationTool,
    ToolAction, ToolContext, ToolError,
};
