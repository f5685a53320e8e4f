//! Retained In-Memory-Kartenoberfläche.
//!
//! `MapScene` hält alle Overlays der Werkzeuge in Einfüge-Reihenfolge und
//! wird vom egui-Viewport gezeichnet. Tests prüfen darüber Sichtbarkeit und
//! Reihenfolge der Oberflächen-Operationen.

use super::surface::{
    ControlState, Cursor, InfoContent, MapSurface, MarkerBinding, MarkerId, MarkerSpec,
    PanelAccent, PanelId, PolylineId, PolylineSpec, PopupId, ToolKind,
};
use super::Waypoint;
use indexmap::IndexMap;

/// Ein Marker auf der Oberfläche (Spezifikation + aktuelle Position).
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub spec: MarkerSpec,
    pub position: Waypoint,
}

/// Ein geöffnetes Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePopup {
    pub position: Waypoint,
    pub content: InfoContent,
}

/// Ein Info-Panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePanel {
    pub content: InfoContent,
    pub accent: PanelAccent,
}

/// Protokollierte Oberflächen-Operation (für Reihenfolge-Prüfungen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Subscribe(ToolKind),
    Unsubscribe(ToolKind),
    AddMarker(MarkerId),
    RemoveMarker(MarkerId),
    AddPolyline(PolylineId),
    RemovePolyline(PolylineId),
    OpenPopup(PopupId),
    ClosePopup(PopupId),
    AddPanel(PanelId),
    RemovePanel(PanelId),
    SetCursor(Cursor),
}

/// In-Memory-Implementierung von [`MapSurface`].
#[derive(Debug, Default)]
pub struct MapScene {
    markers: IndexMap<MarkerId, SceneMarker>,
    polylines: IndexMap<PolylineId, PolylineSpec>,
    popups: IndexMap<PopupId, ScenePopup>,
    panels: IndexMap<PanelId, ScenePanel>,
    controls: IndexMap<ToolKind, ControlState>,
    subscribers: Vec<ToolKind>,
    cursor: Cursor,
    next_id: u64,
    journal: Vec<SurfaceOp>,
}

impl MapScene {
    const MAX_JOURNAL: usize = 4096;

    /// Erstellt eine leere Oberfläche.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, op: SurfaceOp) {
        if self.journal.len() >= Self::MAX_JOURNAL {
            self.journal.drain(..Self::MAX_JOURNAL / 2);
        }
        self.journal.push(op);
    }

    /// Alle Marker in Einfüge-Reihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &SceneMarker)> {
        self.markers.iter().map(|(id, m)| (*id, m))
    }

    /// Einzelner Marker.
    pub fn marker(&self, id: MarkerId) -> Option<&SceneMarker> {
        self.markers.get(&id)
    }

    /// Anzahl der Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl der Marker eines Werkzeugs.
    pub fn marker_count_for(&self, tool: ToolKind) -> usize {
        self.markers
            .values()
            .filter(|m| m.spec.binding.tool == tool)
            .count()
    }

    /// Alle Polylines in Einfüge-Reihenfolge.
    pub fn polylines(&self) -> impl Iterator<Item = (PolylineId, &PolylineSpec)> {
        self.polylines.iter().map(|(id, p)| (*id, p))
    }

    /// Einzelne Polyline.
    pub fn polyline(&self, id: PolylineId) -> Option<&PolylineSpec> {
        self.polylines.get(&id)
    }

    /// Anzahl der Polylines.
    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    /// Alle offenen Popups.
    pub fn popups(&self) -> impl Iterator<Item = (PopupId, &ScenePopup)> {
        self.popups.iter().map(|(id, p)| (*id, p))
    }

    /// Einzelnes Popup.
    pub fn popup(&self, id: PopupId) -> Option<&ScenePopup> {
        self.popups.get(&id)
    }

    /// Anzahl offener Popups.
    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    /// Alle Panels.
    pub fn panels(&self) -> impl Iterator<Item = (PanelId, &ScenePanel)> {
        self.panels.iter().map(|(id, p)| (*id, p))
    }

    /// Einzelnes Panel.
    pub fn panel(&self, id: PanelId) -> Option<&ScenePanel> {
        self.panels.get(&id)
    }

    /// Anzahl der Panels.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Aktueller Cursor-Stil.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Button-Zustand eines Werkzeugs (Default wenn nie gesetzt).
    pub fn control(&self, tool: ToolKind) -> ControlState {
        self.controls.get(&tool).cloned().unwrap_or_default()
    }

    /// `true` wenn keinerlei Werkzeug-Overlays vorhanden sind.
    pub fn is_clear(&self) -> bool {
        self.markers.is_empty()
            && self.polylines.is_empty()
            && self.popups.is_empty()
            && self.panels.is_empty()
    }

    /// Protokoll der Oberflächen-Operationen (älteste zuerst).
    pub fn journal(&self) -> &[SurfaceOp] {
        &self.journal
    }

    /// Leert das Operations-Protokoll.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// Nächster Marker innerhalb `radius` um `pos` (Hit-Test für Klick/Drag).
    pub fn marker_at(&self, pos: Waypoint, radius: f64) -> Option<MarkerId> {
        self.markers
            .iter()
            .map(|(id, m)| (*id, m.position.distance_to(pos)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }
}

impl MapSurface for MapScene {
    fn subscribe_click(&mut self, tool: ToolKind) {
        if !self.subscribers.contains(&tool) {
            self.subscribers.push(tool);
            self.record(SurfaceOp::Subscribe(tool));
        }
    }

    fn unsubscribe_click(&mut self, tool: ToolKind) {
        if let Some(pos) = self.subscribers.iter().position(|t| *t == tool) {
            self.subscribers.remove(pos);
            self.record(SurfaceOp::Unsubscribe(tool));
        }
    }

    fn click_subscribers(&self) -> Vec<ToolKind> {
        self.subscribers.clone()
    }

    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        let id = MarkerId(self.allocate_id());
        let position = spec.position;
        self.markers.insert(id, SceneMarker { spec, position });
        self.record(SurfaceOp::AddMarker(id));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if self.markers.shift_remove(&id).is_some() {
            self.record(SurfaceOp::RemoveMarker(id));
        } else {
            log::debug!("Marker {:?} nicht vorhanden, Entfernen ignoriert", id);
        }
    }

    fn set_marker_position(&mut self, id: MarkerId, position: Waypoint) {
        if let Some(marker) = self.markers.get_mut(&id) {
            marker.position = position;
        }
    }

    fn marker_binding(&self, id: MarkerId) -> Option<MarkerBinding> {
        self.markers.get(&id).map(|m| m.spec.binding)
    }

    fn add_polyline(&mut self, spec: PolylineSpec) -> PolylineId {
        let id = PolylineId(self.allocate_id());
        self.polylines.insert(id, spec);
        self.record(SurfaceOp::AddPolyline(id));
        id
    }

    fn set_polyline_points(&mut self, id: PolylineId, points: Vec<Waypoint>) {
        if let Some(line) = self.polylines.get_mut(&id) {
            line.points = points;
        }
    }

    fn remove_polyline(&mut self, id: PolylineId) {
        if self.polylines.shift_remove(&id).is_some() {
            self.record(SurfaceOp::RemovePolyline(id));
        }
    }

    fn open_popup(&mut self, position: Waypoint, content: InfoContent) -> PopupId {
        let id = PopupId(self.allocate_id());
        self.popups.insert(id, ScenePopup { position, content });
        self.record(SurfaceOp::OpenPopup(id));
        id
    }

    fn update_popup(&mut self, id: PopupId, position: Waypoint, content: InfoContent) {
        if let Some(popup) = self.popups.get_mut(&id) {
            popup.position = position;
            popup.content = content;
        }
    }

    fn close_popup(&mut self, id: PopupId) {
        if self.popups.shift_remove(&id).is_some() {
            self.record(SurfaceOp::ClosePopup(id));
        }
    }

    fn add_panel(&mut self, content: InfoContent, accent: PanelAccent) -> PanelId {
        let id = PanelId(self.allocate_id());
        self.panels.insert(id, ScenePanel { content, accent });
        self.record(SurfaceOp::AddPanel(id));
        id
    }

    fn update_panel(&mut self, id: PanelId, content: InfoContent) {
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.content = content;
        }
    }

    fn set_panel_accent(&mut self, id: PanelId, accent: PanelAccent) {
        if let Some(panel) = self.panels.get_mut(&id) {
            panel.accent = accent;
        }
    }

    fn remove_panel(&mut self, id: PanelId) {
        if self.panels.shift_remove(&id).is_some() {
            self.record(SurfaceOp::RemovePanel(id));
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.record(SurfaceOp::SetCursor(cursor));
    }

    fn set_control(&mut self, tool: ToolKind, state: ControlState) {
        self.controls.insert(tool, state);
    }
}
