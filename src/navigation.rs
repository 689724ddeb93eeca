//! Section navigation
//!
//! A small state machine over the dashboard's named sections. Exactly one
//! section is active at a time. Selecting a section deactivates every
//! section, activates the target and reports which refreshes the caller
//! should run. The navigator itself never touches charts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Named page sections
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    WellLogs,
    DrillingRisk,
    GeoSteering,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::WellLogs,
        Section::DrillingRisk,
        Section::GeoSteering,
    ];

    /// Element ID of the section container (also the nav link fragment)
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::WellLogs => "well-logs",
            Section::DrillingRisk => "drilling-risk",
            Section::GeoSteering => "geo-steering",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::WellLogs => "Well Logs",
            Section::DrillingRisk => "Drilling Risk",
            Section::GeoSteering => "Geo-Steering",
        }
    }

    /// Refreshes triggered when this section becomes active
    pub fn refresh_actions(&self) -> &'static [RefreshAction] {
        match self {
            Section::Dashboard => &[],
            Section::WellLogs => &[RefreshAction::WellLogChart],
            Section::DrillingRisk => &[RefreshAction::RiskCharts],
            Section::GeoSteering => &[RefreshAction::Scene3d, RefreshAction::TrajectoryChart],
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Section-specific refresh requested by a transition
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshAction {
    WellLogChart,
    RiskCharts,
    Scene3d,
    TrajectoryChart,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("section '{0}' is not present in the page markup")]
    NotInMarkup(Section),
}

/// Tracks which section is visible
#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<Section>,
    active: Section,
}

impl Navigator {
    /// Start from the markup's section list and its initially active section.
    ///
    /// If the markup marks a section that it does not list, the first listed
    /// section is used instead; with an empty list the dashboard is assumed.
    pub fn new(sections: &[Section], initially_active: Section) -> Self {
        let mut sections = sections.iter().fold(Vec::new(), |mut acc, s| {
            if !acc.contains(s) {
                acc.push(*s);
            }
            acc
        });
        if sections.is_empty() {
            sections.push(Section::Dashboard);
        }
        let active = if sections.contains(&initially_active) {
            initially_active
        } else {
            sections[0]
        };
        Self { sections, active }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Activate `target` and return the refreshes it triggers.
    ///
    /// Re-selecting the active section still returns its refreshes.
    pub fn show(&mut self, target: Section) -> Result<&'static [RefreshAction], NavigationError> {
        if !self.sections.contains(&target) {
            return Err(NavigationError::NotInMarkup(target));
        }
        debug!(from = %self.active, to = %target, "Section transition");
        self.active = target;
        Ok(target.refresh_actions())
    }

    /// `(section, active)` pairs in markup order
    pub fn visibility(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        self.sections.iter().map(move |s| (*s, *s == self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> Navigator {
        Navigator::new(&Section::ALL, Section::Dashboard)
    }

    #[test]
    fn test_parse_section_ids() {
        assert_eq!("well-logs".parse::<Section>(), Ok(Section::WellLogs));
        assert_eq!("#drilling-risk".parse::<Section>(), Ok(Section::DrillingRisk));
        assert!("reports".parse::<Section>().is_err());
    }

    #[test]
    fn test_exactly_one_active_after_transition() {
        let mut nav = navigator();
        let actions = nav.show(Section::DrillingRisk).unwrap();
        assert_eq!(actions, &[RefreshAction::RiskCharts]);

        let active: Vec<_> = nav.visibility().filter(|(_, on)| *on).collect();
        assert_eq!(active, vec![(Section::DrillingRisk, true)]);
    }

    #[test]
    fn test_geo_steering_refreshes_scene_and_trajectory() {
        let mut nav = navigator();
        let actions = nav.show(Section::GeoSteering).unwrap();
        assert_eq!(
            actions,
            &[RefreshAction::Scene3d, RefreshAction::TrajectoryChart]
        );
    }

    #[test]
    fn test_missing_section_is_rejected_without_state_change() {
        let mut nav = Navigator::new(&[Section::Dashboard, Section::WellLogs], Section::WellLogs);
        let err = nav.show(Section::GeoSteering).unwrap_err();
        assert_eq!(err, NavigationError::NotInMarkup(Section::GeoSteering));
        assert!(nav.is_active(Section::WellLogs));
    }

    #[test]
    fn test_initial_section_falls_back_to_first_listed() {
        let nav = Navigator::new(&[Section::WellLogs, Section::DrillingRisk], Section::Dashboard);
        assert_eq!(nav.active(), Section::WellLogs);
    }
}
