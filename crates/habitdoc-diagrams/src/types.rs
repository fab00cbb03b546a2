//! Diagram catalogue identifiers
//!
//! Each diagram has a fixed position in the report and is written as
//! `{index}_{name}.png`.

use std::fmt;
use std::str::FromStr;

use crate::error::DiagramError;

/// The fifteen report diagrams, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramKind {
    /// System architecture: React frontend, Spring Boot backend, MongoDB
    Architecture,
    /// Use case diagram for the end user
    UseCase,
    /// MongoDB collections and their relations
    ErDiagram,
    /// Authentication sequence
    Sequence,
    /// Backend classes around goals
    ClassDiagram,
    /// Frontend React components
    ComponentDiagram,
    /// Docker deployment
    DeploymentDiagram,
    /// Goal lifecycle states
    StateDiagram,
    /// Goal creation and daily tracking activity
    ActivityDiagram,
    /// Progress logging sequence
    SequenceProgress,
    /// Group creation and joining sequence
    SequenceGroup,
    /// REST API endpoint overview
    ApiEndpoints,
    /// Level 1 data flow diagram
    DataflowDiagram,
    /// Backend package structure
    PackageDiagram,
    /// React Router routes
    RoutingDiagram,
}

impl DiagramKind {
    /// All diagrams in report order
    pub fn all() -> &'static [DiagramKind] {
        &[
            Self::Architecture,
            Self::UseCase,
            Self::ErDiagram,
            Self::Sequence,
            Self::ClassDiagram,
            Self::ComponentDiagram,
            Self::DeploymentDiagram,
            Self::StateDiagram,
            Self::ActivityDiagram,
            Self::SequenceProgress,
            Self::SequenceGroup,
            Self::ApiEndpoints,
            Self::DataflowDiagram,
            Self::PackageDiagram,
            Self::RoutingDiagram,
        ]
    }

    /// 1-based position in the report
    pub fn index(self) -> usize {
        Self::all()
            .iter()
            .position(|k| *k == self)
            .map_or(0, |i| i + 1)
    }

    /// File stem suffix
    pub fn name(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::UseCase => "usecase",
            Self::ErDiagram => "er_diagram",
            Self::Sequence => "sequence",
            Self::ClassDiagram => "class_diagram",
            Self::ComponentDiagram => "component_diagram",
            Self::DeploymentDiagram => "deployment_diagram",
            Self::StateDiagram => "state_diagram",
            Self::ActivityDiagram => "activity_diagram",
            Self::SequenceProgress => "sequence_progress",
            Self::SequenceGroup => "sequence_group",
            Self::ApiEndpoints => "api_endpoints",
            Self::DataflowDiagram => "dataflow_diagram",
            Self::PackageDiagram => "package_diagram",
            Self::RoutingDiagram => "routing_diagram",
        }
    }

    /// Caption used in progress output
    pub fn caption(self) -> &'static str {
        match self {
            Self::Architecture => "Архітектура системи",
            Self::UseCase => "Діаграма прецедентів (Use Case)",
            Self::ErDiagram => "ER діаграма (модель даних MongoDB)",
            Self::Sequence => "Діаграма послідовності (автентифікація)",
            Self::ClassDiagram => "Діаграма класів (Backend)",
            Self::ComponentDiagram => "Діаграма компонентів (Frontend React)",
            Self::DeploymentDiagram => "Діаграма розгортання (Docker)",
            Self::StateDiagram => "Діаграма станів (Goal lifecycle)",
            Self::ActivityDiagram => "Діаграма діяльності (User flow)",
            Self::SequenceProgress => "Діаграма послідовності (логування прогресу)",
            Self::SequenceGroup => "Діаграма послідовності (створення групи)",
            Self::ApiEndpoints => "REST API endpoints структура",
            Self::DataflowDiagram => "Діаграма потоку даних (DFD)",
            Self::PackageDiagram => "Діаграма пакетів (Backend структура)",
            Self::RoutingDiagram => "Діаграма роутингу (React Router)",
        }
    }

    /// File stem, e.g. `3_er_diagram`
    pub fn file_stem(self) -> String {
        format!("{}_{}", self.index(), self.name())
    }

    /// Output file name, e.g. `3_er_diagram.png`
    pub fn file_name(self) -> String {
        format!("{}.png", self.file_stem())
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    /// Accepts a name (`er_diagram`), a file stem (`3_er_diagram`) or an
    /// index (`3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = key.strip_suffix(".png").unwrap_or(&key);

        if let Ok(index) = key.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::all().get(i))
                .copied()
                .ok_or_else(|| DiagramError::UnknownDiagram(s.to_string()));
        }

        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == key || kind.file_stem() == key)
            .ok_or_else(|| DiagramError::UnknownDiagram(s.to_string()))
    }
}
