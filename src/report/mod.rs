//! Report model: every naming/serialization directive resolved for every
//! concept of a model.

use crate::annotations::{self, strict};
use crate::concepts::{Annotated, Model};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectivesView {
    pub http_name: String,
    pub json_name: String,
    pub json_read_only: bool,
    pub json_default: String,
    pub json_required: bool,
    pub json_context: Vec<String>,
    pub go_name: String,
}

impl DirectivesView {
    pub fn resolve<C: Annotated + ?Sized>(concept: &C) -> Self {
        Self {
            http_name: annotations::http_name(concept),
            json_name: annotations::json_name(concept),
            json_read_only: annotations::json_read_only(concept),
            json_default: annotations::json_default(concept),
            json_required: annotations::json_required(concept),
            json_context: annotations::json_context(concept),
            go_name: annotations::go_name(concept),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptKind {
    Type,
    Attribute,
    Method,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptView {
    /// `Type` or `Type.member`.
    pub path: String,
    pub kind: ConceptKind,
    /// Annotation names in written order.
    pub annotations: Vec<String>,
    pub directives: DirectivesView,
    /// Directive parameters that are present but unreadable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub concepts: Vec<ConceptView>,
    pub totals: TotalsView,
}

impl ReportData {
    /// True when a directive holds a value of the wrong type. Gates `--strict`.
    pub fn has_problems(&self) -> bool {
        self.totals.problems > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsView {
    pub concepts: usize,
    pub annotated: usize,
    pub problems: usize,
}

fn view<C: Annotated + ?Sized>(
    path: String,
    kind: ConceptKind,
    annotation_names: Vec<String>,
    concept: &C,
) -> ConceptView {
    let problems: Vec<String> = strict::check_directives(concept)
        .into_iter()
        .map(|e| e.to_string())
        .collect();
    for p in &problems {
        log::warn!("{}: {}", path, p);
    }
    ConceptView {
        directives: DirectivesView::resolve(concept),
        path,
        kind,
        annotations: annotation_names,
        problems,
    }
}

fn names(list: &[crate::concepts::Annotation]) -> Vec<String> {
    list.iter().map(|a| a.name().to_string()).collect()
}

/// Resolve every concept in model order: each type, then its attributes,
/// methods and enum values.
pub fn build_report_data(model: &Model) -> ReportData {
    let mut concepts = Vec::new();
    for ty in &model.types {
        concepts.push(view(
            ty.name.clone(),
            ConceptKind::Type,
            names(&ty.annotations),
            ty,
        ));
        for attr in &ty.attributes {
            concepts.push(view(
                format!("{}.{}", ty.name, attr.name),
                ConceptKind::Attribute,
                names(&attr.annotations),
                attr,
            ));
        }
        for method in &ty.methods {
            concepts.push(view(
                format!("{}.{}", ty.name, method.name),
                ConceptKind::Method,
                names(&method.annotations),
                method,
            ));
        }
        for value in &ty.values {
            concepts.push(view(
                format!("{}.{}", ty.name, value.name),
                ConceptKind::Value,
                names(&value.annotations),
                value,
            ));
        }
    }

    let totals = TotalsView {
        concepts: concepts.len(),
        annotated: concepts.iter().filter(|c| !c.annotations.is_empty()).count(),
        problems: concepts.iter().map(|c| c.problems.len()).sum(),
    };
    log::debug!(
        "resolved {} concepts ({} annotated, {} problems)",
        totals.concepts,
        totals.annotated,
        totals.problems
    );

    ReportData { concepts, totals }
}
