//! crates/dz_pipeline/src/validate.rs
//! Save-time checks on a zone list before it becomes the live snapshot.
//! Deterministic output: issues are sorted by code, then location, then message.

use std::collections::BTreeSet;

use dz_core::geometry::ring_is_closed;
use dz_core::{TimeInterval, Weekday, Zone, ZoneGeometry, ZoneId};

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Where the issue occurred.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityRef {
    Zone(ZoneId),
    Window(ZoneId, Weekday),
    Ring { zone: ZoneId, polygon: usize, ring: usize },
}

/// One validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub where_: EntityRef,
}

/// pass = no Error issues.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub pass: bool,
    pub issues: Vec<ValidationIssue>,
}

pub fn validate_zones(zones: &[Zone]) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    issues.extend(check_names(zones));
    issues.extend(check_duplicate_ids(zones));
    for z in zones {
        issues.extend(check_windows(z));
        issues.extend(check_geometry(&z.id, &z.geometry));
    }

    sort_issues_stably(&mut issues);

    ValidationReport {
        pass: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
    }
}

// ------------------------------------------------------------------------------------------------
// Checks
// ------------------------------------------------------------------------------------------------

fn check_names(zones: &[Zone]) -> Vec<ValidationIssue> {
    zones
        .iter()
        .filter(|z| z.name.trim().is_empty())
        .map(|z| ValidationIssue {
            severity: Severity::Error,
            code: "Zone.NameEmpty",
            message: "zone name must not be empty".into(),
            where_: EntityRef::Zone(z.id.clone()),
        })
        .collect()
}

fn check_duplicate_ids(zones: &[Zone]) -> Vec<ValidationIssue> {
    let mut seen: BTreeSet<&ZoneId> = BTreeSet::new();
    let mut out = Vec::new();
    for (i, z) in zones.iter().enumerate() {
        if !seen.insert(&z.id) {
            out.push(ValidationIssue {
                severity: Severity::Error,
                code: "Zone.DuplicateId",
                message: format!("id repeated at position {i}"),
                where_: EntityRef::Zone(z.id.clone()),
            });
        }
    }
    out
}

fn check_windows(z: &Zone) -> Vec<ValidationIssue> {
    let mut out = Vec::new();
    for (&day, list) in &z.windows {
        let at = || EntityRef::Window(z.id.clone(), day);

        if list.windows(2).any(|p| p[0].start() > p[1].start()) {
            out.push(ValidationIssue {
                severity: Severity::Warning,
                code: "Window.Unsorted",
                message: format!("{day} windows are not in ascending start order"),
                where_: at(),
            });
        }

        let mut sorted = list.clone();
        sorted.sort_unstable();
        // Running max end catches a long window overlapping a later, non-adjacent one.
        let mut reach: Option<TimeInterval> = None;
        for w in &sorted {
            match reach {
                Some(prev) => {
                    if prev.overlaps(w) {
                        out.push(ValidationIssue {
                            severity: Severity::Error,
                            code: "Window.Overlap",
                            message: format!("{day} window {w} overlaps {prev}"),
                            where_: at(),
                        });
                    }
                    if w.end() > prev.end() {
                        reach = Some(*w);
                    }
                }
                None => reach = Some(*w),
            }
        }
    }
    out
}

fn check_geometry(id: &ZoneId, g: &ZoneGeometry) -> Vec<ValidationIssue> {
    let mut out = Vec::new();
    if g.polygons().is_empty() {
        out.push(ValidationIssue {
            severity: Severity::Error,
            code: "Geometry.Empty",
            message: format!("{} has no polygons", g.kind()),
            where_: EntityRef::Zone(id.clone()),
        });
        return out;
    }
    for (pi, poly) in g.polygons().iter().enumerate() {
        for (ri, ring) in poly.rings.iter().enumerate() {
            let at = || EntityRef::Ring { zone: id.clone(), polygon: pi, ring: ri };
            if ring.len() < 4 {
                out.push(ValidationIssue {
                    severity: Severity::Error,
                    code: "Geometry.RingTooShort",
                    message: format!("ring has {} positions, a closed ring needs at least 4", ring.len()),
                    where_: at(),
                });
            }
            if !ring.is_empty() && !ring_is_closed(ring) {
                out.push(ValidationIssue {
                    severity: Severity::Warning,
                    code: "Geometry.RingOpen",
                    message: "first and last positions differ".into(),
                    where_: at(),
                });
            }
        }
    }
    out
}

fn sort_issues_stably(issues: &mut [ValidationIssue]) {
    issues.sort_by(|a, b| {
        a.code
            .cmp(b.code)
            .then_with(|| a.where_.cmp(&b.where_))
            .then_with(|| a.message.cmp(&b.message))
    });
}
