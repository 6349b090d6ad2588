//! The symbol graph: typed Point/Line/Circle nodes stored in arenas, with
//! union-find merge history on the derived line and circle symbols.
//!
//! Lines and circles fold many collinearity/concyclicity facts into one
//! node. Merges only ever unite representatives; absorbed representatives
//! are kept as `fellows` so witness reconstruction can find the original
//! line or circle whose own justification is the tightest.

use std::collections::{BTreeMap, BTreeSet};

use thales_core::{ErrorInfo, ThalesError};
use thales_num::{CircleNum, IntersectError, LineNum, PointNum};

use crate::dependency::Dependency;

/// Identifier of a point symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(crate) u32);

/// Identifier of a line symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub(crate) u32);

/// Identifier of a circle symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CircleId(pub(crate) u32);

/// A named point with immutable coordinates.
#[derive(Debug, Clone)]
pub struct PointSym {
    /// Unique name of the point.
    pub name: String,
    /// Coordinates sampled or computed during construction.
    pub num: PointNum,
    /// Points this one was constructed from (ancestors in the problem).
    pub parents: Vec<PointId>,
}

/// A derived line symbol.
#[derive(Debug, Clone)]
pub struct LineSym {
    /// Synthetic display name.
    pub name: String,
    /// Numeric representation with canonical coefficient sign.
    pub num: LineNum,
    /// Points known to lie on the line.
    pub points: BTreeSet<PointId>,
    /// Union-find parent; equal to the own id for representatives.
    pub parent: LineId,
    /// Representatives absorbed into this one, in merge order.
    pub fellows: Vec<LineId>,
    /// Dependency that created the line, when there is one.
    pub origin: Option<Dependency>,
}

/// A derived circle symbol.
#[derive(Debug, Clone)]
pub struct CircleSym {
    /// Synthetic display name.
    pub name: String,
    /// Numeric representation.
    pub num: CircleNum,
    /// Points known to lie on the circle.
    pub points: BTreeSet<PointId>,
    /// Union-find parent; equal to the own id for representatives.
    pub parent: CircleId,
    /// Representatives absorbed into this one, in merge order.
    pub fellows: Vec<CircleId>,
    /// Dependency that created the circle, when there is one.
    pub origin: Option<Dependency>,
}

/// Arena-backed symbol graph indexed by name and type.
#[derive(Debug, Clone, Default)]
pub struct SymbolsGraph {
    points: Vec<PointSym>,
    lines: Vec<LineSym>,
    circles: Vec<CircleSym>,
    point_names: BTreeMap<String, PointId>,
}

/// Outcome of folding a collinearity or concyclicity fact into the graph.
#[derive(Debug, Clone, Default)]
pub struct FoldOutcome<I> {
    /// The symbol now carrying the fact, when a fold happened.
    pub target: Option<I>,
    /// Representatives that were absorbed while folding.
    pub merged: Vec<I>,
}

impl SymbolsGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a point; names are unique and coordinates immutable.
    pub fn add_point(
        &mut self,
        name: &str,
        num: PointNum,
        parents: &[PointId],
    ) -> Result<PointId, ThalesError> {
        if self.point_names.contains_key(name) {
            return Err(ThalesError::Symbols(
                ErrorInfo::new("duplicate-point", "point already present")
                    .with_context("name", name),
            ));
        }
        let id = PointId(self.points.len() as u32);
        self.points.push(PointSym {
            name: name.to_string(),
            num,
            parents: parents.to_vec(),
        });
        self.point_names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Looks a point up by name.
    pub fn point_by_name(&self, name: &str) -> Option<PointId> {
        self.point_names.get(name).copied()
    }

    /// The point record behind an id.
    pub fn point(&self, id: PointId) -> &PointSym {
        &self.points[id.0 as usize]
    }

    /// All point ids in creation order.
    pub fn point_ids(&self) -> Vec<PointId> {
        (0..self.points.len() as u32).map(PointId).collect()
    }

    /// All point names in lexicographic order.
    pub fn point_names_sorted(&self) -> Vec<String> {
        self.point_names.keys().cloned().collect()
    }

    /// Number of points in the graph.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Sorts point ids by their names (the canonical statement order).
    pub fn sort_by_name(&self, ids: &mut [PointId]) {
        ids.sort_by(|a, b| self.point(*a).name.cmp(&self.point(*b).name));
    }

    /// The line record behind an id.
    pub fn line(&self, id: LineId) -> &LineSym {
        &self.lines[id.0 as usize]
    }

    /// The circle record behind an id.
    pub fn circle(&self, id: CircleId) -> &CircleSym {
        &self.circles[id.0 as usize]
    }

    /// Union-find representative of a line, with path compression.
    pub fn line_rep(&mut self, id: LineId) -> LineId {
        let parent = self.lines[id.0 as usize].parent;
        if parent == id {
            return id;
        }
        let root = self.line_rep(parent);
        self.lines[id.0 as usize].parent = root;
        root
    }

    /// Union-find representative of a circle, with path compression.
    pub fn circle_rep(&mut self, id: CircleId) -> CircleId {
        let parent = self.circles[id.0 as usize].parent;
        if parent == id {
            return id;
        }
        let root = self.circle_rep(parent);
        self.circles[id.0 as usize].parent = root;
        root
    }

    /// All line representatives, in creation order.
    pub fn line_roots(&self) -> Vec<LineId> {
        (0..self.lines.len() as u32)
            .map(LineId)
            .filter(|id| self.lines[id.0 as usize].parent == *id)
            .collect()
    }

    /// All circle representatives, in creation order.
    pub fn circle_roots(&self) -> Vec<CircleId> {
        (0..self.circles.len() as u32)
            .map(CircleId)
            .filter(|id| self.circles[id.0 as usize].parent == *id)
            .collect()
    }

    /// Returns an existing line whose point set contains both points, or
    /// creates the line through them.
    pub fn line_thru_pair(&mut self, p1: PointId, p2: PointId) -> LineId {
        for id in self.line_roots() {
            let line = &self.lines[id.0 as usize];
            if line.points.contains(&p1) && line.points.contains(&p2) {
                return id;
            }
        }
        let num = LineNum::through(&self.point(p1).num, &self.point(p2).num);
        let name = format!("{}{}", self.point(p1).name, self.point(p2).name);
        self.new_line(name, num, [p1, p2].into_iter().collect(), None)
    }

    /// Returns an existing circle through the three points, or creates one.
    pub fn circle_thru_triplet(
        &mut self,
        p1: PointId,
        p2: PointId,
        p3: PointId,
    ) -> Result<CircleId, IntersectError> {
        for id in self.circle_roots() {
            let circle = &self.circles[id.0 as usize];
            if [p1, p2, p3].iter().all(|p| circle.points.contains(p)) {
                return Ok(id);
            }
        }
        let num = CircleNum::through(&self.point(p1).num, &self.point(p2).num, &self.point(p3).num)?;
        let name = format!(
            "({}{}{})",
            self.point(p1).name,
            self.point(p2).name,
            self.point(p3).name
        );
        Ok(self.new_circle(name, num, [p1, p2, p3].into_iter().collect(), None))
    }

    /// Whether the points are known to share a line.
    pub fn check_coll(&self, points: &[PointId]) -> bool {
        self.line_roots().into_iter().any(|id| {
            let line = &self.lines[id.0 as usize];
            points.iter().all(|p| line.points.contains(p))
        })
    }

    /// Whether the points are known to share a circle.
    pub fn check_cyclic(&self, points: &[PointId]) -> bool {
        self.circle_roots().into_iter().any(|id| {
            let circle = &self.circles[id.0 as usize];
            points.iter().all(|p| circle.points.contains(p))
        })
    }

    /// Records that the points are collinear, merging every line sharing
    /// two of them into one representative.
    pub fn make_coll(&mut self, points: &[PointId], dep: &Dependency) -> FoldOutcome<LineId> {
        let mut set: BTreeSet<PointId> = points.iter().copied().collect();
        let mut merge = Vec::new();
        for id in self.line_roots() {
            let line = &self.lines[id.0 as usize];
            if set.iter().all(|p| line.points.contains(p)) {
                return FoldOutcome {
                    target: Some(id),
                    merged: Vec::new(),
                };
            }
            if set.intersection(&line.points).count() >= 2 {
                set.extend(line.points.iter().copied());
                merge.push(id);
            }
        }
        let num = LineNum::through(&self.point(points[0]).num, &self.point(points[1]).num);
        let name = format!(
            "line/{}/",
            points
                .iter()
                .map(|p| self.point(*p).name.clone())
                .collect::<Vec<_>>()
                .join("-")
        );
        let target = self.new_line(name, num, set, Some(dep.clone()));
        for other in &merge {
            self.lines[other.0 as usize].parent = target;
            self.lines[target.0 as usize].fellows.push(*other);
        }
        FoldOutcome {
            target: Some(target),
            merged: merge,
        }
    }

    /// Records that the points are concyclic, merging every circle sharing
    /// three of them into one representative.
    pub fn make_cyclic(
        &mut self,
        points: &[PointId],
        dep: &Dependency,
    ) -> Result<FoldOutcome<CircleId>, IntersectError> {
        let mut set: BTreeSet<PointId> = points.iter().copied().collect();
        let mut merge = Vec::new();
        for id in self.circle_roots() {
            let circle = &self.circles[id.0 as usize];
            if set.iter().all(|p| circle.points.contains(p)) {
                return Ok(FoldOutcome {
                    target: Some(id),
                    merged: Vec::new(),
                });
            }
            if set.intersection(&circle.points).count() >= 3 {
                set.extend(circle.points.iter().copied());
                merge.push(id);
            }
        }
        let num = CircleNum::through(
            &self.point(points[0]).num,
            &self.point(points[1]).num,
            &self.point(points[2]).num,
        )?;
        let name = format!(
            "circle({})",
            points
                .iter()
                .map(|p| self.point(*p).name.clone())
                .collect::<Vec<_>>()
                .join("")
        );
        let target = self.new_circle(name, num, set, Some(dep.clone()));
        for other in &merge {
            self.circles[other.0 as usize].parent = target;
            self.circles[target.0 as usize].fellows.push(*other);
        }
        Ok(FoldOutcome {
            target: Some(target),
            merged: merge,
        })
    }

    /// Origin of the tightest line witnessing the collinearity: among the
    /// representative and its fellows whose point sets contain the query,
    /// the one with the fewest points. `None` when the points share no line.
    pub fn why_coll(&self, points: &[PointId]) -> Option<Option<Dependency>> {
        for id in self.line_roots() {
            let line = &self.lines[id.0 as usize];
            if !points.iter().all(|p| line.points.contains(p)) {
                continue;
            }
            let mut target = line;
            for fellow in &line.fellows {
                let candidate = &self.lines[fellow.0 as usize];
                if points.iter().all(|p| candidate.points.contains(p))
                    && candidate.points.len() < target.points.len()
                {
                    target = candidate;
                }
            }
            return Some(target.origin.clone());
        }
        None
    }

    /// Circle analogue of [`SymbolsGraph::why_coll`].
    pub fn why_cyclic(&self, points: &[PointId]) -> Option<Option<Dependency>> {
        for id in self.circle_roots() {
            let circle = &self.circles[id.0 as usize];
            if !points.iter().all(|p| circle.points.contains(p)) {
                continue;
            }
            let mut target = circle;
            for fellow in &circle.fellows {
                let candidate = &self.circles[fellow.0 as usize];
                if points.iter().all(|p| candidate.points.contains(p))
                    && candidate.points.len() < target.points.len()
                {
                    target = candidate;
                }
            }
            return Some(target.origin.clone());
        }
        None
    }

    fn new_line(
        &mut self,
        name: String,
        num: LineNum,
        points: BTreeSet<PointId>,
        origin: Option<Dependency>,
    ) -> LineId {
        let id = LineId(self.lines.len() as u32);
        self.lines.push(LineSym {
            name,
            num,
            points,
            parent: id,
            fellows: Vec::new(),
            origin,
        });
        id
    }

    fn new_circle(
        &mut self,
        name: String,
        num: CircleNum,
        points: BTreeSet<PointId>,
        origin: Option<Dependency>,
    ) -> CircleId {
        let id = CircleId(self.circles.len() as u32);
        self.circles.push(CircleSym {
            name,
            num,
            points,
            parent: id,
            fellows: Vec::new(),
            origin,
        });
        id
    }
}
