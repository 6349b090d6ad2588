//! The construction definition registry: a closed set of clause shapes,
//! each contributing a numeric sketch and the basic premises it pins the
//! new points with.

use std::collections::BTreeMap;

use thales_core::{ErrorInfo, RngHandle, ThalesError};
use thales_lang::Clause;
use thales_num::{CircleNum, LineNum, PointNum};

use crate::sketch::{self, Constraint};

/// Numeric coordinates for the clause's new points plus the basic premise
/// sentences (as token vectors) that pin them.
pub(crate) struct SketchedClause {
    pub(crate) coords: Vec<(String, PointNum)>,
    pub(crate) basics: Vec<Vec<String>>,
}

/// Sketches one clause. `Ok(None)` is a recoverable numeric failure (the
/// builder resamples the whole diagram); errors are structural and final.
pub(crate) fn sketch_clause(
    clause: &Clause,
    known: &BTreeMap<String, PointNum>,
    rng: &mut RngHandle,
) -> Result<Option<SketchedClause>, ThalesError> {
    let first = clause
        .constructions
        .first()
        .ok_or_else(|| structural("clause-empty", "clause has no construction", clause))?;
    if is_direct(&first.name) {
        if clause.constructions.len() != 1 {
            return Err(structural(
                "clause-overconstrained",
                "direct constructions cannot be combined",
                clause,
            ));
        }
        sketch_direct(clause, known, rng)
    } else {
        sketch_constrained(clause, known, rng)
    }
}

fn is_direct(name: &str) -> bool {
    matches!(
        name,
        "free"
            | "segment"
            | "triangle"
            | "midpoint"
            | "foot"
            | "circle"
            | "circumcenter"
            | "incenter"
            | "excenter"
            | "orthocenter"
            | "centroid"
    )
}

fn sketch_direct(
    clause: &Clause,
    known: &BTreeMap<String, PointNum>,
    rng: &mut RngHandle,
) -> Result<Option<SketchedClause>, ThalesError> {
    let construction = &clause.constructions[0];
    let existing: Vec<PointNum> = known.values().copied().collect();
    let point_names = declared(clause, construction)?;
    let arg = |index: usize| resolve(construction.args.get(index), known, clause);

    let sketched = match construction.name.as_str() {
        "free" => {
            expect_points(clause, 1)?;
            let p = sketch::sample_free(rng, &existing);
            p.map(|p| SketchedClause {
                coords: vec![(point_names[0].clone(), p)],
                basics: Vec::new(),
            })
        }
        "segment" => {
            expect_points(clause, 2)?;
            let a = sketch::sample_free(rng, &existing);
            let b = a.and_then(|a| {
                let mut seen = existing.clone();
                seen.push(a);
                sketch::sample_free(rng, &seen)
            });
            match (a, b) {
                (Some(a), Some(b)) => Some(SketchedClause {
                    coords: vec![(point_names[0].clone(), a), (point_names[1].clone(), b)],
                    basics: Vec::new(),
                }),
                _ => None,
            }
        }
        "triangle" => {
            expect_points(clause, 3)?;
            sketch::sample_triangle(rng).map(|[a, b, c]| SketchedClause {
                coords: vec![
                    (point_names[0].clone(), a),
                    (point_names[1].clone(), b),
                    (point_names[2].clone(), c),
                ],
                basics: Vec::new(),
            })
        }
        "midpoint" => {
            expect_points(clause, 1)?;
            let (a, b) = (arg(1)?, arg(2)?);
            Some(SketchedClause {
                coords: vec![(point_names[0].clone(), a.midpoint(&b))],
                basics: vec![tokens(&["midp"], &construction.args)],
            })
        }
        "foot" => {
            expect_points(clause, 1)?;
            let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
            let x = &construction.args[0];
            Some(SketchedClause {
                coords: vec![(point_names[0].clone(), sketch::foot(&a, &b, &c))],
                basics: vec![
                    strs(&[
                        "coll",
                        x,
                        &construction.args[2],
                        &construction.args[3],
                    ]),
                    strs(&[
                        "perp",
                        &construction.args[1],
                        x,
                        &construction.args[2],
                        &construction.args[3],
                    ]),
                ],
            })
        }
        "circle" | "circumcenter" => {
            expect_points(clause, 1)?;
            let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
            sketch::circumcenter(&a, &b, &c).map(|center| SketchedClause {
                coords: vec![(point_names[0].clone(), center)],
                basics: vec![tokens(&["circle"], &construction.args)],
            })
        }
        "incenter" => {
            expect_points(clause, 1)?;
            let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
            sketch::incenter(&a, &b, &c).map(|center| SketchedClause {
                coords: vec![(point_names[0].clone(), center)],
                basics: bisector_basics(&construction.args),
            })
        }
        "excenter" => {
            expect_points(clause, 1)?;
            let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
            sketch::excenter(&a, &b, &c).map(|center| SketchedClause {
                coords: vec![(point_names[0].clone(), center)],
                basics: bisector_basics(&construction.args),
            })
        }
        "orthocenter" => {
            expect_points(clause, 1)?;
            let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
            let h = &construction.args[0];
            sketch::orthocenter(&a, &b, &c).map(|center| SketchedClause {
                coords: vec![(point_names[0].clone(), center)],
                basics: vec![
                    strs(&[
                        "perp",
                        h,
                        &construction.args[1],
                        &construction.args[2],
                        &construction.args[3],
                    ]),
                    strs(&[
                        "perp",
                        h,
                        &construction.args[2],
                        &construction.args[3],
                        &construction.args[1],
                    ]),
                ],
            })
        }
        "centroid" => {
            expect_points(clause, 4)?;
            let (a, b, c) = (arg(4)?, arg(5)?, arg(6)?);
            let (x, y, z, i) = (
                &construction.args[0],
                &construction.args[1],
                &construction.args[2],
                &construction.args[3],
            );
            let (an, bn, cn) = (
                &construction.args[4],
                &construction.args[5],
                &construction.args[6],
            );
            Some(SketchedClause {
                coords: vec![
                    (point_names[0].clone(), b.midpoint(&c)),
                    (point_names[1].clone(), c.midpoint(&a)),
                    (point_names[2].clone(), a.midpoint(&b)),
                    (point_names[3].clone(), (a + b + c) / 3.0),
                ],
                basics: vec![
                    strs(&["midp", x, bn, cn]),
                    strs(&["midp", y, cn, an]),
                    strs(&["midp", z, an, bn]),
                    strs(&["coll", i, an, x]),
                    strs(&["coll", i, bn, y]),
                ],
            })
        }
        other => {
            return Err(structural(
                "unknown-construction",
                &format!("construction `{other}` is not defined"),
                clause,
            ))
        }
    };
    Ok(sketched)
}

fn sketch_constrained(
    clause: &Clause,
    known: &BTreeMap<String, PointNum>,
    rng: &mut RngHandle,
) -> Result<Option<SketchedClause>, ThalesError> {
    expect_points(clause, 1)?;
    let target = &clause.points[0];
    let existing: Vec<PointNum> = known.values().copied().collect();
    let mut constraints = Vec::new();
    let mut basics = Vec::new();
    for construction in &clause.constructions {
        if construction.args.first() != Some(target) {
            return Err(structural(
                "constraint-target",
                "constrained constructions must name the clause point first",
                clause,
            ));
        }
        let arg = |index: usize| resolve(construction.args.get(index), known, clause);
        match construction.name.as_str() {
            "on_line" => {
                let (a, b) = (arg(1)?, arg(2)?);
                constraints.push(Constraint::OnLine(LineNum::through(&a, &b)));
                basics.push(tokens(&["coll"], &construction.args));
            }
            "on_tline" => {
                let (p, a, b) = (arg(1)?, arg(2)?, arg(3)?);
                constraints.push(Constraint::OnLine(
                    LineNum::through(&a, &b).perpendicular_line(&p),
                ));
                basics.push(tokens(&["perp"], &construction.args));
            }
            "on_pline" => {
                let (p, a, b) = (arg(1)?, arg(2)?, arg(3)?);
                constraints.push(Constraint::OnLine(
                    LineNum::through(&a, &b).parallel_line(&p),
                ));
                basics.push(tokens(&["para"], &construction.args));
            }
            "on_circle" => {
                let (o, a) = (arg(1)?, arg(2)?);
                constraints.push(Constraint::OnCircle(CircleNum::new(o, o.distance(&a))));
                basics.push(strs(&[
                    "cong",
                    &construction.args[1],
                    &construction.args[0],
                    &construction.args[1],
                    &construction.args[2],
                ]));
            }
            "on_bline" => {
                let (a, b) = (arg(1)?, arg(2)?);
                let midpoint = a.midpoint(&b);
                constraints.push(Constraint::OnLine(
                    LineNum::through(&a, &b).perpendicular_line(&midpoint),
                ));
                basics.push(strs(&[
                    "cong",
                    target,
                    &construction.args[1],
                    target,
                    &construction.args[2],
                ]));
            }
            "eqdistance" => {
                let (a, b, c) = (arg(1)?, arg(2)?, arg(3)?);
                constraints.push(Constraint::OnCircle(CircleNum::new(a, b.distance(&c))));
                basics.push(tokens(&["cong"], &construction.args));
            }
            other => {
                return Err(structural(
                    "unknown-construction",
                    &format!("construction `{other}` is not defined"),
                    clause,
                ))
            }
        }
    }
    let Some(coords) = sketch::reduce(&constraints, &existing, rng) else {
        return Ok(None);
    };
    Ok(Some(SketchedClause {
        coords: vec![(target.clone(), coords)],
        basics,
    }))
}

/// The three internal/external bisector facts shared by the incenter and
/// excenter definitions; the numerically anchored angle equations keep the
/// two apart even though the statements agree modulo pi.
fn bisector_basics(args: &[String]) -> Vec<Vec<String>> {
    let (x, a, b, c) = (&args[0], &args[1], &args[2], &args[3]);
    vec![
        strs(&["eqangle", a, b, a, x, a, x, a, c]),
        strs(&["eqangle", b, c, b, x, b, x, b, a]),
        strs(&["eqangle", c, a, c, x, c, x, c, b]),
    ]
}

fn declared<'c>(
    clause: &'c Clause,
    construction: &thales_lang::Sentence,
) -> Result<&'c [String], ThalesError> {
    for (index, point) in clause.points.iter().enumerate() {
        if construction.args.get(index) != Some(point) {
            return Err(structural(
                "declared-points",
                "construction arguments must start with the declared points",
                clause,
            ));
        }
    }
    Ok(&clause.points)
}

fn expect_points(clause: &Clause, count: usize) -> Result<(), ThalesError> {
    if clause.points.len() != count {
        return Err(structural(
            "declared-points",
            &format!("construction declares {count} points"),
            clause,
        ));
    }
    Ok(())
}

fn resolve(
    token: Option<&String>,
    known: &BTreeMap<String, PointNum>,
    clause: &Clause,
) -> Result<PointNum, ThalesError> {
    let token = token.ok_or_else(|| structural("missing-argument", "construction argument missing", clause))?;
    known.get(token).copied().ok_or_else(|| {
        structural(
            "unknown-reference",
            &format!("construction references unknown point `{token}`"),
            clause,
        )
    })
}

fn structural(code: &str, message: &str, clause: &Clause) -> ThalesError {
    ThalesError::Construction(
        ErrorInfo::new(code, message).with_context("points", clause.points.join(" ")),
    )
}

fn tokens(prefix: &[&str], args: &[String]) -> Vec<String> {
    prefix
        .iter()
        .map(|s| s.to_string())
        .chain(args.iter().cloned())
        .collect()
}

fn strs(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}
