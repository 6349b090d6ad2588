use thales_num::{
    circle_circle_intersection, close_enough, line_circle_intersection, line_line_intersection,
    CircleNum, IntersectError, LineNum, PointNum,
};

#[test]
fn line_coefficients_use_canonical_sign() {
    let p1 = PointNum::new(0.0, 0.0);
    let p2 = PointNum::new(1.0, 1.0);
    let forward = LineNum::through(&p1, &p2);
    let backward = LineNum::through(&p2, &p1);
    let (a, b, _) = forward.coefficients();
    assert!(a > 0.0 || (a == 0.0 && b < 0.0));
    assert!(forward.is_same(&backward));
    assert_eq!(forward.coefficients(), backward.coefficients());
}

#[test]
fn perpendicular_and_parallel_lines_relate_to_their_base() {
    let base = LineNum::through(&PointNum::new(0.0, 0.0), &PointNum::new(2.0, 1.0));
    let p = PointNum::new(-1.0, 3.0);
    let parallel = base.parallel_line(&p);
    let perpendicular = base.perpendicular_line(&p);
    assert!(base.is_parallel(&parallel));
    assert!(base.is_perp(&perpendicular));
    assert!(parallel.contains(&p));
    assert!(perpendicular.contains(&p));
}

#[test]
fn parallel_lines_do_not_intersect() {
    let base = LineNum::through(&PointNum::new(0.0, 0.0), &PointNum::new(1.0, 2.0));
    let shifted = base.parallel_line(&PointNum::new(5.0, 0.0));
    assert_eq!(
        line_line_intersection(&base, &shifted),
        Err(IntersectError::InvalidLineIntersect)
    );
}

#[test]
fn line_line_intersection_solves_generic_crossings() {
    let l1 = LineNum::through(&PointNum::new(0.0, 0.0), &PointNum::new(1.0, 1.0));
    let l2 = LineNum::through(&PointNum::new(0.0, 1.0), &PointNum::new(1.0, 0.0));
    let p = line_line_intersection(&l1, &l2).unwrap();
    assert!(p.close(&PointNum::new(0.5, 0.5)));
}

#[test]
fn line_circle_intersection_misses_distant_circles() {
    let line = LineNum::through(&PointNum::new(0.0, 5.0), &PointNum::new(1.0, 5.0));
    let circle = CircleNum::new(PointNum::new(0.0, 0.0), 1.0);
    assert_eq!(
        line_circle_intersection(&line, &circle),
        Err(IntersectError::InvalidQuadSolve)
    );
}

#[test]
fn line_circle_intersection_finds_both_roots() {
    let line = LineNum::through(&PointNum::new(-2.0, 0.0), &PointNum::new(2.0, 0.0));
    let circle = CircleNum::new(PointNum::new(0.0, 0.0), 1.0);
    let (p, q) = line_circle_intersection(&line, &circle).unwrap();
    let mut xs = [p.x, q.x];
    xs.sort_by(f64::total_cmp);
    assert!(close_enough(xs[0], -1.0));
    assert!(close_enough(xs[1], 1.0));
    assert!(close_enough(p.y, 0.0));
    assert!(close_enough(q.y, 0.0));
}

#[test]
fn circle_circle_intersection_requires_overlap() {
    let c1 = CircleNum::new(PointNum::new(0.0, 0.0), 1.0);
    let c2 = CircleNum::new(PointNum::new(10.0, 0.0), 1.0);
    assert_eq!(
        circle_circle_intersection(&c1, &c2),
        Err(IntersectError::InvalidQuadSolve)
    );

    let c3 = CircleNum::new(PointNum::new(1.0, 0.0), 1.0);
    let (p, q) = circle_circle_intersection(&c1, &c3).unwrap();
    assert!(close_enough(p.distance(&c1.center), 1.0));
    assert!(close_enough(q.distance(&c3.center), 1.0));
}

#[test]
fn circle_through_collinear_points_is_degenerate() {
    let p1 = PointNum::new(0.0, 0.0);
    let p2 = PointNum::new(1.0, 1.0);
    let p3 = PointNum::new(2.0, 2.0);
    assert!(CircleNum::through(&p1, &p2, &p3).is_err());
}

#[test]
fn circumcircle_reaches_all_three_points() {
    let p1 = PointNum::new(0.0, 0.0);
    let p2 = PointNum::new(2.0, 0.0);
    let p3 = PointNum::new(0.0, 2.0);
    let circle = CircleNum::through(&p1, &p2, &p3).unwrap();
    assert!(circle.contains(&p1));
    assert!(circle.contains(&p2));
    assert!(circle.contains(&p3));
}

#[test]
fn foot_lies_on_the_line_and_drops_perpendicularly() {
    let line = LineNum::through(&PointNum::new(0.0, 0.0), &PointNum::new(4.0, 2.0));
    let p = PointNum::new(1.0, 3.0);
    let foot = p.foot(&line);
    assert!(line.contains(&foot));
    let drop = LineNum::through(&p, &foot);
    assert!(line.is_perp(&drop));
}

#[test]
fn direction_turns_identifies_parallel_and_perpendicular() {
    let base = LineNum::through(&PointNum::new(0.0, 0.0), &PointNum::new(1.0, 3.0));
    let parallel = base.parallel_line(&PointNum::new(2.0, -1.0));
    let perpendicular = base.perpendicular_line(&PointNum::new(2.0, -1.0));
    let d = |l: &LineNum| l.direction_turns();
    let wrap = |x: f64| {
        let r = x.rem_euclid(1.0);
        r.min(1.0 - r)
    };
    assert!(wrap(d(&base) - d(&parallel)) < 1e-9);
    assert!(wrap(d(&base) - d(&perpendicular) - 0.5) < 1e-9);
}
