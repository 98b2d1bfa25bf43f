//! Walks through every predicate with a handful of fixed inputs.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=geopred=debug cargo run --example walkthrough   # show rejected cells
//! ```

use geopred::math::{Point2, Point2i, Point3, Vector3};
use geopred::{
    circle_inside_circle, king_move_number, point_in_circle, point_in_rectangle,
    point_on_segment, point_relative_to_line, ray_intersects_sphere, Ray,
};
use tracing::{info, warn};

fn main() {
    // Default: WARN for everything, INFO for the walkthrough itself.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let origin = Point2::origin();

    info!(
        inside = point_in_circle(&origin, 5.0, &Point2::new(3.0, 4.0)),
        "point (3, 4) vs circle r=5 at origin"
    );
    info!(
        on_segment = point_on_segment(&origin, &Point2::new(4.0, 2.0), &Point2::new(2.0, 1.0)),
        "point (2, 1) vs segment (0, 0) → (4, 2)"
    );
    info!(
        contained = circle_inside_circle(&Point2::new(2.0, 0.0), 1.0, &origin, 3.0),
        "circle r=1 at (2, 0) vs circle r=3 at origin"
    );

    let side = point_relative_to_line(&origin, &Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0));
    info!(?side, signum = side.signum(), "point (0, 1) vs line (0, 0) → (1, 0)");

    info!(
        inside = point_in_rectangle(
            &Point2::new(0.0, 10.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(5.0, 5.0)
        ),
        "point (5, 5) vs rectangle (0, 10)-(10, 0)"
    );

    for (start, end) in [((3, 1), (6, 3)), ((0, 1), (2, 2))] {
        let start = Point2i::new(start.0, start.1);
        let end = Point2i::new(end.0, end.1);
        match king_move_number(&start, &end) {
            Ok(moves) => info!(%start, %end, moves, "king moves"),
            Err(err) => warn!(%start, %end, %err, "king moves"),
        }
    }

    let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::z());
    info!(
        hit = ray_intersects_sphere(&ray, &Point3::origin(), 1.0),
        "ray from (0, 0, -10) along +z vs unit sphere at origin"
    );
}
