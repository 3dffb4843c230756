//! Circular layout for presentation
//!
//! Vertices are placed counter-clockwise on the unit circle in ascending
//! order, the smallest at the bottom (angle -pi/2).

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::domain::graph::{Graph, Vertex};

/// Position in the plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Place every vertex of `graph` evenly on the unit circle
///
/// Vertex `i` in ascending order sits at angle `-pi/2 + 2*pi*i/n`.
/// The zero-vertex graph yields an empty mapping.
pub fn perfect_circle_layout(graph: &Graph) -> BTreeMap<Vertex, Point> {
    let n = graph.len() as f64;

    graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let angle = TAU * i as f64 / n - FRAC_PI_2;
            (
                v,
                Point {
                    x: angle.cos(),
                    y: angle.sin(),
                },
            )
        })
        .collect()
}
