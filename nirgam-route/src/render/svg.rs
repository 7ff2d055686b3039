//! SVG export.
//!
//! Draws, bottom to top: floor, seats, exits, visibility edges, waypoint
//! nodes, occupants and their routes. Coordinates are layout units with y
//! growing downward, which matches SVG, so no transform is needed.

use std::path::Path;

use ::svg::Document;
use ::svg::node::element::{Circle, Group, Line, Polyline, Rectangle};

use crate::core::Rect;
use crate::graph::NavGraph;
use crate::layout::Layout;
use crate::router::Agent;

mod colors {
    pub const FLOOR: &str = "white";
    pub const SEAT_STROKE: &str = "black";
    pub const GOAL: &str = "red";
    pub const EDGE: &str = "black";
    pub const AGENT: &str = "blue";
    pub const ROUTE: &str = "red";
}

const NODE_RADIUS: f64 = 5.0;
const ROUTE_WIDTH: f64 = 10.0;
const ROUTE_OPACITY: f64 = 0.6;

fn rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.left())
        .set("y", rect.top())
        .set("width", rect.width)
        .set("height", rect.height)
}

/// Build an SVG document of the layout, graph and planned routes.
pub fn render_svg(layout: &Layout, graph: &NavGraph, agents: &[Agent]) -> Document {
    let (width, height) = (layout.width, layout.height);

    let mut seats = Group::new()
        .set("id", "seats")
        .set("fill", colors::FLOOR)
        .set("stroke", colors::SEAT_STROKE)
        .set("stroke-width", 1);
    for seat in layout.seats.iter().flatten() {
        seats = seats.add(rectangle(seat));
    }

    let mut goals = Group::new().set("id", "goals").set("fill", colors::GOAL);
    for goal in &layout.goals {
        goals = goals.add(rectangle(goal));
    }

    let mut edges = Group::new()
        .set("id", "edges")
        .set("stroke", colors::EDGE)
        .set("stroke-width", 1);
    for (from, targets) in graph.edges().iter().enumerate() {
        let p1 = graph.position(from);
        for &to in targets {
            let p2 = graph.position(to);
            edges = edges.add(
                Line::new()
                    .set("x1", p1.x)
                    .set("y1", p1.y)
                    .set("x2", p2.x)
                    .set("y2", p2.y),
            );
        }
    }

    let mut nodes = Group::new().set("id", "nodes");
    for node in graph.nodes() {
        nodes = nodes.add(
            Circle::new()
                .set("cx", node.position.x)
                .set("cy", node.position.y)
                .set("r", NODE_RADIUS)
                .set("fill", node.svg_color()),
        );
    }

    let mut occupants = Group::new().set("id", "occupants");
    for agent in agents {
        if agent.has_route() {
            let points = agent
                .path()
                .iter()
                .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            occupants = occupants.add(
                Polyline::new()
                    .set("points", points)
                    .set("fill", "none")
                    .set("stroke", colors::ROUTE)
                    .set("stroke-width", ROUTE_WIDTH)
                    .set("stroke-opacity", ROUTE_OPACITY),
            );
        }
        occupants = occupants.add(
            Circle::new()
                .set("cx", agent.position.x)
                .set("cy", agent.position.y)
                .set("r", agent.radius)
                .set("fill", "none")
                .set("stroke", colors::AGENT),
        );
    }

    Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", colors::FLOOR),
        )
        .add(seats)
        .add(goals)
        .add(edges)
        .add(nodes)
        .add(occupants)
}

/// Render and write an SVG file.
pub fn save_svg(
    path: &Path,
    layout: &Layout,
    graph: &NavGraph,
    agents: &[Agent],
) -> std::io::Result<()> {
    ::svg::save(path, &render_svg(layout, graph, agents))
}
