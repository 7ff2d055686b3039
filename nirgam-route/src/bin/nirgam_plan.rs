//! Plan evacuation routes for a venue layout.
//!
//! Usage:
//!   nirgam-plan --layout hall.json --svg routes.svg
//!   nirgam-plan --layout hall.json --agent 120,340 --agent 600,80 --json
//!   nirgam-plan --layout hall.json --seat-agents --config configs/planner.yaml

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use nirgam_route::render::save_svg;
use nirgam_route::{
    Agent, Layout, OccupantOutcome, PlannerConfig, Point2D, Router, agents_in_front_of_seats,
};

/// Evacuation route planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Venue layout JSON file
    #[arg(short, long)]
    layout: PathBuf,

    /// Planner configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Occupant start position as X,Y (repeatable)
    #[arg(short, long, value_parser = parse_point)]
    agent: Vec<Point2D>,

    /// Place one occupant in front of every seat
    #[arg(long)]
    seat_agents: bool,

    /// Write an SVG of the layout, graph and routes
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the planned occupants as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X '{}': {}", x, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y '{}': {}", y, e))?;
    Ok(Point2D::new(x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    let layout = Layout::load(&args.layout)?;
    info!(
        "Loaded layout {}: {}x{}, {} seats, {} exits",
        args.layout.display(),
        layout.width,
        layout.height,
        layout.seat_count(),
        layout.goals.len()
    );

    let mut agents: Vec<Agent> = args
        .agent
        .iter()
        .map(|&p| Agent::with_config(p, &config))
        .collect();
    if args.seat_agents {
        agents.extend(agents_in_front_of_seats(&layout, &config));
    }
    if agents.is_empty() {
        agents.push(Agent::with_config(Point2D::new(300.0, 150.0), &config));
    }

    let mut router = Router::from_layout(&layout, config);
    info!(
        "Graph: {} nodes, {} visibility edges",
        router.graph().len(),
        router.graph().edge_count()
    );
    let report = router.plan(&mut agents)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
    } else {
        for (index, (agent, outcome)) in agents.iter().zip(&report.outcomes).enumerate() {
            match outcome {
                OccupantOutcome::Routed {
                    waypoints,
                    cost,
                    iterations,
                } => println!(
                    "#{} ({:.1}, {:.1}): {} waypoints, length {:.1}, {:.1}s walking, {} iterations",
                    index,
                    agent.position.x,
                    agent.position.y,
                    waypoints,
                    cost,
                    agent.travel_time(),
                    iterations
                ),
                OccupantOutcome::Unreachable(err) => println!(
                    "#{} ({:.1}, {:.1}): {}",
                    index, agent.position.x, agent.position.y, err
                ),
            }
        }
        println!(
            "{} of {} occupants routed",
            report.routed(),
            report.outcomes.len()
        );
    }

    if let Some(path) = &args.svg {
        save_svg(path, &layout, router.graph(), &agents)?;
        info!("Saved {}", path.display());
    }

    Ok(())
}
