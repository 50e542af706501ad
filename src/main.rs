//! edge-router: route a TOML scene and print an SVG preview
//!
//! ```text
//! edge-router scene.toml > scene.svg
//! edge-router --plane xz --scale 60 scene.toml > top.svg
//! cat scene.toml | edge-router --points --divisions 4
//! ```

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use edge_router::{
    render_svg, route_scene, route_scene_file, Projection, RenderConfig, RoutedEdge, SvgConfig,
};

#[derive(Parser)]
#[command(name = "edge-router")]
#[command(about = "Route edges between anchored nodes and preview them as SVG")]
struct Cli {
    /// Scene file (TOML); stdin when omitted
    scene: Option<PathBuf>,

    /// Print each edge's sampled polyline instead of SVG
    #[arg(short, long)]
    points: bool,

    /// Samples per path segment, for every edge (clamped to 65536)
    #[arg(short, long, value_name = "N")]
    divisions: Option<usize>,

    /// Pixels per scene unit
    #[arg(short, long, value_name = "PX")]
    scale: Option<f64>,

    /// Plane the preview is drawn on
    #[arg(long, value_enum, default_value_t = Plane::Xy)]
    plane: Plane,
}

#[derive(Clone, Copy, ValueEnum)]
enum Plane {
    Xy,
    Xz,
    Zy,
}

impl From<Plane> for Projection {
    fn from(plane: Plane) -> Self {
        match plane {
            Plane::Xy => Projection::Xy,
            Plane::Xz => Projection::Xz,
            Plane::Zy => Projection::Zy,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.scene.is_none() && io::stdin().is_terminal() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let mut svg = SvgConfig::new().with_projection(cli.plane.into());
    if let Some(scale) = cli.scale {
        svg = svg.with_scale(scale);
    }
    let mut config = RenderConfig::new().with_svg(svg);
    if let Some(divisions) = cli.divisions {
        config = config.with_divisions(divisions);
    }

    let routed = match cli.scene.as_deref() {
        Some(path) => route_scene_file(path, &config),
        None => match read_stdin() {
            Ok(source) => route_scene(&source, &config),
            Err(e) => {
                eprintln!("Error reading scene from stdin: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let (scene, routed) = match routed {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.points {
        print_points(&routed);
    } else {
        println!("{}", render_svg(&scene, &routed, &config.svg));
    }
    ExitCode::SUCCESS
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_points(edges: &[RoutedEdge]) {
    for edge in edges {
        match &edge.label {
            Some(label) => println!("# edge {} ({})", edge.index, label),
            None => println!("# edge {}", edge.index),
        }
        for p in &edge.geometry.polyline {
            println!("{:.4} {:.4} {:.4}", p.x, p.y, p.z);
        }
        let label = edge.geometry.label;
        println!("label {:.4} {:.4} {:.4}", label.x, label.y, label.z);
    }
}

fn print_usage() {
    println!(
        r#"edge-router - route edges between anchored nodes

    edge-router [--points] [--divisions N] [--scale PX] [--plane xy|xz|zy] [SCENE]
    cat scene.toml | edge-router

A scene is a TOML file:

    [style]
    routing = "smooth_step"    # straight | step | smooth_step | bezier

    [[nodes]]
    id = "a"
    position = {{ x = 0.0, y = 0.0, z = 0.0 }}

    [[nodes]]
    id = "b"
    position = {{ x = 4.0, y = 2.0 }}

    [[edges]]
    from = "a"
    to = "b"
    from_side = "right"        # left | right | top | bottom | front | back | center
    to_side = "left"
    label = "calls"

Run with --help for all options."#
    );
}
