//! Load a model, flatten it and print what the viewer would draw.
//!
//! Shows the per-node world matrices, the scene bounds and where the orbit
//! camera ends up after framing.
//!
//! Usage:
//!   cargo run -p foxotron --example inspect_model --features assimp -- <model>

use std::error::Error;

use foxotron::{
    LoadOptions, Viewer, ViewerSettings,
    assimp::{AssimpSource, forward_importer_logs, supported_extensions},
    logging::{self, LogLevel},
};

fn main() -> Result<(), Box<dyn Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: inspect_model <model>");
        eprintln!("formats: {}", supported_extensions().join(", "));
        std::process::exit(2);
    };

    logging::attach_stderr_stream();
    if std::env::var_os("FOXOTRON_DEBUG").is_some() {
        logging::set_min_level(LogLevel::Debug);
        forward_importer_logs()?;
    }

    let mut viewer = Viewer::new(ViewerSettings::default(), LoadOptions::default())?;
    let model = viewer.load_model(&AssimpSource::new(&path))?;

    let stats = model.stats();
    println!("Loaded: {}", model.source().display());
    println!(
        "Nodes: {}  Meshes: {}  Materials: {}",
        stats.nodes, stats.meshes, stats.materials
    );
    println!(
        "Vertices: {}  Triangles: {}  Draw calls: {}",
        stats.vertices, stats.triangles, stats.draw_calls
    );
    println!("---");

    for node in model.nodes() {
        let depth = model.nodes().depth(node.id()).unwrap_or(0);
        let Some(world) = model.world_matrix(node.id()) else {
            continue;
        };
        let (scale, _rotation, translation) = world.to_scale_rotation_translation();
        println!(
            "{:indent$}{} meshes={} T=({:.3},{:.3},{:.3}) S=({:.3},{:.3},{:.3})",
            "",
            node.name(),
            node.num_meshes(),
            translation.x,
            translation.y,
            translation.z,
            scale.x,
            scale.y,
            scale.z,
            indent = depth * 2
        );
    }

    println!("---");
    match model.bounds() {
        Some(bounds) => println!(
            "Bounds: min ({:.3},{:.3},{:.3}) max ({:.3},{:.3},{:.3})",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        ),
        None => println!("Bounds: none (no geometry)"),
    }

    let camera = viewer.camera();
    let eye = camera.position();
    println!(
        "Camera: target ({:.3},{:.3},{:.3}) distance {:.3} eye ({:.3},{:.3},{:.3})",
        camera.target.x, camera.target.y, camera.target.z, camera.distance, eye.x, eye.y, eye.z
    );

    Ok(())
}
