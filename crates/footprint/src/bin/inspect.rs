//! Summarise a footprint response without rendering it.
//!
//! Builds every face into an in-memory host and prints, per room type, the
//! faces that were built with their atlas regions and tile scale.
//!
//! Run: `cargo run -p footprint --features cli --bin inspect -- <response.json>`

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use footprint::{AtlasRegion, Construction, RecordingHost, Response};

#[derive(Parser)]
#[command(about = "Summarise building footprint geometry")]
struct CliArgs {
    /// Response JSON file.
    input: PathBuf,

    /// Also list every face.
    #[arg(long)]
    faces: bool,

    /// Decode a single base64 face instead of reading a response.
    #[arg(long, conflicts_with = "faces")]
    raw: bool,
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    let result = if args.raw {
        inspect_raw(&args)
    } else {
        inspect_response(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Treat the input file as a single base64 face.
fn inspect_raw(args: &CliArgs) -> footprint::Result<()> {
    let encoded = std::fs::read_to_string(&args.input).map_err(|source| footprint::Error::Io {
        path: args.input.display().to_string(),
        source,
    })?;
    let face = footprint_decode::build_face(encoded.trim())?;

    println!(
        "{} vertices, regions {}, tile scale {}x{}",
        face.vertex_count(),
        region_summary(&face.regions),
        face.tile_scale.horizontal,
        face.tile_scale.vertical
    );
    Ok(())
}

fn inspect_response(args: &CliArgs) -> footprint::Result<()> {
    let response = Response::load(&args.input)?;
    println!(
        "success={} code={} buildings={} faces={}",
        response.success,
        response.code,
        response.data.len(),
        response.face_count()
    );

    let mut host = RecordingHost::new();
    let mut construction = Construction::new();
    let report = construction.build(&response, &mut host, &"atlas".to_owned());

    for (root, node) in host.roots() {
        let faces: Vec<_> = host.children(root).collect();
        let regions: Vec<AtlasRegion> = faces
            .iter()
            .filter_map(|(_, face)| face.geometry.as_ref())
            .flat_map(|geometry| geometry.regions.iter().copied())
            .collect();
        println!(
            "{}: {} faces, regions {}",
            node.name,
            faces.len(),
            region_summary(&regions)
        );

        if args.faces {
            for (_, face) in &faces {
                let Some(geometry) = &face.geometry else {
                    continue;
                };
                println!(
                    "  {}: {} vertices, tile scale {}x{}",
                    face.name,
                    geometry.vertex_count(),
                    geometry.tile_scale.horizontal,
                    geometry.tile_scale.vertical
                );
            }
        }
    }

    for failure in &report.failures {
        println!("skipped {failure}");
    }

    if let Some((min, max)) = report.bounds {
        println!("bounds {min} .. {max}");
    }

    construction.release(&mut host);
    Ok(())
}

fn region_summary(regions: &[AtlasRegion]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for region in regions {
        let name = match region {
            AtlasRegion::Cap => "cap",
            AtlasRegion::SideA => "side-a",
            AtlasRegion::SideB => "side-b",
        };
        *counts.entry(name).or_default() += 1;
    }

    if counts.is_empty() {
        return "none".to_owned();
    }
    counts
        .iter()
        .map(|(name, count)| format!("{name}={count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
