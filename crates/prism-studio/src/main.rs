use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use prism_paint::logging::{LoggingConfig, init_logging};
use prism_paint::{Color, ColorStop, LinearGradient, Paint, PaintTransition, TransitionConfig};

/// Plays a paint transition and prints every frame.
#[derive(Parser, Debug)]
#[command(name = "prism-studio", version)]
struct Args {
    /// Scene file (JSON). A built-in scene is used when omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Frame interval in milliseconds.
    #[arg(short, long, default_value_t = 16)]
    frame_ms: u64,

    /// Log filter, e.g. "debug" or "prism_paint=trace".
    #[arg(long)]
    log: Option<String>,
}

/// A transition between two paints, as stored on disk.
#[derive(Debug, Deserialize)]
struct Scene {
    from: Paint,
    to: Paint,
    #[serde(default)]
    transition: TransitionConfig,
}

impl Scene {
    fn builtin() -> Self {
        Self {
            from: Paint::solid(Color::from_rgb(255, 0, 0)),
            to: Paint::from(LinearGradient::new(vec![
                ColorStop::new(0.0, Color::from_rgb(0, 0, 255)),
                ColorStop::new(0.5, Color::from_rgb(0, 255, 128)),
                ColorStop::new(1.0, Color::TRANSPARENT),
            ])),
            transition: TransitionConfig::default(),
        }
    }

    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scene {}", path.display()))
    }
}

fn stop_list(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| format!("{:.2}:{}", s.offset, s.color))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(paint: &Paint) -> String {
    match paint {
        Paint::Solid(c) => format!("solid {c}"),
        Paint::LinearGradient(g) => format!("linear [{}]", stop_list(&g.sorted_stops())),
        Paint::RadialGradient(g) => format!("radial [{}]", stop_list(&g.stops)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::builtin(),
    };
    log::info!(
        "playing {} -> {} over {} ms",
        scene.from.kind(),
        scene.to.kind(),
        scene.transition.duration_ms
    );

    let frame = Duration::from_millis(args.frame_ms.max(1));
    let mut transition =
        PaintTransition::between(scene.from.clone(), scene.to.clone(), scene.transition);

    let mut index = 0u64;
    let mut skipped = 0u64;
    loop {
        // Frame 0 shows the starting paint.
        let dt = if index == 0 { Duration::ZERO } else { frame };
        match transition.frame(dt, &scene.from, &scene.to) {
            Some(paint) => println!(
                "{index:>4}  {:.3}  {}",
                transition.eased_progress(),
                describe(&paint)
            ),
            None => skipped += 1,
        }
        if transition.is_finished() {
            break;
        }
        index += 1;
    }

    if skipped > 0 {
        log::warn!("{skipped} frame(s) skipped");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Scene {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bundled_scenes_parse() {
        let fade = parse(include_str!("../scenes/fade_out.json"));
        assert_eq!(fade.transition.duration_ms, 200);
        assert_eq!(fade.to, Paint::transparent());

        let swap = parse(include_str!("../scenes/gradient_swap.json"));
        assert!(matches!(swap.from, Paint::LinearGradient(_)));
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("prism-studio-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("prism-studio-no-such-scene.json");
        let err = Scene::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("reading scene"), "{err:#}");
    }

    #[test]
    fn load_reports_bad_json() {
        let path = scratch_file("broken.json", r##"{ "from": { "solid": "#FF0000" }, "to": "#"##);
        let err = Scene::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("parsing scene"), "{err:#}");
        assert!(err.root_cause().is::<serde_json::Error>());
    }

    #[test]
    fn load_reads_scene_file() {
        let path = scratch_file("fade.json", include_str!("../scenes/fade_out.json"));
        let scene = Scene::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(scene.from, Paint::solid(Color::from_rgb(255, 0, 0)));
    }

    #[test]
    fn missing_transition_uses_defaults() {
        let scene = parse(r##"{ "from": { "solid": "#FF0000" }, "to": { "solid": "#0000FF" } }"##);
        assert_eq!(scene.transition, TransitionConfig::default());
    }

    #[test]
    fn builtin_scene_plays_to_target() {
        let scene = Scene::builtin();
        let mut transition =
            PaintTransition::between(scene.from.clone(), scene.to.clone(), scene.transition);
        let mut last = None;
        while !transition.is_finished() {
            last = transition.frame(Duration::from_millis(16), &scene.from, &scene.to);
        }
        assert_eq!(last, Some(scene.to));
    }

    #[test]
    fn describe_prints_hex_stops() {
        let paint = Paint::from(LinearGradient::new(vec![
            ColorStop::new(1.0, Color::from_rgb(0, 0, 255)),
            ColorStop::new(0.0, Color::from_rgb(255, 0, 0)),
        ]));
        assert_eq!(describe(&paint), "linear [0.00:#FFFF0000 1.00:#FF0000FF]");
        assert_eq!(describe(&Paint::transparent()), "solid #00000000");
    }
}
