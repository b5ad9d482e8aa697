//! Manipulation controls demo
//!
//! Replays a scripted pointer session against a single object and logs every
//! callback. Pass a RON configuration file as the first argument to try a
//! different handle layout.

use glam::Vec3;

use gizmo_controls::{Manipulator, ManipulatorCallbacks, TargetTransform};
use gizmo_core::{ConfigError, ControlsConfig, Ray};

/// Pointer events as the host would dispatch them
enum PointerEvent {
    Hover(Vec3),
    Press(Vec3),
    Move(Vec3),
    Release,
}

/// Fixed viewpoint the demo rays start from
const EYE: Vec3 = Vec3::new(1.5, 2.0, 3.0);

fn pointer_ray(look_at: Vec3) -> Ray {
    Ray::new(EYE, look_at - EYE)
}

fn main() -> Result<(), ConfigError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gizmo_demo=debug,gizmo_controls=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading controls config from {}", path);
            ControlsConfig::load(&path)?
        }
        None => ControlsConfig::default(),
    };

    let callbacks = ManipulatorCallbacks::new(
        |position| tracing::info!("onTranslate -> {}", position),
        |scale| tracing::info!("onScale -> {}", scale),
    );
    let mut manipulator: Manipulator = Manipulator::with_config(config, callbacks);

    let object = TargetTransform::default().shared();
    manipulator.set_target(&object);

    let script = [
        PointerEvent::Hover(Vec3::new(3.0, 3.0, 0.0)),
        PointerEvent::Hover(Vec3::new(0.3, 0.0, 0.0)),
        // Drag along X
        PointerEvent::Press(Vec3::new(0.3, 0.0, 0.0)),
        PointerEvent::Move(Vec3::new(0.8, 0.0, 0.0)),
        PointerEvent::Move(Vec3::new(1.2, 0.0, 0.0)),
        PointerEvent::Release,
        // Drag on the XY plane patch
        PointerEvent::Press(Vec3::new(1.0 + 0.25, 0.25, 0.0)),
        PointerEvent::Move(Vec3::new(0.5, 1.0, 0.0)),
        PointerEvent::Release,
        // Scale along Y
        PointerEvent::Press(Vec3::new(0.75, 1.2 + 0.65, 0.0)),
        PointerEvent::Move(Vec3::new(0.75, 2.4, 0.0)),
        PointerEvent::Release,
        // Press on empty space
        PointerEvent::Press(Vec3::new(-4.0, -4.0, 0.0)),
        PointerEvent::Release,
    ];

    for event in script {
        match event {
            PointerEvent::Hover(at) => match manipulator.pick(&pointer_ray(at)) {
                Some(hit) => {
                    let name = manipulator
                        .registry()
                        .get(hit.handle)
                        .map_or("?", |handle| handle.name);
                    tracing::info!("Hovering {} at {}", name, hit.point);
                }
                None => tracing::info!("Hovering nothing"),
            },
            PointerEvent::Press(at) => {
                let engaged = manipulator.begin_drag(&pointer_ray(at));
                tracing::info!("Press engaged handle: {}", engaged);
            }
            PointerEvent::Move(at) => {
                manipulator.update_drag(&pointer_ray(at));
            }
            PointerEvent::Release => manipulator.end_drag(),
        }
    }

    let transform = *object.lock();
    tracing::info!(
        "Final transform: position {} scale {}",
        transform.position,
        transform.scale
    );

    Ok(())
}
