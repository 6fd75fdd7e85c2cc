//! Headless demo: a cow crosses a pressure plate and sets off an infection.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::info;
use outbreak::services::Notifier;
use outbreak::{
    init_logging, ActorState, Collider, ExecutionMode, PressurePlate, PressurePlatePlugin,
    ScoreService, Scoreboard, ScreenShake, ShakeService, SpriteKey, Tint, ToggleBehaviour,
    Zombifiable, ZombifiablePlugin, ZombifiableSettings, GROUND_MOVEMENT_SOLID,
};

/// Headless Outbreak simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 200)]
    ticks: u32,
    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
    /// JSON file overriding actor timing and tints
    #[arg(long)]
    settings: Option<PathBuf>,
}

/// Score service that reports to the log.
#[derive(Debug, Default)]
struct LoggedScore {
    tracked: usize,
}

impl ScoreService for LoggedScore {
    fn register_actor(&mut self, actor: Entity) {
        self.tracked += 1;
        info!("score: tracking {actor} ({} actors)", self.tracked);
    }

    fn unregister_actor(&mut self, actor: Entity) {
        self.tracked = self.tracked.saturating_sub(1);
        info!("score: dropped {actor} ({} actors)", self.tracked);
    }

    fn update_ui(&mut self) {
        info!("score: display refreshed");
    }
}

/// Shake service that reports to the log.
#[derive(Debug, Default)]
struct LoggedShake;

impl ShakeService for LoggedShake {
    fn shake(&mut self) {
        info!("shake!");
    }
}

/// Moves an entity at constant speed.
#[derive(Component, Debug)]
struct Walker(Vec2);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn walk(time: Res<Time>, mut walkers: Query<(&Walker, &mut Transform)>) {
    for (walker, mut transform) in &mut walkers {
        transform.translation += (walker.0 * time.delta_secs()).extend(0.0);
    }
}

/// Any pressed plate releases the infection on every healthy actor.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn infect_from_plates(
    time: Res<Time>,
    execution: Res<ExecutionMode>,
    plates: Query<&PressurePlate>,
    mut score: Option<ResMut<Scoreboard>>,
    mut shake: Option<ResMut<ScreenShake>>,
    mut actors: Query<&mut Zombifiable>,
) {
    if !plates.iter().any(PressurePlate::is_pressed) {
        return;
    }
    let mut notifier = Notifier::from_resources(score.as_deref_mut(), shake.as_deref_mut());
    for mut actor in &mut actors {
        if actor.state() == ActorState::Normal {
            actor.set_state(
                ActorState::Infected,
                time.elapsed_secs(),
                *execution,
                &mut notifier,
            );
        }
    }
}

fn spawn_scene(world: &mut World, settings: &ZombifiableSettings) -> Result<()> {
    let sprite = world.spawn(Tint::default()).id();
    let actor = Zombifiable::builder()
        .behaviour(ActorState::Normal, ToggleBehaviour::new("graze"))
        .behaviour(ActorState::Infected, ToggleBehaviour::new("shamble"))
        .behaviour(ActorState::Immune, ToggleBehaviour::new("wander"))
        .timing(settings.timing())
        .palette(settings.palette())
        .switching_locked(settings.switching_locked)
        .coloured_sprite(sprite)
        .build()
        .context("building the actor")?;
    world.spawn((actor, Transform::from_xyz(-5.0, 3.0, 0.0)));

    let plate = PressurePlate::builder()
        .shape(Collider::rectangle(Vec2::splat(1.0), GROUND_MOVEMENT_SOLID))
        .pressed_sprite(SpriteKey::new("triggers/plate_down.png"))
        .depressed_sprite(SpriteKey::new("triggers/plate_up.png"))
        .build()
        .context("building the pressure plate")?;
    world.spawn((plate, Transform::default()));

    world.spawn((
        Collider::rectangle(Vec2::splat(0.8), GROUND_MOVEMENT_SOLID),
        Walker(Vec2::new(1.0, 0.0)),
        Transform::from_xyz(-4.0, 0.0, 0.0),
        Name::new("Cow"),
    ));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = match &args.settings {
        Some(path) => ZombifiableSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ZombifiableSettings::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins((ZombifiablePlugin, PressurePlatePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            args.tick_ms,
        )))
        .insert_resource(Scoreboard::new(LoggedScore::default()))
        .insert_resource(ScreenShake::new(LoggedShake))
        .add_systems(Update, (walk, infect_from_plates).chain());

    spawn_scene(app.world_mut(), &settings)?;

    for _ in 0..args.ticks {
        app.update();
    }
    info!("simulation finished after {} ticks", args.ticks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak::StateTiming;

    fn app_in(mode: ExecutionMode) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins((ZombifiablePlugin, PressurePlatePlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(mode)
            .add_systems(Update, infect_from_plates);
        let world = app.world_mut();
        world.spawn((test_utils::plate(), Transform::default()));
        world.spawn((
            Collider::rectangle(Vec2::splat(0.8), GROUND_MOVEMENT_SOLID),
            Transform::default(),
        ));
        let actor = world
            .spawn(test_utils::actor(StateTiming::default(), None))
            .id();
        (app, actor)
    }

    fn enabled(app: &App, actor: Entity) -> (ActorState, Vec<ActorState>) {
        let zombifiable = app
            .world()
            .get::<Zombifiable>(actor)
            .unwrap_or_else(|| panic!("actor missing Zombifiable"));
        (
            zombifiable.state(),
            zombifiable.behaviours().enabled_states().collect(),
        )
    }

    #[test]
    fn pressed_plate_infects_using_the_app_execution_mode() {
        let (mut play, play_actor) = app_in(ExecutionMode::Play);
        let (mut edit, edit_actor) = app_in(ExecutionMode::Edit);
        for _ in 0..5 {
            play.update();
            edit.update();
        }

        assert_eq!(
            enabled(&play, play_actor),
            (ActorState::Infected, vec![ActorState::Infected])
        );
        assert_eq!(enabled(&edit, edit_actor), (ActorState::Infected, vec![]));
    }
}
