use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

mod engine;
mod radio;
mod ui;

use constants::palette::NIGHT_SKY;
use constants::render_settings::{POST_SETTINGS, PostSettings};

use crate::engine::camera::orbit::{OrbitCamera, orbit_camera_controller};
use crate::engine::city::assets::CityAssets;
use crate::engine::city::building::{
    animate_edge_outlines, animate_halos, animate_light_beams, pulse_building_emission,
};
use crate::engine::city::cars::{advance_cars, animate_car_accessories, spawn_cars};
use crate::engine::city::layout::spawn_city;
use crate::engine::city::roads::RoadNetwork;
use crate::engine::core::quality::apply_quality_settings;
use crate::engine::core::window_config::create_window_config;
use crate::engine::effects::fireworks::update_fireworks;
use crate::engine::effects::fog::{animate_fog, spawn_fog};
use crate::engine::effects::starfield::{animate_starfield, spawn_starfield};
use crate::engine::render::post_processing::{spawn_post_camera, update_post_processing};
use crate::engine::scene::grid::{animate_ground_grid, spawn_ground_grid};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::sun::{animate_sun, spawn_sun};
use crate::engine::spatial::bounds::SpatialIndex;
use crate::engine::systems::telemetry::{
    FpsWindow, update_fps_counter, update_position_readout,
};
use crate::radio::now_playing::{
    NowPlaying, TrackLabelQueue, drain_track_labels, refresh_now_playing,
};
use crate::radio::stream::{RadioState, toggle_radio};
use crate::ui::hud::{
    animate_ribbon, spawn_hud, update_now_playing_text, update_radio_button_label,
};

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .insert_resource(ClearColor(Color::from(NIGHT_SKY)))
        .insert_resource(POST_SETTINGS)
        .insert_resource(RoadNetwork::generate())
        .init_resource::<SpatialIndex>()
        .init_resource::<OrbitCamera>()
        .init_resource::<FpsWindow>()
        .init_resource::<NowPlaying>()
        .init_resource::<TrackLabelQueue>()
        .init_resource::<RadioState>();

    app.add_systems(Startup, (setup, apply_quality_settings, spawn_hud));

    // Simulation order matters: metadata first, then scene animation, then
    // the camera and the post chain that reads its transform.
    app.add_systems(
        Update,
        (
            refresh_now_playing,
            drain_track_labels,
            pulse_building_emission,
            animate_light_beams,
            animate_edge_outlines,
            animate_halos,
            animate_ground_grid,
            animate_starfield,
            animate_fog,
            animate_sun,
            orbit_camera_controller,
            update_post_processing,
            update_fps_counter,
            update_position_readout,
            advance_cars,
            animate_car_accessories,
            update_fireworks,
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (
            toggle_radio,
            update_radio_button_label,
            update_now_playing_text,
            animate_ribbon,
        ),
    );

    app
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut index: ResMut<SpatialIndex>,
    roads: Res<RoadNetwork>,
    settings: Res<PostSettings>,
) {
    let mut rng = rand::rng();

    spawn_lighting(&mut commands);
    spawn_post_camera(&mut commands, &settings);

    let assets = CityAssets::load(&mut meshes, &mut materials);
    spawn_city(
        &mut commands,
        &mut meshes,
        &mut materials,
        &assets,
        &mut index,
        &mut rng,
    );
    spawn_cars(&mut commands, &mut materials, &assets, &roads, &mut rng);
    commands.insert_resource(assets);

    spawn_ground_grid(&mut commands, &mut meshes, &mut materials);
    spawn_sun(&mut commands, &mut meshes, &mut materials);
    spawn_starfield(&mut commands, &mut meshes, &mut materials, &mut rng);
    spawn_fog(&mut commands, &mut meshes, &mut materials, &mut rng);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
