use wasm_bindgen::prelude::*;

mod bodies;
mod command;
mod controls;
mod game;
mod orbit;
mod preset;
mod view;
use game::SolarSystem;

orrery_web::export_simulation!(SolarSystem, "solar-system");
