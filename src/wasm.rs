//! Browser bindings.
//!
//! Values cross the boundary as plain JS objects through
//! `serde-wasm-bindgen`: locations are `{ lat, lng }`, strategies are the
//! tagged form of [`Strategy`], and outcomes are [`SolveOutcome`].

use wasm_bindgen::prelude::*;

use crate::distance::{haversine, total_distance};
use crate::models::{Location, SolveOutcome};
use crate::solver::Strategy;

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("invalid {what}: {e}")))
}

/// Solves `locations` with `strategy` and returns the outcome object.
#[wasm_bindgen]
pub fn solve(strategy: JsValue, locations: JsValue) -> Result<JsValue, JsValue> {
    let strategy: Strategy = from_js(strategy, "strategy")?;
    let locations: Vec<Location> = from_js(locations, "locations")?;

    let outcome: SolveOutcome = strategy
        .solve(&locations)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sum of haversine distances along `route`, in meters.
#[wasm_bindgen(js_name = totalDistance)]
pub fn total_distance_js(route: JsValue) -> Result<f64, JsValue> {
    let route: Vec<Location> = from_js(route, "route")?;
    Ok(total_distance(&route))
}

/// Great-circle distance between two locations, in meters.
#[wasm_bindgen(js_name = haversineDistance)]
pub fn haversine_distance_js(from: JsValue, to: JsValue) -> Result<f64, JsValue> {
    let from: Location = from_js(from, "location")?;
    let to: Location = from_js(to, "location")?;
    Ok(haversine(from, to))
}
