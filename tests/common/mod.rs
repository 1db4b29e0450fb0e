#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a character record pointing back at `base` for its references.
pub fn character_json(base: &str, id: u64, name: &str, species_ids: &[u64]) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{base}/planets/1/"),
        "films": [format!("{base}/films/1/")],
        "species": species_ids
            .iter()
            .map(|s| format!("{base}/species/{s}/"))
            .collect::<Vec<_>>(),
        "vehicles": [],
        "starships": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("{base}/people/{id}/")
    })
}

pub fn planet_json(base: &str, id: u64, name: &str, population: &str) -> Value {
    json!({
        "name": name,
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": population,
        "residents": [],
        "films": [],
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-20T20:58:18.411000Z",
        "url": format!("{base}/planets/{id}/")
    })
}

/// Mounts one page of the character list at `GET /people/?page=N`.
pub async fn mount_people_page(
    server: &MockServer,
    page: u32,
    count: u64,
    results: Vec<Value>,
) {
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "previous": null,
            "results": results,
        })))
        .mount(server)
        .await;
}

/// Mounts a failing page at `GET /people/?page=N`.
pub async fn mount_failing_page(server: &MockServer, page: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub async fn mount_planet(server: &MockServer, id: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/planets/{id}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// A batch of `n` characters named `{prefix}-{i}` with sequential ids
/// starting at `first_id`.
pub fn character_batch(base: &str, prefix: &str, first_id: u64, n: u64) -> Vec<Value> {
    (0..n)
        .map(|i| character_json(base, first_id + i, &format!("{prefix}-{i}"), &[]))
        .collect()
}
