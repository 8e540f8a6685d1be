/// Application layer - Views, their state and the navigation shell
///
/// This layer drives the outbound ports: views fetch through the API ports,
/// keep their state in the `view_state` types and describe themselves as
/// read models for the renderers.
pub mod factories;
pub mod read_models;
pub mod routes;
pub mod view_state;
pub mod views;
