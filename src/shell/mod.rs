// Composition root for the meal journal service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
