// Composition root surface for the coffee catalog.
//
// - `state` holds the wired dependencies handlers pull from.
// - `http` maps the HTTP surface onto the use case handlers.

pub mod http;
pub mod state;
