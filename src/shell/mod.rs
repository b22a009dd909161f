// Composition root.
//
// - state: wires the in memory adapters into handlers.
// - http: the axum router.
// - identity / responses: request extraction and error mapping shared by the
//   inbound handlers.

pub mod http;
pub mod identity;
pub mod responses;
pub mod state;
