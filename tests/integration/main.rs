//! Integration tests against the public API of `platformer_kit`.

mod jump_timing;
mod patrol_scenario;
mod state_transitions;
