//! Locomotion domain: system modules for the fixed-step loop.

pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod probes;

pub(crate) use controller::step_locomotion;
pub(crate) use input::sample_input;
pub(crate) use probes::refresh_contacts;
