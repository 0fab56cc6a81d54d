// Application layer: front ends that drive the core.

pub mod interactive;
