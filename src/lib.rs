// Corkboard: a job board with classifier-suggested categories.
//
// This is the library root. Each module corresponds to a major subsystem:
// classify/ is the text classification pipeline, jobs/ the listings store,
// web/ the Axum frontend.

pub mod classify;
pub mod config;
pub mod jobs;
pub mod output;
pub mod web;
