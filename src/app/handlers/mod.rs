//! Feature-Handler: mutierende Use-Cases auf dem AppState.

pub mod editing;
pub mod persistence;
pub mod placement;
pub mod selection;
pub mod view;
