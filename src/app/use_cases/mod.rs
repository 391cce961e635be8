//! Use-Cases: zustandsmutierende Fachlogik, von Handlern aufgerufen.

pub mod camera;
pub mod file_io;
pub mod selection;
pub mod viewport;
