//! Port definitions for the interactive controller.
//!
//! Interfaces between the controller and the shell that displays frames.

pub mod presenter_port;
