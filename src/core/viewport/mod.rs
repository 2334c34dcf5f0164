pub mod viewport_transform;
