pub mod orbit_tracer;
