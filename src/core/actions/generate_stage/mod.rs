pub mod generate_stage_rayon;
pub mod stage;
