pub mod trajectory;
pub mod params;
pub mod decay;
pub mod stepper;
pub mod sampler;
pub mod ground;
pub mod air;
pub mod scenario;
