pub mod gaze;
pub mod launch;
pub mod messages;
pub mod noise;
pub mod particles;
pub mod rays;
pub mod rover;
pub mod shortcuts;
pub mod telemetry;
