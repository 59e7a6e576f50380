pub mod panel;
pub mod curves_vis;
pub mod air_vis;
