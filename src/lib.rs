pub mod icon_pipeline;
pub mod logger;
