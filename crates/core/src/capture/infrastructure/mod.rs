pub mod nokhwa_source;
