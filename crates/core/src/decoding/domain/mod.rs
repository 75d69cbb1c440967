pub mod payload_decoder;
