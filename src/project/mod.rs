pub mod discovery;
pub mod materializer;
pub mod tcl;

pub use discovery::find_vivado_hls;
pub use materializer::{ProjectMaterializer, VivadoHlsMaterializer};
