pub mod evaluation;
pub mod latency;
pub mod metric;
pub mod request;
pub mod resource;
pub mod timing;

pub use evaluation::*;
pub use latency::*;
pub use metric::*;
pub use request::*;
pub use resource::*;
pub use timing::*;
