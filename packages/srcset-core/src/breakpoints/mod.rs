mod compute;
mod request;

pub use compute::{compute_breakpoints, BreakpointSet};
pub use request::{BreakpointRequest, RangeBreakpoints};
