mod system;
mod traits;

pub use system::{SystemSampler, SAMPLE_WINDOW};
pub use traits::{CpuSampler, SampleError};
