//! OceanDash engine: timers, progress steps and the effect-executing driver.
mod config;
mod realtime;
mod scheduler;
mod simulator;
mod step;
mod virtual_time;

pub use config::{ConfigError, SimConfig};
pub use realtime::{RealTimeScheduler, SchedulerError};
pub use scheduler::Scheduler;
pub use simulator::Simulator;
pub use step::{FixedStep, ProgressStep, RandomStep};
pub use virtual_time::VirtualScheduler;
