use crate::core::lead::Lead;
use crate::runtime::scheduler::SchedulerCommand;

#[derive(Debug, Clone)]
pub enum Effect {
    /// Hand the captured payload to the submission channel.
    Dispatch(Lead),
    Schedule(SchedulerCommand),
}
