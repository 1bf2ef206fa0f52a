use crate::channel::{Delivery, SubmissionChannel};
use crate::core::field::FieldId;
use crate::core::form::FormState;
use crate::core::template::FormTemplate;
use crate::core::view::FormView;
use crate::runtime::effect::Effect;
use crate::runtime::event::FormEvent;
use crate::runtime::reducer::{DELIVERY_KEY, Reducer, RESET_KEY};
use crate::runtime::scheduler::{Scheduler, SchedulerCommand};
use log::{debug, info};
use std::time::{Duration, Instant};

/// One form instance: state, template, scheduler and channel wired
/// together. Every entry point takes `now` so a host loop drives real
/// time and tests drive virtual time through the same code path.
pub struct FormEngine {
    template: FormTemplate,
    state: FormState,
    scheduler: Scheduler,
    channel: Box<dyn SubmissionChannel>,
}

impl FormEngine {
    pub fn new(template: FormTemplate, channel: Box<dyn SubmissionChannel>) -> Self {
        let state = FormState::for_template(&template);
        Self {
            template,
            state,
            scheduler: Scheduler::new(),
            channel,
        }
    }

    pub fn template(&self) -> &FormTemplate {
        &self.template
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> FormView {
        FormView::project(&self.template, &self.state)
    }

    pub fn update_field(
        &mut self,
        id: impl Into<FieldId>,
        value: impl Into<String>,
        now: Instant,
    ) {
        self.dispatch(
            FormEvent::FieldEdited {
                id: id.into(),
                value: value.into(),
            },
            now,
        );
    }

    pub fn submit(&mut self, now: Instant) {
        self.dispatch(FormEvent::SubmitRequested, now);
    }

    /// Drain and apply every scheduled event that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = self.scheduler.drain_ready(now);
            if due.is_empty() {
                return;
            }
            for event in due {
                self.dispatch(event, now);
            }
        }
    }

    /// How long a host loop may sleep before the next scheduled event.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    /// Tear-down hygiene: cancel the in-flight delivery resolution and the
    /// post-success reset so nothing mutates state that lost its observer.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel(DELIVERY_KEY);
        self.scheduler.cancel(RESET_KEY);
    }

    fn dispatch(&mut self, event: FormEvent, now: Instant) {
        let effects = Reducer::reduce(&mut self.state, &self.template, event);
        self.apply_effects(effects, now);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Dispatch(lead) => {
                    info!("dispatching lead to submission channel");
                    match self.channel.dispatch(&lead) {
                        Delivery::Completed(outcome) => {
                            self.dispatch(FormEvent::DeliveryResolved(outcome), now);
                        }
                        Delivery::Deferred { delay, outcome } => {
                            debug!("delivery resolves in {delay:?}");
                            self.scheduler.schedule(
                                SchedulerCommand::EmitAfter {
                                    key: DELIVERY_KEY.to_string(),
                                    delay,
                                    event: FormEvent::DeliveryResolved(outcome),
                                },
                                now,
                            );
                        }
                    }
                }
                Effect::Schedule(command) => {
                    self.scheduler.schedule(command, now);
                }
            }
        }
    }
}
