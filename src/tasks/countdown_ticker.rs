//! Countdown tick loop background task

use std::time::Duration;

use tokio::{
    sync::{broadcast, mpsc, oneshot, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    engine::{CountdownEngine, CountdownSnapshot},
    error::CountdownError,
    state::{CountdownCommand, CountdownEvent},
};

/// Fixed sampling cadence of the countdown
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const COMMAND_BUFFER: usize = 16;

#[derive(Debug, Clone, Copy)]
struct Quit;

/// A running countdown loop. The engine is owned by the loop's task.
#[derive(Debug)]
pub struct CountdownTicker {
    quit_tx: oneshot::Sender<Quit>,
    task: JoinHandle<()>,
    handle: CountdownHandle,
}

/// Cheap, cloneable access to a running countdown for consumers
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    snapshot_rx: watch::Receiver<CountdownSnapshot>,
    command_tx: mpsc::Sender<CountdownCommand>,
}

impl CountdownTicker {
    /// Sample the engine once right away, then keep sampling every [`TICK_INTERVAL`].
    ///
    /// The eager sample is published before this returns, so a consumer sees the
    /// completion notice immediately when starting after the deadline.
    pub fn spawn<C: Clock>(
        mut engine: CountdownEngine,
        clock: C,
        events: broadcast::Sender<CountdownEvent>,
    ) -> Self {
        let initial = engine.sample(clock.now());
        if initial.deadline_just_reached {
            notify(&events, CountdownEvent::DeadlineReached { at: initial.snapshot.sampled_at });
        }

        let (snapshot_tx, snapshot_rx) = watch::channel(initial.snapshot);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (quit_tx, quit_rx) = oneshot::channel();

        let task = tokio::spawn(tick_loop(engine, clock, snapshot_tx, command_rx, events, quit_rx));

        Self {
            quit_tx,
            task,
            handle: CountdownHandle { snapshot_rx, command_tx },
        }
    }

    pub fn handle(&self) -> CountdownHandle {
        self.handle.clone()
    }

    /// Stop the loop. Once this returns no further tick is applied or published.
    pub async fn cancel(self) {
        let _ = self.quit_tx.send(Quit);
        if let Err(e) = self.task.await {
            warn!("Countdown loop ended abnormally: {}", e);
        }
        info!("Countdown loop cancelled");
    }
}

impl CountdownHandle {
    /// The most recently published snapshot
    pub fn snapshot(&self) -> CountdownSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver that is notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<CountdownSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Ask the loop to record the acknowledgment and return the resulting snapshot
    pub async fn acknowledge_completion(&self) -> Result<CountdownSnapshot, CountdownError> {
        let (reply, reply_rx) = oneshot::channel();
        self.command_tx
            .send(CountdownCommand::Acknowledge { reply })
            .await
            .map_err(|_| CountdownError::LoopStopped)?;
        reply_rx.await.map_err(|_| CountdownError::LoopStopped)
    }
}

async fn tick_loop<C: Clock>(
    mut engine: CountdownEngine,
    clock: C,
    snapshot_tx: watch::Sender<CountdownSnapshot>,
    mut command_rx: mpsc::Receiver<CountdownCommand>,
    events: broadcast::Sender<CountdownEvent>,
    mut quit_rx: oneshot::Receiver<Quit>,
) {
    info!("Starting countdown loop for deadline {}", engine.deadline().at());

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // the first tick completes immediately and is covered by the eager sample
    interval.tick().await;

    loop {
        tokio::select! {
            biased;

            // quit wins over a ready tick, and a dropped ticker counts as quit
            _ = &mut quit_rx => {
                debug!("Countdown loop received quit");
                break;
            }

            _ = interval.tick() => {
                let outcome = engine.sample(clock.now());
                debug!(
                    "Tick: {} remaining, reached={}",
                    outcome.snapshot.remaining, outcome.snapshot.deadline_reached
                );

                // the edge still advances, but a dismissed session gets no end sequence
                if outcome.deadline_just_reached && !engine.has_acknowledged_completion() {
                    let at = outcome.snapshot.sampled_at;
                    notify(&events, CountdownEvent::DeadlineReached { at });
                } else if outcome.deadline_just_reached {
                    debug!("Deadline reached after acknowledgment, skipping end sequence");
                }
                snapshot_tx.send_replace(outcome.snapshot);
            }

            Some(command) = command_rx.recv() => {
                match command {
                    CountdownCommand::Acknowledge { reply } => {
                        let now = clock.now();
                        if engine.acknowledge_completion() {
                            notify(&events, CountdownEvent::CompletionAcknowledged { at: now });
                        }

                        let snapshot = engine.snapshot(now);
                        snapshot_tx.send_replace(snapshot.clone());
                        if reply.send(snapshot).is_err() {
                            debug!("Acknowledgment requester went away before the reply");
                        }
                    }
                }
            }
        }
    }
}

fn notify(events: &broadcast::Sender<CountdownEvent>, event: CountdownEvent) {
    if let Err(e) = events.send(event) {
        debug!("No listeners for countdown event: {:?}", e.0);
    }
}
