use core::fmt;

use super::{
    capture_hsm::{CaptureEngine, CapturePhase},
    classify::Assessment,
    ports::{SensorOps, SleepOps, TransportOps, TriggerOps},
    types::{AxisMap, GestureLabel, InboundMessage, PeerAddress},
    wire::encode_spell,
};

pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 10;
pub const DEFAULT_COOLDOWN_MS: u32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoopSettings {
    pub axes: AxisMap,
    pub sample_interval_ms: u32,
    pub cooldown_ms: u32,
    pub destination: PeerAddress,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            axes: AxisMap::default(),
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            destination: PeerAddress::BROADCAST,
        }
    }
}

/// Sensor and trigger faults are not retried; they end the loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GestureError<SE, TE> {
    Sensor(SE),
    Trigger(TE),
}

impl<SE: fmt::Debug, TE: fmt::Debug> fmt::Display for GestureError<SE, TE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "sensor read failed: {err:?}"),
            Self::Trigger(err) => write!(f, "trigger read failed: {err:?}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SendOutcome<E> {
    NotSent,
    Sent,
    Failed(E),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EpisodeReport<E> {
    pub assessment: Assessment,
    pub samples: usize,
    pub send: SendOutcome<E>,
}

impl<E> EpisodeReport<E> {
    pub fn label(&self) -> GestureLabel {
        self.assessment.label
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickReport<E> {
    pub inbound_drained: usize,
    pub episode: Option<EpisodeReport<E>>,
}

/// Cooperative sense-classify-emit loop.
///
/// Each tick drains the inbound queue into the last-message slot, then runs
/// at most one press/release episode. Suspension happens only in the sample
/// interval sleep, the send itself and the post-send cooldown.
pub struct GestureLoop<S, T, X, D> {
    sensor: S,
    trigger: T,
    transport: X,
    sleeper: D,
    settings: LoopSettings,
    engine: CaptureEngine,
    last_message: Option<InboundMessage>,
}

type LoopResult<T, S, Tr> =
    Result<T, GestureError<<S as SensorOps>::Error, <Tr as TriggerOps>::Error>>;

impl<S, T, X, D> GestureLoop<S, T, X, D>
where
    S: SensorOps,
    T: TriggerOps,
    X: TransportOps,
    D: SleepOps,
{
    pub fn new(sensor: S, trigger: T, transport: X, sleeper: D, settings: LoopSettings) -> Self {
        Self {
            sensor,
            trigger,
            transport,
            sleeper,
            settings,
            engine: CaptureEngine::new(),
            last_message: None,
        }
    }

    pub fn settings(&self) -> &LoopSettings {
        &self.settings
    }

    pub fn phase(&self) -> CapturePhase {
        self.engine.phase()
    }

    pub fn last_message(&self) -> Option<&InboundMessage> {
        self.last_message.as_ref()
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn transport(&self) -> &X {
        &self.transport
    }

    pub fn sleeper(&self) -> &D {
        &self.sleeper
    }

    /// Empties the inbound queue; only the newest message is kept.
    pub fn drain_inbound(&mut self) -> usize {
        let mut drained = 0;
        for message in self.transport.drain() {
            self.last_message = Some(message);
            drained += 1;
        }
        drained
    }

    pub async fn tick(&mut self) -> LoopResult<TickReport<X::Error>, S, T> {
        let inbound_drained = self.drain_inbound();
        let episode = self.capture_episode().await?;
        Ok(TickReport {
            inbound_drained,
            episode,
        })
    }

    /// Runs ticks until a sensor or trigger fault, reporting each tick.
    pub async fn run<F>(&mut self, mut on_tick: F) -> GestureError<S::Error, T::Error>
    where
        F: FnMut(&TickReport<X::Error>, Option<&InboundMessage>),
    {
        loop {
            match self.tick().await {
                Ok(report) => {
                    on_tick(&report, self.last_message.as_ref());
                    if report.episode.is_none() {
                        self.sleeper.idle().await;
                    }
                }
                Err(err) => return err,
            }
        }
    }

    /// Edge-checked: returns `None` unless a fresh press is seen right now.
    pub async fn capture_episode(&mut self) -> LoopResult<Option<EpisodeReport<X::Error>>, S, T> {
        if !self.trigger.pressed_edge().map_err(GestureError::Trigger)? {
            return Ok(None);
        }

        // Faults abort and releases close the episode, so the engine is idle here.
        let opened = self.engine.press();
        debug_assert!(opened);
        if let Err(err) = self.capture_until_release().await {
            self.engine.abort();
            return Err(err);
        }

        let Some(completed) = self.engine.release() else {
            return Ok(None);
        };
        let send = self.emit(completed.assessment.label).await;
        Ok(Some(EpisodeReport {
            assessment: completed.assessment,
            samples: completed.samples,
            send,
        }))
    }

    async fn capture_until_release(&mut self) -> LoopResult<(), S, T> {
        while self.trigger.held().map_err(GestureError::Trigger)? {
            self.sleeper.sleep_ms(self.settings.sample_interval_ms).await;
            let reading = self.sensor.read().map_err(GestureError::Sensor)?;
            let (lateral, vertical) = self.settings.axes.extract(&reading);
            self.engine.sample(lateral, vertical);
        }
        Ok(())
    }

    async fn emit(&mut self, label: GestureLabel) -> SendOutcome<X::Error> {
        let Some(payload) = encode_spell(label) else {
            return SendOutcome::NotSent;
        };
        let outcome = match self
            .transport
            .send(&self.settings.destination, &payload)
            .await
        {
            Ok(()) => SendOutcome::Sent,
            Err(err) => SendOutcome::Failed(err),
        };
        self.sleeper.sleep_ms(self.settings.cooldown_ms).await;
        outcome
    }
}
