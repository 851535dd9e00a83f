//! Adapter seams between the gesture loop and the board.

use super::types::{InboundMessage, PeerAddress, Reading};

pub trait SensorOps {
    type Error;

    fn read(&mut self) -> Result<Reading, Self::Error>;
}

pub trait TriggerOps {
    type Error;

    /// True exactly once per physical press.
    fn pressed_edge(&mut self) -> Result<bool, Self::Error>;
    /// True while the trigger is physically held.
    fn held(&mut self) -> Result<bool, Self::Error>;
}

#[allow(async_fn_in_trait)]
pub trait TransportOps {
    type Error;

    /// Fire-and-forget; implementations must not retry.
    async fn send(&mut self, address: &PeerAddress, payload: &[u8]) -> Result<(), Self::Error>;

    /// Pops one buffered inbound message without waiting.
    fn try_receive(&mut self) -> Option<InboundMessage>;

    fn drain(&mut self) -> Drain<'_, Self>
    where
        Self: Sized,
    {
        Drain { transport: self }
    }
}

/// Iterator over everything buffered at the time it is polled.
pub struct Drain<'a, X> {
    transport: &'a mut X,
}

impl<X: TransportOps> Iterator for Drain<'_, X> {
    type Item = InboundMessage;

    fn next(&mut self) -> Option<Self::Item> {
        self.transport.try_receive()
    }
}

#[allow(async_fn_in_trait)]
pub trait SleepOps {
    async fn sleep_ms(&mut self, millis: u32);

    /// Lets other work run between idle ticks.
    async fn idle(&mut self) {}
}
