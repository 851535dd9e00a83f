use super::ports::TriggerOps;

/// Raw trigger level, already corrected for polarity.
pub trait LevelInput {
    type Error;

    fn is_active(&mut self) -> Result<bool, Self::Error>;
}

/// Derives the press edge from a polled level.
///
/// Every query samples the input and remembers the level, so a press that
/// starts and ends between two queries is never reported.
pub struct EdgeTrigger<L> {
    input: L,
    last_active: bool,
}

impl<L: LevelInput> EdgeTrigger<L> {
    pub const fn new(input: L) -> Self {
        Self {
            input,
            last_active: false,
        }
    }

    pub fn into_inner(self) -> L {
        self.input
    }

    fn sample(&mut self) -> Result<(bool, bool), L::Error> {
        let active = self.input.is_active()?;
        let was_active = self.last_active;
        self.last_active = active;
        Ok((was_active, active))
    }
}

impl<L: LevelInput> TriggerOps for EdgeTrigger<L> {
    type Error = L::Error;

    fn pressed_edge(&mut self) -> Result<bool, Self::Error> {
        let (was_active, active) = self.sample()?;
        Ok(active && !was_active)
    }

    fn held(&mut self) -> Result<bool, Self::Error> {
        let (_, active) = self.sample()?;
        Ok(active)
    }
}
