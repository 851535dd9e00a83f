mod button;
mod espnow;
mod sleep;
mod trace;

pub(crate) use button::ButtonLevel;
pub(crate) use espnow::EspNowTransport;
pub(crate) use sleep::EmbassySleep;
pub(crate) use trace::TracingSensor;
