#![cfg_attr(not(test), no_std)]

//! Trigger-gated motion capture and direction classification for the wand.
//!
//! The crate is hardware independent: the firmware injects the IMU, the
//! trigger button, the ESP-NOW link and the timer through the traits in
//! [`ports`], and drives [`GestureLoop`] from a single embassy task.

extern crate alloc;

pub mod capture_hsm;
pub mod classify;
pub mod gesture_loop;
pub mod ports;
pub mod trigger;
pub mod types;
pub mod window;
pub mod wire;

pub use capture_hsm::{CaptureEngine, CapturePhase, CompletedEpisode};
pub use classify::{assess, classify, Assessment, Basis, CandidateScore, MIN_PEAK, THRESHOLD};
pub use gesture_loop::{
    EpisodeReport, GestureError, GestureLoop, LoopSettings, SendOutcome, TickReport,
};
pub use ports::{Drain, SensorOps, SleepOps, TransportOps, TriggerOps};
pub use trigger::{EdgeTrigger, LevelInput};
pub use types::{
    Axis, AxisMap, GestureLabel, InboundMessage, PeerAddress, Reading, Sample, PAYLOAD_MAX,
};
pub use window::SampleWindow;
pub use wire::{decode_spell, encode_spell, SpellPayload, SPELL_MARKER};
