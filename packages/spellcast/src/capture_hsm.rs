use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::{
    classify::Assessment,
    types::Sample,
    window::SampleWindow,
};

#[derive(Clone, Copy, Debug)]
enum CaptureEvent {
    Press,
    Sample { lateral: Sample, vertical: Sample },
    Release,
    Abort,
}

#[derive(Default)]
struct DispatchContext {
    opened: bool,
    completed: Option<CompletedEpisode>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CapturePhase {
    #[default]
    Idle,
    Capturing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CompletedEpisode {
    pub assessment: Assessment,
    pub samples: usize,
}

/// Press/release episode tracker. The window lives only between a press and
/// the matching release or abort.
pub struct CaptureEngine {
    machine: statig::blocking::StateMachine<CaptureHsm>,
}

impl Default for CaptureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureEngine {
    pub fn new() -> Self {
        Self {
            machine: CaptureHsm::new().state_machine(),
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.machine.inner().phase
    }

    pub fn window(&self) -> &SampleWindow {
        &self.machine.inner().window
    }

    /// Opens an episode; returns false when one is already open.
    pub fn press(&mut self) -> bool {
        self.dispatch(CaptureEvent::Press).opened
    }

    pub fn sample(&mut self, lateral: Sample, vertical: Sample) {
        let _ = self.dispatch(CaptureEvent::Sample { lateral, vertical });
    }

    pub fn release(&mut self) -> Option<CompletedEpisode> {
        self.dispatch(CaptureEvent::Release).completed
    }

    /// Drops an open episode without classifying it.
    pub fn abort(&mut self) {
        let _ = self.dispatch(CaptureEvent::Abort);
    }

    fn dispatch(&mut self, event: CaptureEvent) -> DispatchContext {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        context
    }
}

struct CaptureHsm {
    window: SampleWindow,
    phase: CapturePhase,
}

impl CaptureHsm {
    fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            phase: CapturePhase::Idle,
        }
    }
}

#[state_machine(initial = "State::idle()")]
impl CaptureHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::Press => {
                self.window = SampleWindow::new();
                self.phase = CapturePhase::Capturing;
                context.opened = true;
                Transition(State::capturing())
            }
            CaptureEvent::Sample { .. } | CaptureEvent::Release | CaptureEvent::Abort => Handled,
        }
    }

    #[state]
    fn capturing(
        &mut self,
        context: &mut DispatchContext,
        event: &CaptureEvent,
    ) -> Outcome<State> {
        match event {
            CaptureEvent::Sample { lateral, vertical } => {
                self.window.push(*lateral, *vertical);
                Handled
            }
            CaptureEvent::Release => {
                let window = core::mem::take(&mut self.window);
                context.completed = Some(CompletedEpisode {
                    assessment: window.assess(),
                    samples: window.len(),
                });
                self.phase = CapturePhase::Idle;
                Transition(State::idle())
            }
            CaptureEvent::Abort => {
                self.window = SampleWindow::new();
                self.phase = CapturePhase::Idle;
                Transition(State::idle())
            }
            CaptureEvent::Press => Handled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::Basis, types::GestureLabel};

    #[test]
    fn release_without_press_yields_nothing() {
        let mut engine = CaptureEngine::new();
        engine.sample(40_000, 40_000);
        assert_eq!(engine.release(), None);
        assert_eq!(engine.phase(), CapturePhase::Idle);
        assert!(engine.window().is_empty());
    }

    #[test]
    fn episode_collects_samples_until_release() {
        let mut engine = CaptureEngine::new();
        assert!(engine.press());
        assert_eq!(engine.phase(), CapturePhase::Capturing);

        engine.sample(0, 40_000);
        engine.sample(0, 40_000);
        engine.sample(0, 100);
        assert_eq!(engine.window().len(), 3);

        let completed = engine.release().expect("episode should complete");
        assert_eq!(completed.samples, 3);
        assert_eq!(completed.assessment.label, GestureLabel::Up);
        assert_eq!(completed.assessment.basis, Basis::Count);
        assert_eq!(engine.phase(), CapturePhase::Idle);
        assert!(engine.window().is_empty());
    }

    #[test]
    fn zero_length_episode_classifies_as_other() {
        let mut engine = CaptureEngine::new();
        assert!(engine.press());
        let completed = engine.release().expect("episode should complete");
        assert_eq!(completed.samples, 0);
        assert_eq!(completed.assessment.label, GestureLabel::Other);
    }

    #[test]
    fn second_press_does_not_restart_open_episode() {
        let mut engine = CaptureEngine::new();
        assert!(engine.press());
        engine.sample(1, 1);
        assert!(!engine.press());
        engine.sample(2, 2);
        assert_eq!(engine.release().map(|episode| episode.samples), Some(2));
    }

    #[test]
    fn abort_discards_open_episode() {
        let mut engine = CaptureEngine::new();
        assert!(engine.press());
        engine.sample(1, 1);
        engine.abort();
        assert_eq!(engine.phase(), CapturePhase::Idle);
        assert!(engine.window().is_empty());
        assert_eq!(engine.release(), None);

        assert!(engine.press());
        assert_eq!(engine.release().map(|episode| episode.samples), Some(0));
    }

    #[test]
    fn episodes_do_not_share_samples() {
        let mut engine = CaptureEngine::new();
        assert!(engine.press());
        engine.sample(-40_000, 0);
        let first = engine.release().expect("first episode");
        assert_eq!(first.assessment.label, GestureLabel::Right);

        assert!(engine.press());
        engine.sample(3, 2);
        let second = engine.release().expect("second episode");
        assert_eq!(second.samples, 1);
        assert_eq!(second.assessment.label, GestureLabel::Other);
    }
}
