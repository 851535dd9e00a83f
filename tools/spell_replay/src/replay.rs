use spellcast::{Assessment, AxisMap, Basis, CandidateScore, CaptureEngine, GestureLabel};

use crate::trace::TraceRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayedEpisode {
    pub start_ms: u64,
    pub samples: usize,
    pub assessment: Assessment,
}

impl ReplayedEpisode {
    pub fn label(&self) -> GestureLabel {
        self.assessment.label
    }

    /// The candidate that decided the label, or the strongest peak when
    /// nothing qualified.
    pub fn best(&self) -> CandidateScore {
        match self.assessment.basis {
            Basis::Count => self.assessment.best_by_count(),
            Basis::Peak | Basis::Unclassified => self.assessment.best_by_peak(),
        }
    }
}

/// Segments the trace on `held` edges, feeding each held row to the capture
/// engine the way the firmware does while the trigger is down.
pub fn replay_episodes(rows: &[TraceRow], axes: AxisMap) -> Vec<ReplayedEpisode> {
    let mut engine = CaptureEngine::new();
    let mut episodes = Vec::new();
    let mut start_ms = None;

    for row in rows {
        match (row.held, start_ms) {
            (true, None) => {
                engine.press();
                start_ms = Some(row.t_ms);
                sample(&mut engine, axes, row);
            }
            (true, Some(_)) => sample(&mut engine, axes, row),
            (false, Some(opened_at)) => {
                close(&mut engine, opened_at, &mut episodes);
                start_ms = None;
            }
            (false, None) => {}
        }
    }
    if let Some(opened_at) = start_ms {
        close(&mut engine, opened_at, &mut episodes);
    }

    episodes
}

fn sample(engine: &mut CaptureEngine, axes: AxisMap, row: &TraceRow) {
    let (lateral, vertical) = axes.extract(&row.reading);
    engine.sample(lateral, vertical);
}

fn close(engine: &mut CaptureEngine, start_ms: u64, episodes: &mut Vec<ReplayedEpisode>) {
    if let Some(completed) = engine.release() {
        episodes.push(ReplayedEpisode {
            start_ms,
            samples: completed.samples,
            assessment: completed.assessment,
        });
    }
}

#[cfg(test)]
mod tests {
    use spellcast::{Axis, Reading};

    use super::*;

    fn row(t_ms: u64, held: bool, gx: i16, gy: i16) -> TraceRow {
        TraceRow {
            t_ms,
            held,
            reading: Reading {
                gx,
                gy,
                ..Reading::default()
            },
        }
    }

    #[test]
    fn splits_trace_on_held_edges() {
        let rows = [
            row(0, false, 0, 0),
            row(10, true, 0, i16::MAX),
            row(20, true, 0, i16::MAX),
            row(30, false, 0, 0),
            row(40, false, 0, 0),
            row(50, true, -i16::MAX, 0),
            row(60, false, 0, 0),
        ];
        let episodes = replay_episodes(&rows, AxisMap::default());
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].start_ms, 10);
        assert_eq!(episodes[0].samples, 2);
        assert_eq!(episodes[0].label(), GestureLabel::Left);
        assert_eq!(episodes[1].start_ms, 50);
        assert_eq!(episodes[1].label(), GestureLabel::Down);
    }

    #[test]
    fn trace_ending_while_held_closes_last_episode() {
        let rows = [row(0, true, 15, 12), row(10, true, -8, 3)];
        let episodes = replay_episodes(&rows, AxisMap::default());
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].label(), GestureLabel::Up);
        assert_eq!(episodes[0].assessment.basis, Basis::Peak);
        assert_eq!(episodes[0].best().peak, 15);
    }

    #[test]
    fn weak_episode_reports_strongest_peak() {
        let rows = [row(0, true, 5, 2), row(10, true, -3, 1), row(20, false, 0, 0)];
        let episodes = replay_episodes(&rows, AxisMap::default());
        assert_eq!(episodes[0].label(), GestureLabel::Other);
        assert_eq!(episodes[0].assessment.basis, Basis::Unclassified);
        assert_eq!(episodes[0].best().peak, 5);
    }

    #[test]
    fn axis_map_selects_columns() {
        let rows = [TraceRow {
            t_ms: 0,
            held: true,
            reading: Reading {
                gz: i16::MAX,
                ..Reading::default()
            },
        }];
        let swapped = AxisMap::new(Axis::GyroX, Axis::GyroZ);
        assert_eq!(replay_episodes(&rows, swapped)[0].label(), GestureLabel::Up);
        assert_eq!(
            replay_episodes(&rows, AxisMap::default())[0].label(),
            GestureLabel::Other
        );
    }
}
