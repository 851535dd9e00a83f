use alloc::vec::Vec;

use super::{
    classify::{assess, Assessment},
    types::Sample,
};

/// Lateral and vertical samples of one capture episode.
///
/// Samples only enter in pairs through [`SampleWindow::push`], so both
/// buffers always have the same length.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleWindow {
    lateral: Vec<Sample>,
    vertical: Vec<Sample>,
}

impl SampleWindow {
    pub const fn new() -> Self {
        Self {
            lateral: Vec::new(),
            vertical: Vec::new(),
        }
    }

    pub fn push(&mut self, lateral: Sample, vertical: Sample) {
        self.lateral.push(lateral);
        self.vertical.push(vertical);
    }

    pub fn len(&self) -> usize {
        self.lateral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lateral.is_empty()
    }

    pub fn lateral(&self) -> &[Sample] {
        &self.lateral
    }

    pub fn vertical(&self) -> &[Sample] {
        &self.vertical
    }

    pub fn assess(&self) -> Assessment {
        assess(&self.lateral, &self.vertical)
    }
}
