/// Count of correct answers within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: u32,
}

impl Score {
    pub fn increment(&mut self) {
        self.correct += 1;
    }

    pub fn get(&self) -> u32 {
        self.correct
    }

    pub fn reset(&mut self) {
        self.correct = 0;
    }
}
