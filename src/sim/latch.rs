//! Edge-triggered one-shot input
//!
//! An [`EdgeLatch`] turns a held key into a single event per press: it fires
//! on the idle → armed transition and stays quiet until the key is released.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeLatch {
    /// Key up; the next press fires
    #[default]
    Idle,
    /// Key held and already consumed
    Armed,
}

impl EdgeLatch {
    /// Feed the current held state; true only on the rising edge
    pub fn rising(&mut self, held: bool) -> bool {
        match (*self, held) {
            (EdgeLatch::Idle, true) => {
                *self = EdgeLatch::Armed;
                true
            }
            (EdgeLatch::Armed, false) => {
                *self = EdgeLatch::Idle;
                false
            }
            _ => false,
        }
    }
}
