//! Short-lived display markers for recent infections.

use std::collections::VecDeque;

use ep_core::InfectionEvent;

/// Ticks a flash stays visible.
pub const FLASH_LIFETIME_TICKS: u32 = 15;

/// One infection event plus how many ticks it has been on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Flash {
    pub event: InfectionEvent,
    pub age:   u32,
}

impl Flash {
    /// Fraction of the lifetime elapsed, in `[0, 1]` while the flash is live.
    /// Renderers use it to grow the ring and fade it out.
    pub fn progress(&self) -> f64 {
        self.age as f64 / FLASH_LIFETIME_TICKS as f64
    }
}

/// FIFO of live flashes.  Oldest first, since every flash ages at the same
/// rate.
#[derive(Clone, Debug, Default)]
pub struct FlashQueue {
    flashes: VecDeque<Flash>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a flash for each event, at age 0.
    pub fn push<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a InfectionEvent>,
    {
        self.flashes
            .extend(events.into_iter().map(|&event| Flash { event, age: 0 }));
    }

    /// One frame: start flashes for this tick's `events`, then age the whole
    /// queue.  A new flash is therefore shown at ages 1 through
    /// [`FLASH_LIFETIME_TICKS`], once per tick.
    pub fn tick<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a InfectionEvent>,
    {
        self.push(events);
        self.advance();
    }

    /// Age every flash by one tick and drop the expired ones.
    pub fn advance(&mut self) {
        for flash in &mut self.flashes {
            flash.age += 1;
        }
        while self
            .flashes
            .front()
            .is_some_and(|f| f.age > FLASH_LIFETIME_TICKS)
        {
            self.flashes.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flash> {
        self.flashes.iter()
    }

    pub fn len(&self) -> usize {
        self.flashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashes.is_empty()
    }
}
