//! Fixed-capacity animal storage
//!
//! Slots keep their index for as long as the animal lives; freed indices go
//! on a stack and are reused most-recently-freed first.

use super::animal::Animal;

#[derive(Debug, Clone)]
pub struct AnimalPool {
    slots: Vec<Option<Animal>>,
    free: Vec<usize>,
}

impl AnimalPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            // Popped from the back, so index 0 is handed out first
            free: (0..capacity).rev().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn alive_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Store an animal, returning its slot, or None when the pool is full
    pub fn insert(&mut self, animal: Animal) -> Option<usize> {
        let index = self.free.pop()?;
        self.slots[index] = Some(animal);
        Some(index)
    }

    /// Free a slot, returning the animal that lived there
    pub fn remove(&mut self, index: usize) -> Option<Animal> {
        let animal = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        Some(animal)
    }

    pub fn get(&self, index: usize) -> Option<&Animal> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Animal> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Live animals with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Animal)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|animal| (index, animal)))
    }

    pub fn clear(&mut self) {
        let capacity = self.capacity();
        *self = Self::new(capacity);
    }
}
