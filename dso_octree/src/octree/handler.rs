//! Object handlers: the callbacks invoked by the traversal processors.
//!
//! A traversal calls `ObjectHandler::process()` exactly once per qualifying
//! object, synchronously, on the traversing thread. Closures with the
//! signature `FnMut(&T, f64, f32)` are handlers too.

/// Receives the objects a traversal selects.
///
/// `'a` is the lifetime of the octree being traversed, so a handler may keep
/// references to the objects it receives.
pub trait ObjectHandler<'a, T> {
    /// Called once per qualifying object.
    ///
    /// # Arguments
    ///
    /// * `object` - The selected object
    /// * `distance` - Distance from the observer to the object's bounding sphere
    /// * `absolute_magnitude` - The object's absolute magnitude
    fn process(&mut self, object: &'a T, distance: f64, absolute_magnitude: f32);
}

impl<'a, T: 'a, F> ObjectHandler<'a, T> for F
where
    F: FnMut(&'a T, f64, f32),
{
    #[inline]
    fn process(&mut self, object: &'a T, distance: f64, absolute_magnitude: f32) {
        self(object, distance, absolute_magnitude)
    }
}

/// One handler invocation, as recorded by `HitCollector`.
#[derive(Debug)]
pub struct ObjectHit<'a, T> {
    pub object: &'a T,
    pub distance: f64,
    pub absolute_magnitude: f32,
}

// Manual impls: the derives would require `T: Clone`
impl<T> Clone for ObjectHit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ObjectHit<'_, T> {}

/// Handler that records every invocation, in invocation order.
#[derive(Debug)]
pub struct HitCollector<'a, T> {
    hits: Vec<ObjectHit<'a, T>>,
}

impl<'a, T> HitCollector<'a, T> {
    pub fn new() -> Self {
        Self { hits: Vec::new() }
    }

    /// Collector with room for `capacity` hits before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { hits: Vec::with_capacity(capacity) }
    }

    pub fn hits(&self) -> &[ObjectHit<'a, T>] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Drop recorded hits, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.hits.clear();
    }

    pub fn into_hits(self) -> Vec<ObjectHit<'a, T>> {
        self.hits
    }
}

impl<T> Default for HitCollector<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> ObjectHandler<'a, T> for HitCollector<'a, T> {
    #[inline]
    fn process(&mut self, object: &'a T, distance: f64, absolute_magnitude: f32) {
        self.hits.push(ObjectHit { object, distance, absolute_magnitude });
    }
}

/// Handler that only counts invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingHandler {
    pub count: usize,
}

impl CountingHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, T> ObjectHandler<'a, T> for CountingHandler {
    #[inline]
    fn process(&mut self, _object: &'a T, _distance: f64, _absolute_magnitude: f32) {
        self.count += 1;
    }
}
