use std::collections::VecDeque;

use super::Point3D;

/// Fixed-capacity history of recent positions, oldest first.
///
/// Pushing into a full trail evicts the oldest point, so the length never
/// exceeds the capacity. The backing storage is allocated once.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point3D>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest one when the trail is full.
    pub fn push(&mut self, point: Point3D) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&Point3D> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Point3D> {
        self.points.back()
    }

    pub fn get(&self, index: usize) -> Option<&Point3D> {
        self.points.get(index)
    }

    /// Iterate oldest -> newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Point3D> + ExactSizeIterator + '_ {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Point3D;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point3D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point3D> for Trail {
    /// Collects into a trail whose capacity equals the number of points.
    fn from_iter<I: IntoIterator<Item = Point3D>>(iter: I) -> Self {
        let points: VecDeque<Point3D> = iter.into_iter().collect();
        let capacity = points.len();
        Self { points, capacity }
    }
}
