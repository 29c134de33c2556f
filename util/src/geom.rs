use glam::IVec2;

/// 4 directions in search order: right, left, up, down.
///
/// Pathfinding tie-breaks depend on this order, keep it stable.
pub const DIR_4: [IVec2; 4] = [
    IVec2::from_array([1, 0]),
    IVec2::from_array([-1, 0]),
    IVec2::from_array([0, -1]),
    IVec2::from_array([0, 1]),
];

pub trait VecExt: Sized + Copy {
    /// Absolute size of vector in taxicab metric.
    fn taxi_len(&self) -> i32;

    /// Squared length of vector in the Euclidean metric.
    fn euclid_len_sq(&self) -> i32;

    /// Vec points to an adjacent cell, left, right, up or down.
    fn is_adjacent(&self) -> bool {
        self.taxi_len() == 1
    }

    /// Whether the vector fits in a disc of the given radius.
    fn is_within(&self, radius: i32) -> bool {
        self.euclid_len_sq() <= radius * radius
    }
}

impl VecExt for IVec2 {
    fn taxi_len(&self) -> i32 {
        self[0].abs() + self[1].abs()
    }

    fn euclid_len_sq(&self) -> i32 {
        self.dot(*self)
    }
}

#[cfg(test)]
mod tests {
    use glam::ivec2;

    use super::*;

    #[test]
    fn metrics() {
        assert_eq!(ivec2(3, -4).taxi_len(), 7);
        assert_eq!(ivec2(3, -4).euclid_len_sq(), 25);
        assert!(ivec2(3, -4).is_within(5));
        assert!(!ivec2(3, -4).is_within(4));

        for d in DIR_4 {
            assert!(d.is_adjacent());
        }
        assert!(!ivec2(1, 1).is_adjacent());
    }
}
