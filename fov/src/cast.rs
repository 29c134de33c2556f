use crate::Line;

/// Points within Euclidean distance `radius` of `origin`, in row-major
/// order.
pub fn disc<V>(origin: V, radius: i32) -> impl Iterator<Item = V>
where
    V: From<[i32; 2]> + Into<[i32; 2]>,
{
    let [ox, oy] = origin.into();
    let radius = radius.max(0);

    (-radius..=radius).flat_map(move |dy| {
        (-radius..=radius)
            .filter(move |dx| dx * dx + dy * dy <= radius * radius)
            .map(move |dx| V::from([ox + dx, oy + dy]))
    })
}

/// Cast rays from `origin` to every point within `radius`.
///
/// Every point a ray passes through, origin included, is handed to `visit`.
/// When `visit` returns false the point blocks sight and the ray stops
/// there; the blocking point itself has already been visited. Points near
/// the origin are visited once per ray that crosses them.
pub fn cast<V>(origin: V, radius: i32, mut visit: impl FnMut(V) -> bool)
where
    V: From<[i32; 2]> + Into<[i32; 2]> + Copy,
{
    for target in disc(origin, radius) {
        for p in Line::new(origin, target) {
            if !visit(p) {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn seen(radius: i32, walls: &[[i32; 2]]) -> HashSet<[i32; 2]> {
        let mut ret = HashSet::new();
        cast([0, 0], radius, |p| {
            ret.insert(p);
            !walls.contains(&p)
        });
        ret
    }

    #[test]
    fn disc_shape() {
        let pts: Vec<[i32; 2]> = disc([0, 0], 1).collect();
        assert_eq!(pts, vec![[0, -1], [-1, 0], [0, 0], [1, 0], [0, 1]]);

        assert_eq!(disc([5, 5], 0).collect::<Vec<[i32; 2]>>(), vec![[5, 5]]);
        assert_eq!(disc([0, 0], 10).count(), 317);
    }

    #[test]
    fn open_field() {
        let expected: HashSet<[i32; 2]> = disc([0, 0], 6).collect();
        assert_eq!(seen(6, &[]), expected);
    }

    #[test]
    fn wall_blocks_sight() {
        let s = seen(5, &[[2, 0]]);
        // The wall is seen, the cells directly behind it aren't.
        assert!(s.contains(&[1, 0]));
        assert!(s.contains(&[2, 0]));
        assert!(!s.contains(&[3, 0]));
        assert!(!s.contains(&[5, 0]));
        // Off-axis cells are still visible.
        assert!(s.contains(&[0, 4]));
        assert!(s.contains(&[-5, 0]));
    }
}
