use std::{collections::VecDeque, hash::Hash};

use crate::{HashMap, HashSet, PriorityQueue};

/// A* search with unit step cost.
///
/// Returns the path from `start` to `goal`, both ends included, and the
/// cost of the path. Nodes may enter the frontier more than once, a node's
/// recorded cost only ever gets lowered.
pub fn astar_path<T, I>(
    start: &T,
    goal: &T,
    mut neighbors: impl FnMut(&T) -> I,
    mut heuristic: impl FnMut(&T, &T) -> i32,
) -> Option<(Vec<T>, i32)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut open = PriorityQueue::new();
    open.push(start.clone(), 0);

    let mut from: HashMap<T, T> = HashMap::default();
    let mut cost: HashMap<T, i32> = HashMap::default();
    cost.insert(start.clone(), 0);

    while let Some(current) = open.pop() {
        if &current == goal {
            let total = cost[&current];
            let mut path = vec![current];
            while let Some(prev) = path.last().and_then(|p| from.get(p)) {
                path.push(prev.clone());
            }
            path.reverse();
            return Some((path, total));
        }

        let new_cost = cost[&current] + 1;
        for n in neighbors(&current) {
            if cost.get(&n).map_or(true, |&c| new_cost < c) {
                cost.insert(n.clone(), new_cost);
                from.insert(n.clone(), current.clone());
                let priority = new_cost + heuristic(&n, goal);
                open.push(n, priority);
            }
        }
    }

    None
}

/// Breadth-first search for the nearest node that satisfies `is_goal`.
pub fn bfs<T, I>(
    start: T,
    mut neighbors: impl FnMut(&T) -> I,
    mut is_goal: impl FnMut(&T) -> bool,
) -> Option<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::default();
    seen.insert(start.clone());
    let mut edge = VecDeque::from([start]);

    while let Some(node) = edge.pop_front() {
        if is_goal(&node) {
            return Some(node);
        }

        for n in neighbors(&node) {
            if seen.insert(n.clone()) {
                edge.push_back(n);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use glam::{ivec2, IVec2};

    use super::*;
    use crate::{VecExt, DIR_4};

    fn open_neighbors(
        walls: &[IVec2],
        size: i32,
    ) -> impl FnMut(&IVec2) -> Vec<IVec2> + '_ {
        move |&p| {
            DIR_4
                .iter()
                .map(|&d| p + d)
                .filter(|q| {
                    q.min_element() >= 0
                        && q.max_element() < size
                        && !walls.contains(q)
                })
                .collect()
        }
    }

    fn manhattan(a: &IVec2, b: &IVec2) -> i32 {
        (*b - *a).taxi_len()
    }

    #[test]
    fn straight_path() {
        let (path, cost) = astar_path(
            &ivec2(0, 0),
            &ivec2(4, 0),
            open_neighbors(&[], 5),
            manhattan,
        )
        .unwrap();

        assert_eq!(cost, 4);
        assert_eq!(
            path,
            vec![
                ivec2(0, 0),
                ivec2(1, 0),
                ivec2(2, 0),
                ivec2(3, 0),
                ivec2(4, 0)
            ]
        );
    }

    #[test]
    fn path_around_wall() {
        // .....
        // .###.
        // S#G#.
        // .....
        // .....
        let walls = [
            ivec2(1, 1),
            ivec2(2, 1),
            ivec2(3, 1),
            ivec2(1, 2),
            ivec2(3, 2),
        ];
        let (path, cost) = astar_path(
            &ivec2(0, 2),
            &ivec2(2, 2),
            open_neighbors(&walls, 5),
            manhattan,
        )
        .unwrap();

        assert_eq!(path.len() as i32, cost + 1);
        assert!(path.windows(2).all(|w| (w[1] - w[0]).is_adjacent()));
        // Only way in is from below.
        assert_eq!(
            path,
            vec![
                ivec2(0, 2),
                ivec2(0, 3),
                ivec2(1, 3),
                ivec2(2, 3),
                ivec2(2, 2)
            ]
        );
        assert_eq!(cost, 4);
    }

    #[test]
    fn unreachable() {
        let walls = [ivec2(1, 0), ivec2(1, 1), ivec2(1, 2)];
        assert!(astar_path(
            &ivec2(0, 0),
            &ivec2(2, 2),
            open_neighbors(&walls, 3),
            manhattan,
        )
        .is_none());
    }

    #[test]
    fn start_is_goal() {
        let (path, cost) = astar_path(
            &ivec2(1, 1),
            &ivec2(1, 1),
            open_neighbors(&[], 3),
            manhattan,
        )
        .unwrap();
        assert_eq!(path, vec![ivec2(1, 1)]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn nearest_by_bfs() {
        let goals = [ivec2(4, 4), ivec2(0, 3)];
        assert_eq!(
            bfs(ivec2(0, 0), open_neighbors(&[], 5), |p| goals.contains(p)),
            Some(ivec2(0, 3))
        );
        assert_eq!(
            bfs(ivec2(0, 0), open_neighbors(&[], 5), |p| p.x > 10),
            None
        );
    }
}
