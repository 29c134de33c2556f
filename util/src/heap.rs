/// Binary min-heap of items keyed by integer priority.
///
/// Items with equal priorities come out in an unspecified order.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    nodes: Vec<(T, i32)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        PriorityQueue {
            nodes: Default::default(),
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, item: T, priority: i32) {
        self.nodes.push((item, priority));

        // Sift up.
        let mut i = self.nodes.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[i].1 >= self.nodes[parent].1 {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }

        let (ret, _) = self.nodes.swap_remove(0);

        // Sift down, left child wins ties.
        let mut i = 0;
        loop {
            let (left, right) = (2 * i + 1, 2 * i + 2);
            let priority = |j: usize| self.nodes.get(j).map(|n| n.1);

            let child = match (priority(left), priority(right)) {
                (Some(l), Some(r)) if r < l => right,
                (Some(_), _) => left,
                (None, _) => break,
            };

            if self.nodes[i].1 <= self.nodes[child].1 {
                break;
            }
            self.nodes.swap(i, child);
            i = child;
        }

        Some(ret)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn empty_pop() {
        let mut q: PriorityQueue<char> = PriorityQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);

        q.push('a', 3);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop(), Some('a'));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn lowest_first() {
        let mut q = PriorityQueue::new();
        for (c, p) in [('d', 4), ('a', 1), ('e', 9), ('b', 2), ('c', 3)] {
            q.push(c, p);
        }

        let mut out = String::new();
        while let Some(c) = q.pop() {
            out.push(c);
        }
        assert_eq!(out, "abcde");
    }

    #[quickcheck]
    fn pops_in_priority_order(priorities: Vec<i32>) -> bool {
        let mut q = PriorityQueue::new();
        for &p in &priorities {
            q.push(p, p);
        }

        let mut sorted = priorities.clone();
        sorted.sort();

        let mut popped = Vec::new();
        while let Some(p) = q.pop() {
            popped.push(p);
        }
        popped == sorted
    }
}
