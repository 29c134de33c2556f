use util::astar_path;

use crate::prelude::*;

impl Level {
    /// Shortest walkable path from `start` to `goal`, both ends included.
    ///
    /// The goal itself only needs to be walkable terrain, so a path can end
    /// on the player.
    pub fn path(&self, start: IVec2, goal: IVec2) -> Option<Vec<IVec2>> {
        self.path_with_cost(start, goal).map(|(path, _)| path)
    }

    pub(crate) fn path_with_cost(
        &self,
        start: IVec2,
        goal: IVec2,
    ) -> Option<(Vec<IVec2>, i32)> {
        astar_path(
            &start,
            &goal,
            |&p| self.neighbors(p),
            |a, b| (*a - *b).taxi_len(),
        )
    }
}
