use std::marker::PhantomData;

/// Bresenham line from start point to end point, both included.
///
/// Steep lines are walked along the y axis so that every step advances the
/// major axis by exactly one cell.
#[derive(Copy, Clone, Debug)]
pub struct Line<V> {
    // Coordinates are in the axis-swapped space when the line is steep.
    x: i32,
    y: i32,
    x_step: i32,
    y_step: i32,
    dx: i32,
    dy: i32,
    err: i32,
    is_steep: bool,
    remaining: i32,
    phantom: PhantomData<V>,
}

impl<V: From<[i32; 2]> + Into<[i32; 2]>> Line<V> {
    pub fn new(start: V, end: V) -> Self {
        let [mut x0, mut y0] = start.into();
        let [mut x1, mut y1] = end.into();

        let is_steep = (y1 - y0).abs() > (x1 - x0).abs();
        if is_steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        Line {
            x: x0,
            y: y0,
            x_step: if x1 < x0 { -1 } else { 1 },
            y_step: if y1 < y0 { -1 } else { 1 },
            dx,
            dy,
            err: 0,
            is_steep,
            remaining: dx + 1,
            phantom: PhantomData,
        }
    }
}

impl<V: From<[i32; 2]>> Iterator for Line<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let ret = if self.is_steep {
            [self.y, self.x]
        } else {
            [self.x, self.y]
        };

        self.err += self.dy;
        if 2 * self.err >= self.dx {
            self.y += self.y_step;
            self.err -= self.dx;
        }
        self.x += self.x_step;

        Some(V::from(ret))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}
