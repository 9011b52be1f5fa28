use log::debug;
use wb_core::{GridPoint, Image, NEIGHBORS_8, Polyline, Rgba, neighbor};

/// Iterator over the polylines of a skeleton image.
///
/// Rows are scanned top to bottom, left to right. The scan resumes at the
/// first row that may still hold foreground, so a fully erased row is never
/// read twice.
#[derive(Debug)]
pub struct PathTracer {
    img: Image<Rgba>,
    passed_y: usize,
}

impl PathTracer {
    pub fn new(img: Image<Rgba>) -> Self {
        Self { img, passed_y: 0 }
    }

    fn next_start(&mut self) -> Option<GridPoint> {
        while self.passed_y < self.img.height() {
            let y = self.passed_y;
            if let Some(x) = self.img.row(y).iter().position(|p| !p.is_white()) {
                return Some(GridPoint::new(x, y));
            }
            self.passed_y += 1;
        }
        None
    }

    fn walk(&mut self, start: GridPoint) -> Polyline {
        let mut line = Polyline::new(start, self.img.at(start.x, start.y));
        let mut cur = start;

        loop {
            self.img.set(cur.x, cur.y, Rgba::WHITE);

            let img = &self.img;
            let next = NEIGHBORS_8.iter().find_map(|&(dx, dy)| {
                neighbor(img, cur.x, cur.y, dx, dy).filter(|&(x, y)| !img.at(x, y).is_white())
            });

            let Some(next) = next else {
                break;
            };
            cur = next.into();
            line.points.push(cur);
        }

        line
    }
}

impl Iterator for PathTracer {
    type Item = Polyline;

    fn next(&mut self) -> Option<Polyline> {
        let start = self.next_start()?;
        Some(self.walk(start))
    }
}

/// Consumes `img` and returns every polyline in discovery order.
///
/// Isolated pixels come back as single-point polylines.
pub fn trace_paths(img: Image<Rgba>) -> Vec<Polyline> {
    let (width, height) = img.dims();
    let paths: Vec<Polyline> = PathTracer::new(img).collect();
    debug!(
        "traced {} paths ({} points) in {width}x{height} image",
        paths.len(),
        paths.iter().map(Polyline::len).sum::<usize>()
    );
    paths
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wb_core::{GridPoint, Image, Polyline, Rgba};

    use crate::{PathTracer, trace_paths};

    fn parse(rows: &[&str]) -> Image<Rgba> {
        let width = rows[0].len();
        let data = rows
            .iter()
            .flat_map(|row| row.bytes())
            .map(|b| match b {
                b'#' => Rgba::BLACK,
                b'r' => Rgba::RED,
                b'b' => Rgba::BLUE,
                _ => Rgba::WHITE,
            })
            .collect();
        Image::from_vec(width, rows.len(), data).expect("rectangular fixture")
    }

    fn points(line: &Polyline) -> Vec<(usize, usize)> {
        line.points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn l_shape_splits_at_the_corner() {
        let paths = trace_paths(parse(&["###", "#..", "#.."]));
        assert_eq!(paths.len(), 2);
        assert_eq!(points(&paths[0]), [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(points(&paths[1]), [(0, 1), (0, 2)]);
        assert!(paths.iter().all(|p| p.color == Rgba::BLACK));
    }

    #[test]
    fn closed_ring_is_one_path() {
        let paths = trace_paths(parse(&[
            ".......", //
            "..###..", //
            ".#...#.", //
            ".#...#.", //
            "..###..", //
            ".......",
        ]));
        assert_eq!(paths.len(), 1);
        assert_eq!(
            points(&paths[0]),
            [
                (2, 1),
                (3, 1),
                (4, 1),
                (5, 2),
                (5, 3),
                (4, 4),
                (3, 4),
                (2, 4),
                (1, 3),
                (1, 2)
            ]
        );
    }

    #[test]
    fn junction_follows_scan_order() {
        let paths = trace_paths(parse(&[
            ".......", //
            "...#...", //
            "...#...", //
            ".#####.", //
            "...#...", //
            "...#...", //
            ".......",
        ]));
        let got: Vec<_> = paths.iter().map(points).collect();
        assert_eq!(
            got,
            vec![
                vec![(3, 1), (3, 2), (2, 3), (1, 3)],
                vec![(3, 3), (4, 3), (5, 3)],
                vec![(3, 4), (3, 5)],
            ]
        );
    }

    #[test]
    fn isolated_pixel_is_a_single_point_path() {
        let paths = trace_paths(parse(&["...", ".r.", "..."]));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_degenerate());
        assert_eq!(points(&paths[0]), [(1, 1)]);
        assert_eq!(paths[0].color, Rgba::RED);
    }

    #[test]
    fn path_keeps_the_color_of_its_first_pixel() {
        let paths = trace_paths(parse(&["rrbb"]));
        assert_eq!(paths.len(), 1);
        assert_eq!(points(&paths[0]), [(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(paths[0].color, Rgba::RED);
    }

    #[test]
    fn blank_image_has_no_paths() {
        assert!(trace_paths(Image::new_fill(4, 3, Rgba::WHITE)).is_empty());
        assert!(trace_paths(Image::new_fill(0, 0, Rgba::WHITE)).is_empty());
    }

    #[test]
    fn tracer_is_lazy() {
        let mut tracer = PathTracer::new(parse(&["#.#", "...", "#.#"]));
        assert_eq!(tracer.next().map(|p| points(&p)), Some(vec![(0, 0)]));
        assert_eq!(tracer.next().map(|p| points(&p)), Some(vec![(2, 0)]));
        assert_eq!(tracer.count(), 2);
    }

    #[test]
    fn every_pixel_traced_exactly_once() {
        let (w, h) = (23, 17);
        let mut state = 0x2545_f491_u32;
        let mut img = Image::new_fill(w, h, Rgba::WHITE);
        for y in 0..h {
            for x in 0..w {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                if state >> 30 == 0 {
                    img.set(x, y, Rgba::GREEN);
                }
            }
        }

        let foreground: HashSet<GridPoint> = (0..h)
            .flat_map(|y| (0..w).map(move |x| GridPoint::new(x, y)))
            .filter(|p| !img.at(p.x, p.y).is_white())
            .collect();
        assert!(!foreground.is_empty());

        let paths = trace_paths(img);
        let mut seen = HashSet::new();
        for line in &paths {
            for pair in line.points.windows(2) {
                assert!(pair[0].is_adjacent_8(pair[1]));
            }
            for &p in &line.points {
                assert!(seen.insert(p), "{p:?} traced twice");
            }
        }
        assert_eq!(seen, foreground);
    }
}
