use log::{debug, warn};
use wb_core::{Image, Rgba};

/// Number of rounds the pipeline runs by default. There is no convergence
/// check; thick strokes may keep more than one pixel of width.
pub const DEFAULT_THINNING_ROUNDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubIteration {
    First,
    Second,
}

/// 8-neighborhood labelled clockwise from north: p2 is `(x, y-1)`, p3 is
/// `(x+1, y-1)`, ..., p9 is `(x-1, y-1)`.
#[derive(Debug, Clone, Copy)]
struct Neighborhood {
    p2: bool,
    p3: bool,
    p4: bool,
    p5: bool,
    p6: bool,
    p7: bool,
    p8: bool,
    p9: bool,
}

impl Neighborhood {
    fn at(img: &Image<Rgba>, x: usize, y: usize) -> Self {
        let fg = |dx: isize, dy: isize| {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            img.contains(nx, ny) && !img.at(nx as usize, ny as usize).is_white()
        };

        Self {
            p2: fg(0, -1),
            p3: fg(1, -1),
            p4: fg(1, 0),
            p5: fg(1, 1),
            p6: fg(0, 1),
            p7: fg(-1, 1),
            p8: fg(-1, 0),
            p9: fg(-1, -1),
        }
    }

    fn removable(&self, iter: SubIteration) -> bool {
        let Self {
            p2,
            p3,
            p4,
            p5,
            p6,
            p7,
            p8,
            p9,
        } = *self;

        let c = u8::from(!p2 & (p3 | p4))
            + u8::from(!p4 & (p5 | p6))
            + u8::from(!p6 & (p7 | p8))
            + u8::from(!p8 & (p9 | p2));
        let n1 = u8::from(p9 | p2) + u8::from(p3 | p4) + u8::from(p5 | p6) + u8::from(p7 | p8);
        let n2 = u8::from(p2 | p3) + u8::from(p4 | p5) + u8::from(p6 | p7) + u8::from(p8 | p9);
        let n = n1.min(n2);
        let m = match iter {
            SubIteration::First => (p6 | p7 | !p9) & p8,
            SubIteration::Second => (p2 | p3 | !p5) & p4,
        };

        c == 1 && (2..=3).contains(&n) && !m
    }
}

/// Runs one sub-iteration and returns the number of pixels removed.
///
/// `marker` is scratch space; it is cleared before use.
///
/// # Panics
/// Panics if `marker` does not match the dimensions of `img`.
pub fn thinning_pass(
    img: &mut Image<Rgba>,
    marker: &mut Image<bool>,
    iter: SubIteration,
) -> usize {
    assert_eq!(img.dims(), marker.dims(), "marker must match image dimensions");
    marker.fill(false);

    let mut removed = 0;
    for y in 1..img.height() {
        for x in 1..img.width() {
            if img.at(x, y).is_white() {
                continue;
            }
            if Neighborhood::at(img, x, y).removable(iter) {
                marker.set(x, y, true);
                removed += 1;
            }
        }
    }

    for (px, &marked) in img.data_mut().iter_mut().zip(marker.data()) {
        if marked {
            *px = Rgba::WHITE;
        }
    }

    removed
}

/// Runs `rounds` full rounds and returns the total number of pixels removed.
pub fn thin_rounds(img: &mut Image<Rgba>, rounds: usize) -> usize {
    let mut marker = Image::new_fill(img.width(), img.height(), false);
    let mut total = 0;
    for round in 0..rounds {
        let removed = thin_round(img, &mut marker);
        debug!("thinning round {round}: removed {removed} pixels");
        total += removed;
    }
    total
}

/// Thins with [`DEFAULT_THINNING_ROUNDS`] rounds.
pub fn guo_hall_thinning(img: &mut Image<Rgba>) -> usize {
    thin_rounds(img, DEFAULT_THINNING_ROUNDS)
}

/// Runs rounds until one removes nothing, up to `max_rounds`.
///
/// Returns the number of rounds executed, including the final round that
/// confirmed the fixed point.
pub fn thin_until_stable(img: &mut Image<Rgba>, max_rounds: usize) -> usize {
    let mut marker = Image::new_fill(img.width(), img.height(), false);
    for round in 0..max_rounds {
        let removed = thin_round(img, &mut marker);
        debug!("thinning round {round}: removed {removed} pixels");
        if removed == 0 {
            return round + 1;
        }
    }

    warn!("thinning did not converge within {max_rounds} rounds");
    max_rounds
}

fn thin_round(img: &mut Image<Rgba>, marker: &mut Image<bool>) -> usize {
    let first = thinning_pass(img, marker, SubIteration::First);
    first + thinning_pass(img, marker, SubIteration::Second)
}
